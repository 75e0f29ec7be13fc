use std::fmt;

use thiserror::Error;
use url::Url;

use crate::domain::images::{ImageRequest, SalesChannel};

pub const ITEM_NAME_REQUIRED: &str = "Item name is required";
pub const INVALID_URL_FORMAT: &str = "Invalid URL format. Must start with http:// or https://";

/// The named inputs of the image form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    ItemName,
    OptionName,
    ImageUrl,
    SalesUrl,
    SalesChannel,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::ItemName,
        Field::OptionName,
        Field::ImageUrl,
        Field::SalesUrl,
        Field::SalesChannel,
    ];

    /// Fields that carry validation rules and an inline error slot.
    pub const VALIDATED: [Field; 3] = [Field::ItemName, Field::ImageUrl, Field::SalesUrl];

    pub fn form_name(self) -> &'static str {
        match self {
            Field::ItemName => "itemName",
            Field::OptionName => "optionName",
            Field::ImageUrl => "imageUrl",
            Field::SalesUrl => "salesUrl",
            Field::SalesChannel => "salesChannel",
        }
    }

    pub fn from_form_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.form_name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Item name is required")]
    ItemNameRequired,
    #[error("Invalid URL format. Must start with http:// or https://")]
    InvalidUrl,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::ItemNameRequired => ITEM_NAME_REQUIRED,
            ValidationError::InvalidUrl => INVALID_URL_FORMAT,
        }
    }
}

pub fn validate_item_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::ItemNameRequired)
    } else {
        Ok(())
    }
}

/// Optional URL field: blank passes, anything else must parse as an absolute
/// URL. Any parse failure counts as invalid; the scheme is not restricted.
pub fn validate_url(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    Url::parse(trimmed)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidUrl)
}

pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::ItemName => validate_item_name(value),
        Field::ImageUrl | Field::SalesUrl => validate_url(value),
        Field::OptionName | Field::SalesChannel => Ok(()),
    }
}

/// Raw, untrimmed values of every form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub item_name: String,
    pub option_name: String,
    pub image_url: String,
    pub sales_url: String,
    pub sales_channel: String,
}

impl FormInput {
    /// The fixed record behind the "load example" action.
    pub fn example() -> Self {
        Self {
            item_name: "MacBook Pro".to_string(),
            option_name: "16-inch".to_string(),
            image_url: "https://via.placeholder.com/600x400.png".to_string(),
            sales_url: "https://www.apple.com/kr/macbook-pro/".to_string(),
            sales_channel: "NAVER".to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ItemName => &self.item_name,
            Field::OptionName => &self.option_name,
            Field::ImageUrl => &self.image_url,
            Field::SalesUrl => &self.sales_url,
            Field::SalesChannel => &self.sales_channel,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::ItemName => &mut self.item_name,
            Field::OptionName => &mut self.option_name,
            Field::ImageUrl => &mut self.image_url,
            Field::SalesUrl => &mut self.sales_url,
            Field::SalesChannel => &mut self.sales_channel,
        };
        *slot = value.into();
    }

    /// Run every field rule and collect the failures in field order.
    pub fn validate(&self) -> Vec<(Field, ValidationError)> {
        Field::VALIDATED
            .into_iter()
            .filter_map(|field| {
                validate_field(field, self.get(field))
                    .err()
                    .map(|err| (field, err))
            })
            .collect()
    }

    /// Build the wire payload. Values are trimmed and blanks become `None`.
    pub fn to_request(&self) -> ImageRequest {
        ImageRequest {
            item_name: self.item_name.trim().to_string(),
            option_name: non_blank(&self.option_name),
            image_url: non_blank(&self.image_url),
            sales_url: non_blank(&self.sales_url),
            sales_channel: SalesChannel::parse(&self.sales_channel),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
