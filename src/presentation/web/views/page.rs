use crate::domain::validation::Field;
use crate::presentation::form::FormDocument;

use super::ResultsView;

pub struct BannerView {
    pub message: String,
    pub alert_class: &'static str,
}

/// Flattened form state for the page template.
pub struct FormPageView {
    pub item_name: String,
    pub option_name: String,
    pub image_url: String,
    pub sales_url: String,
    pub sales_channel: String,
    pub item_name_error: Option<String>,
    pub image_url_error: Option<String>,
    pub sales_url_error: Option<String>,
    pub controls_disabled: bool,
    pub loading: bool,
    pub banner: Option<BannerView>,
    pub results: Option<ResultsView>,
}

impl From<&FormDocument> for FormPageView {
    fn from(doc: &FormDocument) -> Self {
        let error = |field| doc.field_error(field).map(str::to_string);

        Self {
            item_name: doc.input.item_name.clone(),
            option_name: doc.input.option_name.clone(),
            image_url: doc.input.image_url.clone(),
            sales_url: doc.input.sales_url.clone(),
            sales_channel: doc.input.sales_channel.clone(),
            item_name_error: error(Field::ItemName),
            image_url_error: error(Field::ImageUrl),
            sales_url_error: error(Field::SalesUrl),
            controls_disabled: !doc.controls_enabled,
            loading: doc.loading,
            banner: doc.global_error.as_ref().map(|notice| BannerView {
                message: notice.message.clone(),
                alert_class: notice.severity.alert_class(),
            }),
            results: doc.results.clone(),
        }
    }
}
