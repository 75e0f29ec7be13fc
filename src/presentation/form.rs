use std::collections::BTreeMap;

use crate::domain::errors::ErrorNotice;
use crate::domain::validation::{Field, FormInput};
use crate::presentation::web::views::ResultsView;

/// Transient state of a card's copy-URL control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyFeedback {
    pub fn label(self) -> &'static str {
        match self {
            CopyFeedback::Idle => "Copy URL",
            CopyFeedback::Copied => "Copied!",
            CopyFeedback::Failed => "Failed",
        }
    }
}

/// The named hooks of the image form that the controller reads and drives.
pub trait FormView: Send {
    fn field_value(&self, field: Field) -> String;
    fn set_field_value(&mut self, field: Field, value: &str);
    /// Restore every field to its initial (blank) value.
    fn reset_fields(&mut self);

    fn show_field_error(&mut self, field: Field, message: &str);
    fn clear_field_error(&mut self, field: Field);

    fn set_controls_enabled(&mut self, enabled: bool);
    fn set_loading(&mut self, visible: bool);

    fn show_global_error(&mut self, notice: &ErrorNotice);
    fn hide_global_error(&mut self);

    fn show_results(&mut self, results: &ResultsView);
    fn hide_results(&mut self);
    fn scroll_to_results(&mut self) {}

    fn set_copy_feedback(&mut self, card: usize, feedback: CopyFeedback);

    /// Snapshot of every field value.
    fn read_input(&self) -> FormInput {
        let mut input = FormInput::default();
        for field in Field::ALL {
            input.set(field, self.field_value(field));
        }
        input
    }
}

/// In-memory form: the state a page or terminal renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDocument {
    pub input: FormInput,
    pub field_errors: BTreeMap<Field, String>,
    pub controls_enabled: bool,
    pub loading: bool,
    pub global_error: Option<ErrorNotice>,
    pub results: Option<ResultsView>,
    pub copy_feedback: BTreeMap<usize, CopyFeedback>,
    pub scrolled_to_results: bool,
}

impl Default for FormDocument {
    fn default() -> Self {
        Self::with_input(FormInput::default())
    }
}

impl FormDocument {
    pub fn with_input(input: FormInput) -> Self {
        Self {
            input,
            field_errors: BTreeMap::new(),
            controls_enabled: true,
            loading: false,
            global_error: None,
            results: None,
            copy_feedback: BTreeMap::new(),
            scrolled_to_results: false,
        }
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn copy_feedback(&self, card: usize) -> CopyFeedback {
        self.copy_feedback.get(&card).copied().unwrap_or_default()
    }
}

impl FormView for FormDocument {
    fn field_value(&self, field: Field) -> String {
        self.input.get(field).to_string()
    }

    fn set_field_value(&mut self, field: Field, value: &str) {
        self.input.set(field, value);
    }

    fn reset_fields(&mut self) {
        self.input = FormInput::default();
    }

    fn show_field_error(&mut self, field: Field, message: &str) {
        self.field_errors.insert(field, message.to_string());
    }

    fn clear_field_error(&mut self, field: Field) {
        self.field_errors.remove(&field);
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn show_global_error(&mut self, notice: &ErrorNotice) {
        self.global_error = Some(notice.clone());
    }

    fn hide_global_error(&mut self) {
        self.global_error = None;
    }

    fn show_results(&mut self, results: &ResultsView) {
        self.results = Some(results.clone());
        self.copy_feedback.clear();
    }

    fn hide_results(&mut self) {
        self.results = None;
        self.copy_feedback.clear();
        self.scrolled_to_results = false;
    }

    fn scroll_to_results(&mut self) {
        self.scrolled_to_results = true;
    }

    fn set_copy_feedback(&mut self, card: usize, feedback: CopyFeedback) {
        if feedback == CopyFeedback::Idle {
            self.copy_feedback.remove(&card);
        } else {
            self.copy_feedback.insert(card, feedback);
        }
    }
}
