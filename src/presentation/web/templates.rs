use askama::Template;

use super::views::{FormPageView, ResultsView};

#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub version: &'static str,
    pub page: FormPageView,
}

impl IndexTemplate {
    pub fn new(page: FormPageView) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            page,
        }
    }
}

/// Standalone results document, as written by `fetch --html`.
#[derive(Template)]
#[template(path = "pages/results.html")]
pub struct ResultsPageTemplate {
    pub title: String,
    pub results: ResultsView,
}

pub fn render_template<T: Template>(template: T) -> Result<String, askama::Error> {
    template.render()
}
