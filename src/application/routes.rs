use std::sync::Arc;

use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::http::{HeaderValue, Request, StatusCode};
use axum::response::Html;
use axum::routing::get;
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span, error, info};

use crate::application::controller::ViewController;
use crate::application::events::FormEvents;
use crate::application::state::AppState;
use crate::domain::validation::FormInput;
use crate::presentation::form::FormDocument;
use crate::presentation::web::templates::{IndexTemplate, render_template};
use crate::presentation::web::views::FormPageView;

/// 64 KB request body limit; the form only carries five short fields.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn app_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", get(index_page).post(submit_form))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(ImageFetchMakeSpan)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::CONTENT_SECURITY_POLICY,
                    HeaderValue::from_static(
                        "default-src 'self'; \
                         script-src 'self' 'unsafe-inline'; \
                         style-src 'self' 'unsafe-inline'; \
                         img-src * data:; \
                         frame-ancestors 'none'",
                    ),
                )),
        )
        .with_state(state)
}

#[derive(Clone)]
struct ImageFetchMakeSpan;

impl<B> MakeSpan<B> for ImageFetchMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
        )
    }
}

pub(crate) fn render_html<T: Template>(template: T) -> Result<Html<String>, StatusCode> {
    render_template(template).map(Html).map_err(|err| {
        error!(error = %err, "failed to render template");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum FormAction {
    #[default]
    Submit,
    Clear,
    Example,
    Dismiss,
}

/// Posted form body. Missing inputs decode as blank.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct FormFields {
    item_name: String,
    option_name: String,
    image_url: String,
    sales_url: String,
    sales_channel: String,
    action: FormAction,
}

impl FormFields {
    fn into_parts(self) -> (FormAction, FormInput) {
        let input = FormInput {
            item_name: self.item_name,
            option_name: self.option_name,
            image_url: self.image_url,
            sales_url: self.sales_url,
            sales_channel: self.sales_channel,
        };
        (self.action, input)
    }
}

async fn index_page() -> Result<Html<String>, StatusCode> {
    render_html(IndexTemplate::new(FormPageView::from(
        &FormDocument::default(),
    )))
}

async fn submit_form(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Result<Html<String>, StatusCode> {
    let (action, input) = fields.into_parts();
    info!(?action, "form posted");

    let mut controller = ViewController::new(
        FormDocument::with_input(input),
        Arc::clone(&state.fetcher),
        Arc::clone(&state.clipboard),
    );

    match action {
        FormAction::Submit => {
            controller.submit().await;
        }
        FormAction::Clear => controller.clear(),
        FormAction::Example => controller.load_example(),
        FormAction::Dismiss => controller.dismiss_error(),
    }

    render_html(IndexTemplate::new(FormPageView::from(controller.view())))
}
