use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};

use crate::application::events::{FormEvents, UiEvent};
use crate::domain::errors::{ErrorNotice, FetchError};
use crate::domain::images::FetchResponse;
use crate::domain::services::{Clipboard, ImageFetcher};
use crate::domain::validation::{Field, FormInput, validate_field};
use crate::presentation::form::{CopyFeedback, FormView};
use crate::presentation::web::views::ResultsView;

/// How long the global error banner stays up before hiding itself.
pub const ERROR_BANNER_TIMEOUT: Duration = Duration::from_secs(10);
/// How long "Copied!"/"Failed" stays on a copy button.
pub const COPY_FEEDBACK_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    Results,
    Error,
}

/// Drives one form: validation, the submission cycle, rendering, and the
/// transient banner/copy timers.
pub struct ViewController<V> {
    view: V,
    fetcher: Arc<dyn ImageFetcher>,
    clipboard: Arc<dyn Clipboard>,
    state: UiState,
    results: Option<ResultsView>,
    error_deadline: Option<Instant>,
    copy_deadlines: BTreeMap<usize, Instant>,
}

impl<V: FormView> ViewController<V> {
    pub fn new(view: V, fetcher: Arc<dyn ImageFetcher>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            view,
            fetcher,
            clipboard,
            state: UiState::Idle,
            results: None,
            error_deadline: None,
            copy_deadlines: BTreeMap::new(),
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.copy_deadlines
            .values()
            .copied()
            .chain(self.error_deadline)
            .min()
    }

    /// Expire every timer due at or before `now`.
    pub fn fire_due_timers(&mut self, now: Instant) {
        if self.error_deadline.is_some_and(|at| at <= now) {
            debug!("auto-hiding error banner");
            self.hide_error();
        }

        let due: Vec<usize> = self
            .copy_deadlines
            .iter()
            .filter(|&(_, at)| *at <= now)
            .map(|(card, _)| *card)
            .collect();
        for card in due {
            self.copy_deadlines.remove(&card);
            self.view.set_copy_feedback(card, CopyFeedback::Idle);
        }
    }

    pub async fn dispatch(&mut self, event: UiEvent) {
        debug!(?event, state = ?self.state, "handling ui event");
        match event {
            UiEvent::Input { field, value } => self.view.set_field_value(field, &value),
            UiEvent::Blur(field) => {
                self.blur(field);
            }
            UiEvent::Submit => {
                self.submit().await;
            }
            UiEvent::Clear => self.clear(),
            UiEvent::LoadExample => self.load_example(),
            UiEvent::CopyUrl(card) => self.copy_url(card).await,
            UiEvent::DismissError => self.dismiss_error(),
        }
    }

    /// Handle events until the sender side closes, firing timers in between.
    /// Returns the view in its final state.
    pub async fn run(mut self, mut events: mpsc::Receiver<UiEvent>) -> V {
        loop {
            let deadline = self.next_deadline();
            let timer = async move {
                match deadline {
                    Some(at) => sleep_until(at).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.dispatch(event).await,
                    None => break,
                },
                () = timer => self.fire_due_timers(Instant::now()),
            }
        }

        debug!(state = ?self.state, "event channel closed");
        self.view
    }

    fn check_field(&mut self, field: Field) -> bool {
        let value = self.view.field_value(field);
        match validate_field(field, &value) {
            Ok(()) => {
                self.view.clear_field_error(field);
                true
            }
            Err(err) => {
                self.view.show_field_error(field, err.message());
                false
            }
        }
    }

    fn clear_errors(&mut self) {
        for field in Field::VALIDATED {
            self.view.clear_field_error(field);
        }
        self.hide_error();
    }

    fn hide_error(&mut self) {
        self.view.hide_global_error();
        self.error_deadline = None;
        if self.state == UiState::Error {
            self.state = UiState::Idle;
        }
    }

    fn drop_results(&mut self) {
        self.view.hide_results();
        self.results = None;
        self.copy_deadlines.clear();
    }

    fn enter_loading(&mut self) {
        self.state = UiState::Loading;
        self.view.set_controls_enabled(false);
        self.view.set_loading(true);
    }

    fn leave_loading(&mut self) {
        self.view.set_loading(false);
        self.view.set_controls_enabled(true);
    }

    fn render_results(&mut self, response: &FetchResponse) {
        let results = ResultsView::from_response(response);
        info!(
            image_count = results.cards.len(),
            total_loading_time_ms = results.total_loading_time_ms,
            "rendering results"
        );

        self.copy_deadlines.clear();
        self.view.show_results(&results);
        self.view.scroll_to_results();
        self.results = Some(results);
        self.state = UiState::Results;
    }

    fn show_error(&mut self, err: &FetchError) {
        let notice = ErrorNotice::from(err);
        warn!(
            status = err.status(),
            code = err.code(),
            notice = %notice.message,
            "submission failed"
        );

        self.drop_results();
        self.view.show_global_error(&notice);
        self.error_deadline = Some(Instant::now() + ERROR_BANNER_TIMEOUT);
        self.state = UiState::Error;
    }
}

#[async_trait]
impl<V: FormView> FormEvents for ViewController<V> {
    async fn submit(&mut self) -> UiState {
        self.clear_errors();

        let mut valid = true;
        for field in Field::VALIDATED {
            valid &= self.check_field(field);
        }
        if !valid {
            debug!("form validation failed");
            return self.state;
        }

        let request = self.view.read_input().to_request();
        self.enter_loading();

        let outcome = self.fetcher.fetch_images(&request).await;

        self.leave_loading();
        match outcome {
            Ok(response) => self.render_results(&response),
            Err(err) => self.show_error(&err),
        }

        self.state
    }

    fn clear(&mut self) {
        self.view.reset_fields();
        self.clear_errors();
        self.drop_results();
        self.state = UiState::Idle;
        debug!("form cleared");
    }

    fn load_example(&mut self) {
        let example = FormInput::example();
        for field in Field::ALL {
            self.view.set_field_value(field, example.get(field));
        }
        self.clear_errors();
        debug!("example data loaded");
    }

    fn blur(&mut self, field: Field) -> bool {
        self.check_field(field)
    }

    async fn copy_url(&mut self, card: usize) {
        let Some(url) = self
            .results
            .as_ref()
            .and_then(|results| results.card(card))
            .map(|c| c.url.clone())
        else {
            warn!(card, "copy requested for a card that is not rendered");
            return;
        };

        let feedback = match self.clipboard.write_text(&url).await {
            Ok(()) => {
                debug!(card, url = %url, "copied image url");
                CopyFeedback::Copied
            }
            Err(err) => {
                warn!(card, error = %err, "failed to copy image url");
                CopyFeedback::Failed
            }
        };

        self.view.set_copy_feedback(card, feedback);
        self.copy_deadlines
            .insert(card, Instant::now() + COPY_FEEDBACK_TIMEOUT);
    }

    fn dismiss_error(&mut self) {
        self.hide_error();
    }
}
