use async_trait::async_trait;

use crate::application::controller::UiState;
use crate::domain::validation::Field;

/// A user interaction with the form, as delivered to the controller's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Input { field: Field, value: String },
    Blur(Field),
    Submit,
    Clear,
    LoadExample,
    CopyUrl(usize),
    DismissError,
}

/// One handler per form interaction.
#[async_trait]
pub trait FormEvents {
    /// Validate, fetch, and render. Returns the state the cycle ended in.
    async fn submit(&mut self) -> UiState;
    fn clear(&mut self);
    fn load_example(&mut self);
    /// Re-check a single field. Returns whether it is valid.
    fn blur(&mut self, field: Field) -> bool;
    /// Copy the URL of the card at `card` (0-based) to the clipboard.
    async fn copy_url(&mut self, card: usize);
    fn dismiss_error(&mut self);
}
