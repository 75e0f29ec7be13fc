pub mod controller;
pub mod events;
pub mod routes;
pub mod server;
pub mod state;

pub use controller::{UiState, ViewController};
pub use events::{FormEvents, UiEvent};
pub use server::{ServerConfig, serve};
