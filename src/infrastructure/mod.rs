pub mod client;
pub mod clipboard;
