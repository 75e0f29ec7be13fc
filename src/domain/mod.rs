pub mod errors;
pub mod formatting;
pub mod images;
pub mod services;
pub mod validation;

// Re-exports
pub use errors::{ErrorNotice, FetchError, Severity};
pub use images::{FetchResponse, ImageRequest, ImageResult, ImageSource, SalesChannel};
pub use validation::{Field, FormInput, ValidationError};
