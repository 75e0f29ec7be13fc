mod page;
mod results;

pub use page::{BannerView, FormPageView};
pub use results::{ImageCardView, PLACEHOLDER_IMAGE, ResultsView};
