mod build_banner;
mod open_docs;

pub use build_banner::BuildProviderBanner;
pub use open_docs::{OpenProviderDoc, ProviderDocLink};
