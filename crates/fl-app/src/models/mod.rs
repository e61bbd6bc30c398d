mod provider_banner;
mod tracking_view;

pub use provider_banner::{
    BannerAlertView, BulletColor, DocLinkView, FeatureItemView, ProviderBannerView,
};
pub use tracking_view::{
    DonationCardView, LiveOverlayView, MapPanelView, TrackingFallbackView, VolunteerLineView,
};
