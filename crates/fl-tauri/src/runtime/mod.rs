//! Runtime wiring for the tracking adapter layer.
//! 追踪适配层的运行时装配

use std::sync::Arc;

use fl_app::usecases::provider::{BuildProviderBanner, OpenProviderDoc};
use fl_app::usecases::tracking::{BuildTrackingFallbackView, OpenExternalMap, SelectDonation};
use fl_core::ports::{ClockPort, LinkOpenerPort, SelectionSinkPort};
use fl_core::provider::MapProviderConfig;

/// Managed Tauri state holding the ports and the frozen provider config.
///
/// 由 composition root 构建一次，之后只读。
pub struct TrackingRuntime {
    clock: Arc<dyn ClockPort>,
    opener: Arc<dyn LinkOpenerPort>,
    selection_sink: Arc<dyn SelectionSinkPort>,
    provider_config: MapProviderConfig,
}

impl TrackingRuntime {
    pub fn new(
        clock: Arc<dyn ClockPort>,
        opener: Arc<dyn LinkOpenerPort>,
        selection_sink: Arc<dyn SelectionSinkPort>,
        provider_config: MapProviderConfig,
    ) -> Self {
        Self {
            clock,
            opener,
            selection_sink,
            provider_config,
        }
    }

    /// The credential decision input, resolved once at startup.
    pub fn provider_config(&self) -> &MapProviderConfig {
        &self.provider_config
    }

    /// Use-case accessor.
    pub fn usecases(&self) -> Usecases<'_> {
        Usecases { runtime: self }
    }
}

/// Builds use cases on demand; they are cheap to construct.
pub struct Usecases<'a> {
    runtime: &'a TrackingRuntime,
}

impl Usecases<'_> {
    pub fn build_fallback_view(&self) -> BuildTrackingFallbackView {
        BuildTrackingFallbackView::new(self.runtime.clock.clone())
    }

    pub fn select_donation(&self) -> SelectDonation {
        SelectDonation::new(self.runtime.selection_sink.clone())
    }

    pub fn open_external_map(&self) -> OpenExternalMap {
        OpenExternalMap::new(self.runtime.opener.clone())
    }

    pub fn build_provider_banner(&self) -> BuildProviderBanner {
        BuildProviderBanner::new()
    }

    pub fn open_provider_doc(&self) -> OpenProviderDoc {
        OpenProviderDoc::new(self.runtime.opener.clone())
    }
}
