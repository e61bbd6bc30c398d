//! Use case for opening provider documentation links
//! 打开地图服务文档链接的用例

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use fl_core::ports::LinkOpenerPort;

/// The two fixed documentation destinations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProviderDocLink {
    CloudConsole,
    ApiKeyGuide,
}

impl ProviderDocLink {
    pub fn url(&self) -> &'static str {
        match self {
            ProviderDocLink::CloudConsole => "https://console.cloud.google.com/google/maps-apis/",
            ProviderDocLink::ApiKeyGuide => {
                "https://developers.google.com/maps/documentation/javascript/get-api-key"
            }
        }
    }
}

/// Use case: open one of the provider documentation pages.
pub struct OpenProviderDoc {
    opener: Arc<dyn LinkOpenerPort>,
}

impl OpenProviderDoc {
    /// Create a new use case instance.
    pub fn new(opener: Arc<dyn LinkOpenerPort>) -> Self {
        Self { opener }
    }

    /// Execute the use case.
    pub fn execute(&self, link: ProviderDocLink) -> Result<()> {
        info!("Opening provider documentation: {}", link.url());
        self.opener.open_external(link.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingOpener {
        urls: Mutex<Vec<String>>,
    }

    impl LinkOpenerPort for RecordingOpener {
        fn open_external(&self, url: &str) -> Result<()> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_opens_the_requested_doc() {
        let opener = Arc::new(RecordingOpener {
            urls: Mutex::new(Vec::new()),
        });
        let use_case = OpenProviderDoc::new(opener.clone());

        use_case.execute(ProviderDocLink::ApiKeyGuide).unwrap();

        assert_eq!(
            opener.urls.lock().unwrap().as_slice(),
            ["https://developers.google.com/maps/documentation/javascript/get-api-key"]
        );
    }

    #[test]
    fn test_link_deserializes_from_snake_case() {
        let link: ProviderDocLink = serde_json::from_str("\"cloud_console\"").unwrap();
        assert_eq!(link, ProviderDocLink::CloudConsole);
    }
}
