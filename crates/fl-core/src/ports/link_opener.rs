use anyhow::Result;

/// Opens a URL in a new external browsing context.
///
/// Fire-and-forget：打开之后与该上下文再无任何交互。
pub trait LinkOpenerPort: Send + Sync {
    fn open_external(&self, url: &str) -> Result<()>;
}
