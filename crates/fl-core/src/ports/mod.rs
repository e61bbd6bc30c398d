//! Port traits implemented by the outer layers.
mod clock;
mod link_opener;
mod selection;
mod settings;

pub use clock::ClockPort;
pub use link_opener::LinkOpenerPort;
pub use selection::SelectionSinkPort;
pub use settings::SettingsPort;
