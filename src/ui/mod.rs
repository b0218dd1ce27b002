//! Terminal UI: interactivity detection, formatted output, progress

pub mod context;
pub mod output;
pub mod progress;

pub use context::UiContext;
pub use progress::ExtensionSpinner;
