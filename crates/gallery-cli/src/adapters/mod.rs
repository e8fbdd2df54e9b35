//! Console implementations of the rendering-surface ports.

mod console;

pub use console::{ConsoleNotifier, ConsoleUploadView};
