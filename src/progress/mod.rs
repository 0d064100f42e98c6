//! Progress module containing progress bar functionality.
//!
//! - `style` - progress bar styling options and templates
//! - `display` - coordination of the items bar, per-file bars and console lines

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
