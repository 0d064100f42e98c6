//! Progress bar display management and coordination.
//!
//! One bar counts library items; a short-lived child bar follows each file
//! transfer. Console lines go through [`ProgressDisplay::println`] so they
//! never tear the bars.

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

/// Progress display manager that coordinates the export progress bars.
#[derive(Debug)]
pub struct ProgressDisplay {
    multi: MultiProgress,
    main: ProgressBar,
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display manager with an empty items bar.
    pub fn new(style_options: StyleOptions) -> Self {
        let multi = match style_options.is_enabled() {
            true => MultiProgress::new(),
            false => MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        };
        let main = multi.add(style_options.main().clone().to_progress_bar(0));

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// A display that draws nothing. Console lines are still printed.
    pub fn hidden() -> Self {
        Self::new(StyleOptions::hidden())
    }

    /// Set the number of items the run will go through.
    pub fn set_items(&self, total: usize) {
        self.main.set_length(total as u64);
        self.main.tick();
    }

    /// Show the title of the item being exported.
    pub fn set_current(&self, title: &str) {
        self.main.set_message(title.to_string());
    }

    /// Advance the items bar by one.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Create a child progress bar for one file transfer. Its length is set
    /// once the transfer knows the size.
    pub fn create_child_progress(&self, label: &str) -> ProgressBar {
        let pb = self
            .multi
            .add(self.style_options.child().clone().to_progress_bar(0));
        pb.set_message(label.to_string());
        pb
    }

    /// Finish a child progress bar based on configuration.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }

    /// Print a line above the bars.
    pub fn println(&self, line: impl AsRef<str>) {
        self.multi.suspend(|| println!("{}", line.as_ref()));
    }

    /// Finish the display, clearing or keeping the items bar per
    /// configuration.
    pub fn finish(&self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }
}
