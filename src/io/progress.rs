//! Progress display for long-running experiments

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar for one experiment
///
/// A hidden bar still counts positions, so callers never need to branch on
/// whether output is suppressed.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a reporter for `total` steps, drawing to stderr unless `quiet`
    pub fn new(label: &str, total: usize, quiet: bool) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(total as u64),
            if quiet {
                ProgressDrawTarget::hidden()
            } else {
                ProgressDrawTarget::stderr()
            },
        );
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(250));

        Self { bar }
    }

    /// Mark one step as done
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Show a short status next to the bar
    pub fn set_message(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    /// Steps completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Stop the bar, leaving a final message
    ///
    /// The position stays at the steps actually completed, so a run that
    /// ends early is not drawn as complete.
    pub fn finish(&self, message: impl Into<String>) {
        self.bar.abandon_with_message(message.into());
    }
}
