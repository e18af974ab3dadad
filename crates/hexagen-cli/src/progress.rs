//! Terminal renderings of the core progress port.

use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

use hexagen_core::application::ports::{ProgressEvent, ProgressSink, SilentProgress};

use crate::cli::OutputFormat;
use crate::output::OutputManager;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} [{pos:>3}] {msg}";

/// A single spinner line whose message follows the current step.
///
/// Cheap to clone; every clone drives the same bar.
#[derive(Clone)]
pub struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Remove the spinner line. Safe to call after an error.
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for SpinnerProgress {
    fn step(&self, event: &ProgressEvent) {
        self.bar.inc(1);
        self.bar.set_message(event.to_string());
        if matches!(event, ProgressEvent::Finished { .. }) {
            self.bar.finish_and_clear();
        }
    }
}

/// One `==> step` line per event on stderr.
pub struct LineProgress {
    term: Term,
}

impl LineProgress {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl ProgressSink for LineProgress {
    fn step(&self, event: &ProgressEvent) {
        // Progress is best effort; a closed stderr must not abort generation.
        let _ = self.term.write_line(&format!("==> {event}"));
    }
}

/// Progress rendering for a real run.
pub enum ConsoleProgress {
    Spinner(SpinnerProgress),
    Lines,
    Silent,
}

impl ConsoleProgress {
    pub fn for_output(output: &OutputManager) -> Self {
        if output.is_quiet() {
            return Self::Silent;
        }
        match output.format() {
            OutputFormat::Human => Self::Spinner(SpinnerProgress::new()),
            OutputFormat::Plain => Self::Lines,
            OutputFormat::Json | OutputFormat::Auto => Self::Silent,
        }
    }

    pub fn sink(&self) -> Box<dyn ProgressSink> {
        match self {
            Self::Spinner(spinner) => Box::new(spinner.clone()),
            Self::Lines => Box::new(LineProgress::new()),
            Self::Silent => Box::new(SilentProgress),
        }
    }

    /// Whether toolchain stdout would interleave with the rendering.
    pub fn owns_terminal(&self) -> bool {
        matches!(self, Self::Spinner(_))
    }

    pub fn clear(&self) {
        if let Self::Spinner(spinner) = self {
            spinner.clear();
        }
    }
}
