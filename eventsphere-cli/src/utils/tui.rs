use std::borrow::Cow;
use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_RATE: Duration = Duration::from_millis(100);
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "];

/// Spinner on stderr. Hidden when stderr is not a terminal so piped output
/// stays clean.
pub fn loading_spinner(message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let spinner = if std::io::stderr().is_terminal() {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };

    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .map(|style| style.tick_strings(FRAMES))
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(TICK_RATE);
    spinner
}

/// Await `work` behind a spinner, clearing it before returning.
pub async fn with_spinner<F: Future>(message: impl Into<Cow<'static, str>>, work: F) -> F::Output {
    let spinner = loading_spinner(message);
    let output = work.await;
    spinner.finish_and_clear();
    output
}
