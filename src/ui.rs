use std::path::Path;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

pub fn info(text: &str) {
    println!("{}", text);
}

pub fn success(text: &str) {
    println!("{}", style(text).green());
}

pub fn warn(text: &str) {
    eprintln!("{}", style(text).yellow());
}

pub fn error(text: &str) {
    eprintln!("{}", style(text).red());
}

/// One line per file written.
pub fn created(path: &Path) {
    println!("  {} {}", style("+").green(), path.display());
}

/// Echoes a command's captured output unchanged, followed by a newline.
pub fn command_output(output: &str) {
    println!("{}", output);
}

/// Spinner that only draws when stdout is a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = if Term::stdout().is_term() {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
