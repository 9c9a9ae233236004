use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Reports manifest discovery on stderr
pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            current_bar: None,
        }
    }

    fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let mut frames: Vec<&str> = SPINNER_FRAMES.to_vec();
        frames.push("✓");
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&frames),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_discovery(&mut self, root: &Path) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Discovering projects in {}...",
            style("🔍").cyan(),
            style(root.display()).bold()
        );
        let spinner = self.create_spinner("Scanning for module.toml files...");
        self.current_bar = Some(spinner);
    }

    pub fn checking_manifest(&self, path: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Reading: {}...", path.display()));
        } else {
            let _ = self.term.clear_line();
            eprint!(
                "\r{} Reading: {}... ",
                style(self.next_frame()).cyan(),
                style(path.display()).dim()
            );
        }
    }

    pub fn finish_discovery(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "\r{} Discovery complete: found {} {}",
            style("✓").green(),
            style(count).yellow().bold(),
            pluralize("project", count)
        );
    }
}
