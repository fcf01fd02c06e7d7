use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

/// StderrProgressReporter adapter for reporting build progress on stderr
///
/// The bar length follows the number of discovered nodes, which keeps
/// growing while the breadth-first traversal runs. Warnings are printed
/// above the bar so it keeps running afterwards.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} nodes - {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        match pb_option.as_ref() {
            Some(pb) if !pb.is_finished() => pb.clone(),
            _ => {
                let pb = ProgressBar::new(total as u64);
                pb.set_style(Self::bar_style());
                *pb_option = Some(pb.clone());
                pb
            }
        }
    }

    fn print_above_bar(&self, line: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| eprintln!("{}", line)),
            _ => eprintln!("{}", line),
        }
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print_above_bar(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_length(total.max(current) as u64);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        let line = message.yellow().to_string();
        self.print_above_bar(&line);
    }

    fn report_completion(&self, message: &str) {
        self.finish_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}
