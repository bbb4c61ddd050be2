use indicatif::ProgressBar;

pub struct FixProgress {
    bar: ProgressBar,
}

impl FixProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = indicatif::ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { bar }
    }

    pub fn set_command(&self, command: &str) {
        self.bar.set_message(format!("Running... [{}]", command));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
