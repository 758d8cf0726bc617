use artistmap_core::TraversalProgress;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the listener's top artists.
pub struct TraversalBar {
    bar: ProgressBar,
}

impl TraversalBar {
    pub fn new(visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        };

        if let Ok(style) =
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }

        Self { bar }
    }
}

impl TraversalProgress for TraversalBar {
    fn started(&self, listened_total: usize) {
        self.bar.set_length(listened_total as u64);
    }

    fn artist_started(&self, position: usize, name: &str) {
        self.bar.set_position(position as u64);
        self.bar.set_message(name.to_string());
    }

    fn finished(&self) {
        self.bar.finish_and_clear();
    }
}
