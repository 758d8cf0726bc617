use crate::source::TimeWindow;
use std::time::Duration;

/// Minimum gap between consecutive related-artist requests
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(250);

/// Which neighbor links `record_related` appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPolicy {
    /// source -> related and related -> source
    #[default]
    Bidirectional,
    /// source -> related only
    Forward,
}

/// Configuration for building an artist map
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Last.fm username whose history seeds the map
    pub listener: String,
    /// Number of top listened artists to fetch
    pub sample_size: usize,
    /// Related artists requested per listened artist
    pub depth: usize,
    /// Listening-history window
    pub window: TimeWindow,
    /// Drop related-only artists that only one listened artist points at
    pub prune: bool,
    pub link_policy: LinkPolicy,
    pub request_delay: Duration,
}

impl MapConfig {
    pub fn new(listener: impl Into<String>, sample_size: usize, depth: usize, window: TimeWindow) -> Self {
        Self {
            listener: listener.into(),
            sample_size,
            depth,
            window,
            ..Self::default()
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            listener: String::new(),
            sample_size: 20,
            depth: 10,
            window: TimeWindow::Overall,
            prune: true,
            link_policy: LinkPolicy::Bidirectional,
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }
}
