pub mod pacer;

pub use pacer::RequestPacer;

use crate::error::MapError;
use crate::map_config::MapConfig;
use crate::registry::{ArtistRegistry, ArtistSnapshot};
use crate::source::ArtistSource;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Hooks for reporting traversal progress. Every method defaults to a no-op.
pub trait TraversalProgress {
    fn started(&self, _listened_total: usize) {}
    fn artist_started(&self, _position: usize, _name: &str) {}
    fn finished(&self) {}
}

impl TraversalProgress for () {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalStats {
    pub listened_artists: usize,
    pub seeds_queried: usize,
    /// Listened artists without an MBID
    pub seeds_skipped: usize,
    pub related_failures: usize,
    pub pruned: usize,
    pub duration_ms: u64,
}

#[derive(Debug)]
pub struct TraversalOutcome {
    pub snapshot: ArtistSnapshot,
    pub pruned: Vec<String>,
    pub stats: TraversalStats,
}

/// Walks the listener's top artists and their related artists into a registry.
///
/// Only the top-artists request is fatal. A failed related-artists request
/// is logged and counted, and the walk moves on to the next listened artist.
pub fn build_artist_map<S, P>(
    source: &S,
    config: &MapConfig,
    progress: &P,
) -> Result<TraversalOutcome, MapError>
where
    S: ArtistSource + ?Sized,
    P: TraversalProgress + ?Sized,
{
    let start_time = Instant::now();

    let top_artists = source
        .top_artists(&config.listener, config.sample_size, config.window)
        .map_err(|source| MapError::TopArtists {
            listener: config.listener.clone(),
            source,
        })?;

    info!(
        listener = %config.listener,
        window = %config.window,
        count = top_artists.len(),
        "fetched top artists"
    );

    let mut registry = ArtistRegistry::new(config.link_policy);
    let mut pacer = RequestPacer::new(config.request_delay);
    let mut stats = TraversalStats::default();

    progress.started(top_artists.len());

    for (position, listened) in top_artists.iter().enumerate() {
        progress.artist_started(position, &listened.name);
        registry.record_listened(&listened.name, listened.mbid.clone());
        stats.listened_artists += 1;

        let Some(mbid) = &listened.mbid else {
            debug!(artist = %listened.name, "no MBID, skipping related artists");
            stats.seeds_skipped += 1;
            continue;
        };

        pacer.wait();
        stats.seeds_queried += 1;

        let related = match source.related_artists(mbid, config.depth) {
            Ok(related) => related,
            Err(error) => {
                warn!(artist = %listened.name, %mbid, %error, "related artists request failed");
                stats.related_failures += 1;
                continue;
            }
        };

        if related.is_empty() {
            debug!(artist = %listened.name, %mbid, "no related artists found");
        }

        for record in related {
            registry.record_related(&listened.name, &record.name, record.mbid)?;
        }
    }

    let pruned = if config.prune {
        registry.prune_isolated_related()
    } else {
        Vec::new()
    };

    progress.finished();

    stats.pruned = pruned.len();
    stats.duration_ms = start_time.elapsed().as_millis() as u64;

    info!(
        artists = registry.len(),
        pruned = stats.pruned,
        failures = stats.related_failures,
        "artist map complete"
    );

    Ok(TraversalOutcome {
        snapshot: registry.snapshot(),
        pruned,
        stats,
    })
}
