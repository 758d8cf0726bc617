pub mod error;
pub mod graph;
pub mod map_config;
pub mod registry;
pub mod source;
pub mod traversal;

// Re-export commonly used items
pub use error::{MapError, RegistryError};
pub use graph::{ArtistGraph, GraphEdge, GraphNode, build as build_graph};
pub use map_config::{DEFAULT_REQUEST_DELAY, LinkPolicy, MapConfig};
pub use registry::{Artist, ArtistRegistry, ArtistSnapshot};
pub use source::{ArtistRecord, ArtistSource, Mbid, SourceError, TimeWindow, UnknownTimeWindow};
pub use traversal::{
    RequestPacer, TraversalOutcome, TraversalProgress, TraversalStats, build_artist_map,
};
