pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod lastfm;
pub mod progress;
pub mod prompt;
pub mod render;
pub mod utils;

// Re-export commonly used items
pub use app::{AppError, ArtistMapApp, MapResult, OutputOptions, require_api_key, resolve_config};
pub use args::Args;
pub use lastfm::LastFmClient;
pub use prompt::Prompter;
pub use utils::format_number;
