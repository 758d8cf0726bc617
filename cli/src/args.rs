use artistmap_core::TimeWindow;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "artistmap")]
#[command(about = "Map the artists you listen to and the artists related to them")]
pub struct Args {
    /// Last.fm username (prompted for when omitted)
    pub username: Option<String>,

    /// Number of your top artists to start from
    #[arg(short = 'l', long, value_name = "COUNT", value_parser = parse_count)]
    pub limit: Option<usize>,

    /// Related artists to fetch for each of your artists
    #[arg(short = 'd', long, value_name = "COUNT", value_parser = parse_count)]
    pub depth: Option<usize>,

    /// Listening period: overall, 7day, 1month, 3month, 6month or 12month
    #[arg(short = 'p', long, value_name = "PERIOD")]
    pub period: Option<TimeWindow>,

    /// Keep related artists that only one of your artists points at
    #[arg(long)]
    pub no_prune: bool,

    /// Only link from your artists to their related artists, not back
    #[arg(long)]
    pub forward_links: bool,

    /// Last.fm API key
    #[arg(long, env = "LASTFM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Minimum delay between related-artist requests
    #[arg(long, value_name = "MILLISECONDS", default_value = "250")]
    pub delay_ms: u64,

    /// Where to write the interactive map
    #[arg(short = 'o', long, value_name = "PATH", default_value = "artistmap.html")]
    pub output: PathBuf,

    /// Also write the graph as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Don't open the map in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show debug logs and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only print where the map was written
    #[arg(short, long)]
    pub quiet: bool,
}

pub const DEFAULT_LIMIT: usize = 20;
pub const DEFAULT_DEPTH: usize = 10;

fn parse_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(format!("'{value}' is not a whole number greater than zero")),
    }
}
