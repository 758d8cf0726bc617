use artistmap_core::{
    ArtistGraph, ArtistSource, LinkPolicy, MapConfig, MapError, SourceError, TimeWindow,
    TraversalProgress, TraversalStats, build_artist_map, build_graph,
};
use std::{
    io::{BufRead, Write},
    path::PathBuf,
    time::Duration,
};
use thiserror::Error;

use crate::args::{Args, DEFAULT_DEPTH, DEFAULT_LIMIT};
use crate::prompt::{PromptError, Prompter};
use crate::render::{
    RenderError, create_json_output, graph_to_json, render_html, write_output,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no Last.fm API key; pass --api-key or set LASTFM_API_KEY")]
    MissingApiKey,

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub struct OutputOptions {
    pub html_path: PathBuf,
    pub json_path: Option<PathBuf>,
}

pub struct MapResult {
    pub graph: ArtistGraph,
    pub stats: TraversalStats,
    pub pruned: Vec<String>,
}

pub struct ArtistMapApp<S> {
    source: S,
    config: MapConfig,
}

impl<S: ArtistSource> ArtistMapApp<S> {
    pub fn new(source: S, config: MapConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn build_map<P: TraversalProgress>(&self, progress: &P) -> Result<MapResult, MapError> {
        let outcome = build_artist_map(&self.source, &self.config, progress)?;
        let graph = build_graph(&outcome.snapshot, self.config.prune);

        Ok(MapResult {
            graph,
            stats: outcome.stats,
            pruned: outcome.pruned,
        })
    }

    pub fn write_outputs(&self, result: &MapResult, options: &OutputOptions) -> Result<(), RenderError> {
        let title = format!("{}'s artist map", self.config.listener);
        let html = render_html(&result.graph, &title)?;
        write_output(&options.html_path, &html)?;

        if let Some(json_path) = &options.json_path {
            let json_output = create_json_output(&result.graph, &self.config, &result.stats);
            write_output(json_path, &graph_to_json(&json_output)?)?;
        }

        Ok(())
    }
}

impl OutputOptions {
    pub fn from_args(args: &Args) -> Self {
        Self {
            html_path: args.output.clone(),
            json_path: args.json.clone(),
        }
    }
}

pub fn require_api_key(args: &Args) -> Result<String, AppError> {
    args.api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .ok_or(AppError::MissingApiKey)
}

/// Fills in settings missing from the command line. Without a username every
/// missing value is prompted for; with one, defaults are used instead.
pub fn resolve_config<R: BufRead, W: Write>(
    args: &Args,
    prompter: &mut Prompter<R, W>,
) -> Result<MapConfig, PromptError> {
    let interactive = args.username.is_none();

    let listener = match &args.username {
        Some(username) => username.clone(),
        None => prompter.username()?,
    };

    let depth = match args.depth {
        Some(depth) => depth,
        None if interactive => prompter.count("How many related artists do you want to search? ")?,
        None => DEFAULT_DEPTH,
    };

    let sample_size = match args.limit {
        Some(limit) => limit,
        None if interactive => {
            prompter.count("How many of your listened artists do you want to search through? ")?
        }
        None => DEFAULT_LIMIT,
    };

    let window = match args.period {
        Some(window) => window,
        None if interactive => prompter.time_window()?,
        None => TimeWindow::default(),
    };

    Ok(MapConfig {
        listener,
        sample_size,
        depth,
        window,
        prune: !args.no_prune,
        link_policy: if args.forward_links {
            LinkPolicy::Forward
        } else {
            LinkPolicy::Bidirectional
        },
        request_delay: Duration::from_millis(args.delay_ms),
    })
}
