use artistmap_core::{ArtistGraph, MapConfig, TraversalStats};
use serde::Serialize;
use std::{fs, io, path::Path};
use thiserror::Error;
use tracing::{info, warn};

pub const LISTENED_COLOR: &str = "rgb(240,0,0)";
pub const RELATED_COLOR: &str = "rgb(0,240,0)";
pub const EDGE_COLOR: &str = "rgb(25,25,25)";
pub const BACKGROUND_COLOR: &str = "#efecea";

const FORCE_GRAPH_SCRIPT: &str = "https://unpkg.com/force-graph@1";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not serialize graph: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Serialize)]
struct ForceGraphData<'a> {
    nodes: Vec<ForceNode<'a>>,
    links: Vec<ForceLink<'a>>,
}

#[derive(Serialize)]
struct ForceNode<'a> {
    id: &'a str,
    listened: bool,
    color: &'static str,
    /// Marker size: how often the artist came up as related
    weight: u32,
}

#[derive(Serialize)]
struct ForceLink<'a> {
    source: &'a str,
    target: &'a str,
    weight: u32,
}

fn force_graph_data(graph: &ArtistGraph) -> ForceGraphData<'_> {
    let nodes = graph
        .nodes
        .iter()
        .map(|node| ForceNode {
            id: &node.name,
            listened: node.listened,
            color: if node.listened { LISTENED_COLOR } else { RELATED_COLOR },
            weight: node.relatedness_count,
        })
        .collect();

    let links = graph
        .edges
        .iter()
        .map(|edge| ForceLink {
            source: &edge.source,
            target: &edge.target,
            weight: edge.weight,
        })
        .collect();

    ForceGraphData { nodes, links }
}

/// Standalone page that lays the graph out with a force simulation in the browser.
pub fn render_html(graph: &ArtistGraph, title: &str) -> Result<String, RenderError> {
    let data = serde_json::to_string(&force_graph_data(graph))?;

    Ok(PAGE_TEMPLATE
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{SCRIPT}}", FORCE_GRAPH_SCRIPT)
        .replace("{{BACKGROUND}}", BACKGROUND_COLOR)
        .replace("{{EDGE_COLOR}}", EDGE_COLOR)
        .replace("{{LISTENED_COLOR}}", LISTENED_COLOR)
        .replace("{{RELATED_COLOR}}", RELATED_COLOR)
        .replace("{{DATA}}", &escape_script(&data)))
}

pub fn write_output(path: &Path, contents: &str) -> Result<(), RenderError> {
    fs::write(path, contents).map_err(|source| RenderError::Write {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

pub fn open_in_browser(path: &Path) {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if let Err(error) = webbrowser::open(&target.to_string_lossy()) {
        warn!(path = %target.display(), %error, "could not open browser");
    }
}

#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub query: JsonQuery<'a>,
    pub graph: &'a ArtistGraph,
    pub stats: JsonStats,
}

#[derive(Serialize)]
pub struct JsonQuery<'a> {
    pub listener: &'a str,
    pub period: &'static str,
    pub limit: usize,
    pub depth: usize,
    pub prune: bool,
}

#[derive(Serialize)]
pub struct JsonStats {
    pub nodes: usize,
    pub edges: usize,
    pub listened: usize,
    pub related: usize,
    pub pruned: usize,
    pub related_failures: usize,
    pub build_time_ms: u64,
}

pub fn create_json_output<'a>(
    graph: &'a ArtistGraph,
    config: &'a MapConfig,
    stats: &TraversalStats,
) -> JsonOutput<'a> {
    JsonOutput {
        query: JsonQuery {
            listener: &config.listener,
            period: config.window.as_str(),
            limit: config.sample_size,
            depth: config.depth,
            prune: config.prune,
        },
        graph,
        stats: JsonStats {
            nodes: graph.nodes.len(),
            edges: graph.edges.len(),
            listened: graph.listened_count(),
            related: graph.related_count(),
            pruned: stats.pruned,
            related_failures: stats.related_failures,
            build_time_ms: stats.duration_ms,
        },
    }
}

pub fn graph_to_json(output: &JsonOutput) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(output)?)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Keeps artist names from closing the surrounding <script> element.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
<script src="{{SCRIPT}}"></script>
<style>
  html, body { margin: 0; height: 100%; background: {{BACKGROUND}}; font-family: sans-serif; }
  #graph { width: 100%; height: 100%; }
  #legend { position: absolute; top: 12px; left: 12px; padding: 8px 12px; background: rgba(255,255,255,0.8); border-radius: 4px; }
  #legend h1 { margin: 0 0 6px; font-size: 16px; }
  .swatch { display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 4px; }
</style>
</head>
<body>
<div id="legend">
  <h1>{{TITLE}}</h1>
  <div><span class="swatch" style="background: {{LISTENED_COLOR}}"></span>listened</div>
  <div><span class="swatch" style="background: {{RELATED_COLOR}}"></span>related</div>
</div>
<div id="graph"></div>
<script>
  const data = {{DATA}};
  ForceGraph()(document.getElementById('graph'))
    .graphData(data)
    .backgroundColor('{{BACKGROUND}}')
    .nodeId('id')
    .nodeLabel('id')
    .nodeColor('color')
    .nodeVal(node => node.weight)
    .linkColor(() => '{{EDGE_COLOR}}')
    .linkWidth(link => Math.min(link.weight, 4) * 0.5);
</script>
</body>
</html>
"#;
