use artistmap_core::{ArtistGraph, GraphNode, LinkPolicy, MapConfig, TraversalStats};
use std::path::Path;

use crate::app::MapResult;
use crate::colors::ColorScheme;
use crate::utils::format_number;

const TOP_RELATED_SHOWN: usize = 5;

pub fn display_map_info(config: &MapConfig, colors: &ColorScheme) {
    println!(
        "🎵 Building artist map for {}",
        colors.artist_name(&format!("\"{}\"", config.listener))
    );
    println!(
        "🗓️  Period: {}, top {} listened artists, {} related each",
        colors.number(config.window.as_str()),
        colors.number(&config.sample_size.to_string()),
        colors.number(&config.depth.to_string())
    );

    if !config.prune {
        println!("🌿 Pruning disabled, keeping every related artist");
    }

    if config.link_policy == LinkPolicy::Forward {
        println!("➡️  Linking only from your artists to their related artists");
    }

    println!("🔍 Fetching...");
}

pub fn display_map_results(
    result: &MapResult,
    html_path: &Path,
    colors: &ColorScheme,
    verbose: bool,
    quiet: bool,
) {
    if quiet {
        println!("{}", colors.path(&html_path.display().to_string()));
        return;
    }

    if verbose {
        println!("\n---\n");
    }

    let graph = &result.graph;
    println!(
        "{} Mapped {} artists ({} listened, {} related) with {} connections",
        colors.success("✅"),
        colors.number(&format_number(graph.nodes.len())),
        colors.listened(&format_number(graph.listened_count())),
        colors.related(&format_number(graph.related_count())),
        colors.number(&format_number(graph.edges.len()))
    );

    let most_related = most_related_artists(graph, TOP_RELATED_SHOWN);
    if !most_related.is_empty() {
        println!("\nMost related artists you don't listen to yet:");
        for (rank, node) in most_related.iter().enumerate() {
            println!(
                "{:2} {} - related to {} of your artists",
                format!("{}.", rank + 1),
                colors.artist_name(&format!("\"{}\"", node.name)),
                colors.number(&node.relatedness_count.to_string())
            );
        }
    }

    println!(
        "\n🗺️  Map written to {}",
        colors.path(&html_path.display().to_string())
    );

    if verbose {
        display_traversal_statistics(&result.stats, colors);
    }
}

/// Related-only artists ranked by how often they came up, then by name.
pub fn most_related_artists(graph: &ArtistGraph, count: usize) -> Vec<&GraphNode> {
    let mut related: Vec<&GraphNode> = graph.nodes.iter().filter(|node| !node.listened).collect();
    related.sort_by(|a, b| {
        b.relatedness_count
            .cmp(&a.relatedness_count)
            .then_with(|| a.name.cmp(&b.name))
    });
    related.truncate(count);
    related
}

fn display_traversal_statistics(stats: &TraversalStats, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Queried {} of {} listened artists in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(stats.seeds_queried)),
        colors.number(&format_number(stats.listened_artists)),
        colors.number(&format!("{:.3}", stats.duration_ms as f64 / 1000.0))
    );

    if stats.seeds_skipped > 0 {
        println!(
            "{} {} listened artists had no MBID and were not expanded",
            colors.stats("ℹ️ "),
            colors.number(&format_number(stats.seeds_skipped))
        );
    }

    if stats.related_failures > 0 {
        println!(
            "{} {} related-artist requests failed",
            colors.error("⚠️ "),
            colors.number(&format_number(stats.related_failures))
        );
    }

    println!(
        "{} Pruned {} related artists",
        colors.stats("✂️ "),
        colors.number(&format_number(stats.pruned))
    );
}
