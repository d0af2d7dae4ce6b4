//! JSON export of the finished map.

use std::path::Path;

use marga_map::{ExplorationReport, TrackGraph};
use serde::Serialize;

use crate::error::Result;

/// Document written to disk: run summary plus the full graph.
#[derive(Serialize)]
pub struct GraphExport<'a> {
    pub report: &'a ExplorationReport,
    pub graph: &'a TrackGraph,
}

/// Render the export document as pretty-printed JSON.
pub fn to_json(graph: &TrackGraph, report: &ExplorationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&GraphExport { report, graph })?)
}

/// Write the export document to `path`, creating parent directories.
pub fn save_graph(path: &Path, graph: &TrackGraph, report: &ExplorationReport) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_json(graph, report)?)?;
    tracing::info!(
        "Saved graph ({} nodes, {} segments) to {}",
        graph.node_count(),
        graph.segment_count(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marga_map::{Direction, ExplorationOutcome, GridCoord, Openings};

    fn sample() -> (TrackGraph, ExplorationReport) {
        let mut graph = TrackGraph::new();
        let a = graph
            .create_node(
                GridCoord::new(0, 0),
                Direction::East,
                Openings::new(true, false, true),
            )
            .unwrap();
        let b = graph
            .create_node(
                GridCoord::new(3, 0),
                Direction::East,
                Openings::new(false, false, true),
            )
            .unwrap();
        graph.link_nodes(a, b).unwrap();

        let report = ExplorationReport {
            outcome: ExplorationOutcome::LoopClosed,
            ticks: 7,
            node_count: graph.node_count(),
            segment_count: graph.segment_count(),
            resolved_segment_count: graph.resolved_segment_count(),
            routes_executed: 0,
            route_distance: 0,
            recovered_errors: 0,
        };
        (graph, report)
    }

    #[test]
    fn test_json_shape() {
        let (graph, report) = sample();
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&graph, &report).unwrap()).unwrap();

        assert_eq!(json["report"]["outcome"], "LoopClosed");
        assert_eq!(json["report"]["ticks"], 7);
        assert_eq!(json["graph"]["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(json["graph"]["nodes"][1]["location"]["x"], 3);

        let first = &json["graph"]["segments"][0];
        assert_eq!(first["direction"], "East");
        assert_eq!(first["distance"], 3);
        assert_eq!(first["target"], 1);
        assert!(json["graph"]["segments"][1]["target"].is_null());
    }

    #[test]
    fn test_save_creates_directories() {
        let (graph, report) = sample();
        let dir = std::env::temp_dir().join(format!("marga-export-{}", std::process::id()));
        let path = dir.join("nested").join("graph.json");

        save_graph(&path, &graph, &report).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"segments\""));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
