use super::utils::{load_graph, select, write_neighborhood, Target};
use anyhow::Result;
use lsif_inspector_core::BuildOptions;
use serde_json::json;
use std::io::Write;
use std::path::Path;

pub fn handle_neighbors<W: Write>(
    path: &Path,
    options: &BuildOptions,
    target: Target,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let graph = load_graph(path, options)?;
    let element = select(&graph, target)?;
    let neighbors = graph.neighbors(element);

    if json {
        let value = json!({
            "element": element,
            "neighbors": neighbors,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        write_neighborhood(out, &graph, element, &neighbors)?;
    }
    Ok(())
}
