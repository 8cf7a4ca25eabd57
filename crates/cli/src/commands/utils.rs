use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use lsif_inspector_core::{BuildOptions, GraphBuilder, GraphElement, LsifGraph, Neighbor, Relation};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Element to start a neighborhood query from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Id(i64),
    Line(usize),
    Offset(usize),
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads `path` and builds its graph.
pub fn load_graph(path: &Path, options: &BuildOptions) -> Result<LsifGraph> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let lines = dump_lines(&content);

    let graph = GraphBuilder::with_options(*options)
        .build(&lines)
        .with_context(|| format!("Failed to index {}", path.display()))?;

    info!(
        path = %path.display(),
        lines = lines.len(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded LSIF dump"
    );
    Ok(graph)
}

/// Splits a dump into records, dropping a leading byte order mark.
pub fn dump_lines(content: &str) -> Vec<&str> {
    content
        .strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(content)
        .lines()
        .collect()
}

/// Looks up the element `target` points at.
pub fn select<'g>(graph: &'g LsifGraph, target: Target) -> Result<&'g GraphElement> {
    match target {
        Target::Id(id) => graph
            .resolve(id)
            .with_context(|| format!("No vertex or edge with id {id}")),
        Target::Line(line) => graph.element(line).with_context(|| {
            format!("Line {line} is out of range ({} lines)", graph.lines().len())
        }),
        Target::Offset(offset) => graph
            .element_at_offset(offset)
            .with_context(|| format!("Offset {offset} is not inside any line")),
    }
}

/// Vertices in blue, edges in green.
pub fn paint(element: &GraphElement, text: &str) -> ColoredString {
    if element.is_edge() {
        text.green()
    } else {
        text.blue()
    }
}

pub fn describe(element: &GraphElement) -> String {
    let kind = if element.is_edge() { "edge" } else { "vertex" };
    match element.id {
        Some(id) => format!("{kind} {id} ({})", element.label),
        None => format!("{kind} without id ({})", element.label),
    }
}

fn relation_tag(relation: Relation) -> &'static str {
    match relation {
        Relation::Origin => "origin",
        Relation::Target => "target",
        Relation::Outgoing => "out",
        Relation::Incoming => "in",
    }
}

/// Prints `element`'s own line followed by each neighbor's line.
pub fn write_neighborhood<W: Write>(
    out: &mut W,
    graph: &LsifGraph,
    element: &GraphElement,
    neighbors: &[Neighbor<'_>],
) -> Result<()> {
    let line = element.line_number;
    let text = graph.lines().line_text(line).unwrap_or_default();

    writeln!(out, "📍 {} at line {}", describe(element), line)?;
    writeln!(out, "{}", paint(element, text))?;

    if neighbors.is_empty() {
        writeln!(out, "This item has no immediate neighbors")?;
        return Ok(());
    }

    writeln!(out)?;
    for neighbor in neighbors {
        let line = neighbor.element.line_number;
        let text = graph.lines().line_text(line).unwrap_or_default();
        writeln!(
            out,
            "  [{:>6}] {:>6}: {}",
            relation_tag(neighbor.relation),
            line,
            paint(neighbor.element, text.trim_start())
        )?;
    }
    Ok(())
}

/// Print error message with emoji
pub fn print_error<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "❌ {message}")?;
    Ok(())
}
