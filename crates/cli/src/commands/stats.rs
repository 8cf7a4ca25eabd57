use super::utils::load_graph;
use anyhow::Result;
use lsif_inspector_core::{BuildOptions, GraphStats, LabelCount};
use std::io::Write;
use std::path::Path;

pub fn handle_stats<W: Write>(
    path: &Path,
    options: &BuildOptions,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let stats = load_graph(path, options)?.stats();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
    } else {
        write_stats(out, &stats)?;
    }
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, stats: &GraphStats) -> Result<()> {
    writeln!(out, "📊 Graph statistics:")?;
    writeln!(out, "  Total lines: {}", stats.total_lines)?;

    write_group(out, "🔵 Vertices by label:", &stats.vertices)?;
    write_group(out, "🟢 Edges by label:", &stats.edges)?;
    Ok(())
}

fn write_group<W: Write>(out: &mut W, title: &str, counts: &[LabelCount]) -> Result<()> {
    writeln!(out, "\n{title}")?;
    if counts.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for count in counts {
        writeln!(
            out,
            "  {}: {} ({:.2}%)",
            count.label, count.count, count.percentage
        )?;
    }
    Ok(())
}
