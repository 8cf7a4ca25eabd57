use super::utils::load_graph;
use anyhow::Result;
use lsif_inspector_core::{BuildOptions, LineTable, Match};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

pub fn handle_find<W: Write>(
    path: &Path,
    options: &BuildOptions,
    text: &str,
    all: bool,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let graph = load_graph(path, options)?;
    let table = graph.lines();

    let matches = if all {
        find_all(table, text)
    } else {
        table.find(text, 0).into_iter().collect()
    };

    if json {
        let hits: Vec<Hit<'_>> = matches
            .iter()
            .map(|found| Hit {
                found,
                text: table.line_text(found.line).unwrap_or_default(),
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&hits)?)?;
        return Ok(());
    }

    if matches.is_empty() {
        writeln!(out, "No match for {text:?}")?;
        return Ok(());
    }

    for found in matches {
        let line = table.line_text(found.line).unwrap_or_default();
        writeln!(out, "{}:{}: {}", found.line, found.offset, line.trim_start())?;
    }
    Ok(())
}

/// A match with the text of its line, for `--json`.
#[derive(Serialize)]
struct Hit<'a> {
    #[serde(flatten)]
    found: &'a Match,
    text: &'a str,
}

/// Every non-overlapping match, in document order.
pub fn find_all(table: &LineTable, text: &str) -> Vec<Match> {
    let step = text.chars().count().max(1);
    let mut matches = Vec::new();
    let mut from = 0;

    while let Some(found) = table.find(text, from) {
        from = found.offset + step;
        matches.push(found);
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsif_inspector_core::LineTerminator;

    #[test]
    fn test_find_all() {
        let table = LineTable::new(
            vec!["aaa range".to_string(), "range range".to_string()],
            LineTerminator::Lf,
        );

        let offsets: Vec<usize> = find_all(&table, "range").iter().map(|m| m.offset).collect();
        assert_eq!(offsets, vec![4, 10, 16]);

        // non-overlapping
        assert_eq!(find_all(&table, "aa").len(), 1);
        assert!(find_all(&table, "").is_empty());
    }

    #[test]
    fn test_match_serializes_with_line_text() {
        let table = LineTable::new(vec!["  {\"label\":\"range\"}".to_string()], LineTerminator::Lf);
        let found = table.find("range", 0).unwrap();
        let hit = Hit {
            found: &found,
            text: table.line_text(found.line).unwrap(),
        };

        let value = serde_json::to_value(&hit).unwrap();
        assert_eq!(value["offset"], 12);
        assert_eq!(value["line"], 0);
        assert_eq!(value["text"], "  {\"label\":\"range\"}");
    }
}
