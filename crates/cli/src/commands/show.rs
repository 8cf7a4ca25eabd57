use super::utils::load_graph;
use anyhow::Result;
use lsif_inspector_core::{BuildOptions, LsifGraph};
use std::io::Write;
use std::path::Path;

pub fn handle_show<W: Write>(
    path: &Path,
    options: &BuildOptions,
    numbered: bool,
    out: &mut W,
) -> Result<()> {
    let graph = load_graph(path, options)?;
    write_document(out, &graph, numbered)
}

pub fn write_document<W: Write>(out: &mut W, graph: &LsifGraph, numbered: bool) -> Result<()> {
    if !numbered {
        out.write_all(graph.render().as_bytes())?;
        return Ok(());
    }

    let terminator = graph.lines().terminator().as_str();
    for (index, line) in graph.line_strings().enumerate() {
        write!(out, "{index:>6}  {line}{terminator}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsif_inspector_core::{GraphBuilder, LineTerminator};

    fn graph() -> LsifGraph {
        GraphBuilder::new()
            .terminator(LineTerminator::Lf)
            .build(&[
                r#"{"id":1,"type":"vertex","label":"$event","kind":"begin","scope":"document","data":2}"#,
                r#"{"id":2,"type":"vertex","label":"document"}"#,
                r#"{"id":3,"type":"vertex","label":"$event","kind":"end","scope":"document","data":2}"#,
            ])
            .unwrap()
    }

    #[test]
    fn test_write_document_indents_events() {
        let mut out = Vec::new();
        write_document(&mut out, &graph(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], r#"    {"id":2,"type":"vertex","label":"document"}"#);
        assert!(lines[2].starts_with('{'));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_write_document_numbered() {
        let mut out = Vec::new();
        write_document(&mut out, &graph(), true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("     0      {"));
        assert!(text.contains("     2  {\"id\":3"));
    }
}
