use crate::element::{ElementKind, GraphElement};
use crate::error::{InspectorError, Result};
use crate::graph::LsifGraph;
use crate::indent::{indent_lines, EventNesting, IndentOptions};
use crate::lines::{LineTable, LineTerminator};
use rayon::prelude::*;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub indent: IndentOptions,
    pub terminator: LineTerminator,
    /// Decode lines on the rayon pool; tables are still filled in line order.
    pub parallel_decode: bool,
}

/// Builds an [`LsifGraph`] from the raw lines of a dump.
///
/// A build either returns a complete graph or fails without exposing any
/// partial state.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    options: BuildOptions,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn indent_step(mut self, step: usize) -> Self {
        self.options.indent.step = step;
        self
    }

    pub fn event_nesting(mut self, nesting: EventNesting) -> Self {
        self.options.indent.nesting = nesting;
        self
    }

    pub fn terminator(mut self, terminator: LineTerminator) -> Self {
        self.options.terminator = terminator;
        self
    }

    pub fn parallel_decode(mut self, parallel: bool) -> Self {
        self.options.parallel_decode = parallel;
        self
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Indents, decodes and indexes `lines`.
    pub fn build<S: AsRef<str>>(&self, lines: &[S]) -> Result<LsifGraph> {
        let indented = indent_lines(lines, &self.options.indent)?;
        let mut tables = Tables::with_capacity(indented.len());

        if self.options.parallel_decode {
            let decoded: Vec<Result<GraphElement>> = indented
                .par_iter()
                .enumerate()
                .map(|(line, text)| GraphElement::decode(text, line))
                .collect();
            for element in decoded {
                tables.insert(element?)?;
            }
        } else {
            for (line, text) in indented.iter().enumerate() {
                tables.insert(GraphElement::decode(text, line)?)?;
            }
        }

        let graph = tables.finish(LineTable::new(indented, self.options.terminator));
        debug!(
            lines = graph.elements.len(),
            vertices = graph.vertices_by_id.len(),
            edges = graph.edges_by_id.len(),
            "built LSIF graph"
        );
        Ok(graph)
    }
}

impl LsifGraph {
    /// Builds a graph with default [`BuildOptions`].
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        GraphBuilder::new().build(lines)
    }
}

#[derive(Default)]
struct Tables {
    elements: Vec<GraphElement>,
    vertices_by_id: HashMap<i64, usize>,
    edges_by_id: HashMap<i64, usize>,
    edges_by_out_vertex_id: HashMap<i64, BTreeSet<usize>>,
    edges_by_in_vertex_id: HashMap<i64, BTreeSet<usize>>,
}

impl Tables {
    fn with_capacity(lines: usize) -> Self {
        Self {
            elements: Vec::with_capacity(lines),
            ..Self::default()
        }
    }

    fn insert(&mut self, element: GraphElement) -> Result<()> {
        let line = self.elements.len();
        debug_assert_eq!(element.line_number, line);

        match element.kind {
            ElementKind::Vertex => {
                if let Some(id) = element.id {
                    match self.vertices_by_id.entry(id) {
                        Entry::Occupied(first) => {
                            return Err(InspectorError::DuplicateVertexId {
                                id,
                                first_line: *first.get(),
                                line,
                            });
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(line);
                        }
                    }
                }
            }
            ElementKind::Edge => {
                if let Some(id) = element.id {
                    match self.edges_by_id.entry(id) {
                        Entry::Occupied(first) => {
                            return Err(InspectorError::DuplicateEdgeId {
                                id,
                                first_line: *first.get(),
                                line,
                            });
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(line);
                        }
                    }
                }

                match element.out_v {
                    Some(out_v) => {
                        self.edges_by_out_vertex_id
                            .entry(out_v)
                            .or_default()
                            .insert(line);
                        for &in_v in element.targets() {
                            self.edges_by_in_vertex_id.entry(in_v).or_default().insert(line);
                        }
                    }
                    None => debug!(line, label = %element.label, "edge without outV has no adjacency"),
                }
            }
        }

        trace!(line, label = %element.label, "indexed element");
        self.elements.push(element);
        Ok(())
    }

    fn finish(self, lines: LineTable) -> LsifGraph {
        LsifGraph {
            lines,
            elements: self.elements,
            vertices_by_id: self.vertices_by_id,
            edges_by_id: self.edges_by_id,
            edges_by_out_vertex_id: self.edges_by_out_vertex_id,
            edges_by_in_vertex_id: self.edges_by_in_vertex_id,
        }
    }
}
