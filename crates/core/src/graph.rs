use crate::element::GraphElement;
use crate::lines::LineTable;
use std::collections::{BTreeSet, HashMap};

/// Index over one LSIF dump.
///
/// Elements live in an arena indexed by source line, so every table stores
/// line numbers. Vertex and edge ids share a numeric domain but are kept in
/// separate tables; a collision between the two is legal and preserved.
#[derive(Debug, Clone)]
pub struct LsifGraph {
    pub(crate) lines: LineTable,
    pub(crate) elements: Vec<GraphElement>,
    pub(crate) vertices_by_id: HashMap<i64, usize>,
    pub(crate) edges_by_id: HashMap<i64, usize>,
    pub(crate) edges_by_out_vertex_id: HashMap<i64, BTreeSet<usize>>,
    pub(crate) edges_by_in_vertex_id: HashMap<i64, BTreeSet<usize>>,
}

impl LsifGraph {
    /// The rendered (indented) document.
    pub fn lines(&self) -> &LineTable {
        &self.lines
    }

    pub fn line_strings(&self) -> impl Iterator<Item = &str> {
        self.lines.lines().iter().map(|line| line.text())
    }

    pub fn render(&self) -> String {
        self.lines.render()
    }

    /// Every decoded element, in line order.
    pub fn elements(&self) -> &[GraphElement] {
        &self.elements
    }

    /// Element decoded from `line_index`.
    pub fn element(&self, line_index: usize) -> Option<&GraphElement> {
        self.elements.get(line_index)
    }

    /// Element whose line contains the character `offset`.
    pub fn element_at_offset(&self, offset: usize) -> Option<&GraphElement> {
        self.element(self.lines.line_index_for_offset(offset)?)
    }

    pub fn vertex(&self, id: i64) -> Option<&GraphElement> {
        self.vertices_by_id.get(&id).map(|&line| &self.elements[line])
    }

    pub fn edge(&self, id: i64) -> Option<&GraphElement> {
        self.edges_by_id.get(&id).map(|&line| &self.elements[line])
    }

    /// Looks `id` up as a vertex first, then as an edge.
    pub fn resolve(&self, id: i64) -> Option<&GraphElement> {
        self.vertex(id).or_else(|| self.edge(id))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices_by_id.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges_by_id.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &GraphElement> {
        self.vertices_by_id.values().map(|&line| &self.elements[line])
    }

    pub fn edges(&self) -> impl Iterator<Item = &GraphElement> {
        self.edges_by_id.values().map(|&line| &self.elements[line])
    }

    /// Edges whose `outV` is `vertex_id`, in line order.
    pub fn outgoing_edges(&self, vertex_id: i64) -> impl Iterator<Item = &GraphElement> {
        self.adjacent(&self.edges_by_out_vertex_id, vertex_id)
    }

    /// Edges whose `inV` is, or whose `inVs` contains, `vertex_id`.
    pub fn incoming_edges(&self, vertex_id: i64) -> impl Iterator<Item = &GraphElement> {
        self.adjacent(&self.edges_by_in_vertex_id, vertex_id)
    }

    fn adjacent<'g>(
        &'g self,
        table: &'g HashMap<i64, BTreeSet<usize>>,
        vertex_id: i64,
    ) -> impl Iterator<Item = &'g GraphElement> {
        table
            .get(&vertex_id)
            .into_iter()
            .flatten()
            .map(|&line| &self.elements[line])
    }
}
