//! One-hop neighborhood of a graph element.

use crate::element::GraphElement;
use crate::graph::LsifGraph;
use serde::Serialize;

/// How a neighbor relates to the element it was queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// The `outV` end of a queried edge.
    Origin,
    /// An `inV`/`inVs` end of a queried edge.
    Target,
    /// An edge leaving the queried vertex.
    Outgoing,
    /// An edge arriving at the queried vertex.
    Incoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor<'g> {
    pub relation: Relation,
    pub element: &'g GraphElement,
}

impl LsifGraph {
    /// Directly related elements of `element`.
    ///
    /// For an edge: its origin, then its targets, each resolved through
    /// [`LsifGraph::resolve`]. For a vertex: its outgoing edges, then its
    /// incoming edges, each group in line order. Ids that resolve to nothing
    /// are skipped.
    pub fn neighbors<'g>(&'g self, element: &GraphElement) -> Vec<Neighbor<'g>> {
        if element.is_edge() {
            let origin = element
                .out_v
                .and_then(|id| self.resolve(id))
                .map(|element| Neighbor {
                    relation: Relation::Origin,
                    element,
                });
            let targets = element
                .targets()
                .iter()
                .filter_map(|&id| self.resolve(id))
                .map(|element| Neighbor {
                    relation: Relation::Target,
                    element,
                });

            origin.into_iter().chain(targets).collect()
        } else {
            let Some(id) = element.id else {
                return Vec::new();
            };
            let outgoing = self.outgoing_edges(id).map(|element| Neighbor {
                relation: Relation::Outgoing,
                element,
            });
            let incoming = self.incoming_edges(id).map(|element| Neighbor {
                relation: Relation::Incoming,
                element,
            });

            outgoing.chain(incoming).collect()
        }
    }

    /// Neighbors of the element `id` resolves to, or `None` if it resolves
    /// to nothing.
    pub fn neighbors_of_id(&self, id: i64) -> Option<Vec<Neighbor<'_>>> {
        self.resolve(id).map(|element| self.neighbors(element))
    }

    pub fn neighbors_at_line(&self, line_index: usize) -> Option<Vec<Neighbor<'_>>> {
        self.element(line_index).map(|element| self.neighbors(element))
    }

    pub fn neighbors_at_offset(&self, offset: usize) -> Option<Vec<Neighbor<'_>>> {
        self.element_at_offset(offset)
            .map(|element| self.neighbors(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_builder::GraphBuilder;

    const LINES: [&str; 7] = [
        r#"{"id":1,"type":"vertex","label":"document"}"#,
        r#"{"id":2,"type":"vertex","label":"range"}"#,
        r#"{"id":3,"type":"vertex","label":"resultSet"}"#,
        r#"{"id":4,"type":"edge","label":"contains","outV":1,"inVs":[2,99]}"#,
        r#"{"id":5,"type":"edge","label":"next","outV":2,"inV":3}"#,
        r#"{"type":"edge","label":"item","outV":3,"inVs":[2]}"#,
        r#"{"id":6,"type":"edge","label":"textDocument/hover","outV":4,"inV":3}"#,
    ];

    fn summary(neighbors: &[Neighbor<'_>]) -> Vec<(Relation, usize)> {
        neighbors
            .iter()
            .map(|n| (n.relation, n.element.line_number))
            .collect()
    }

    #[test]
    fn test_edge_neighbors_skip_unresolved_targets() {
        let graph = GraphBuilder::new().build(&LINES).unwrap();
        let edge = graph.edge(4).unwrap();

        assert_eq!(
            summary(&graph.neighbors(edge)),
            vec![(Relation::Origin, 0), (Relation::Target, 1)]
        );
    }

    #[test]
    fn test_edge_with_single_target() {
        let graph = GraphBuilder::new().build(&LINES).unwrap();
        let edge = graph.edge(5).unwrap();

        assert_eq!(
            summary(&graph.neighbors(edge)),
            vec![(Relation::Origin, 1), (Relation::Target, 2)]
        );
    }

    #[test]
    fn test_edge_origin_may_be_an_edge() {
        let graph = GraphBuilder::new().build(&LINES).unwrap();
        let hover = graph.edge(6).unwrap();
        let neighbors = graph.neighbors(hover);

        assert_eq!(neighbors[0].relation, Relation::Origin);
        assert!(neighbors[0].element.is_edge());
        assert_eq!(neighbors[0].element.id, Some(4));
    }

    #[test]
    fn test_vertex_neighbors_outgoing_before_incoming() {
        let graph = GraphBuilder::new().build(&LINES).unwrap();
        let range = graph.vertex(2).unwrap();

        assert_eq!(
            summary(&graph.neighbors(range)),
            vec![
                (Relation::Outgoing, 4),
                (Relation::Incoming, 3),
                (Relation::Incoming, 5),
            ]
        );
    }

    #[test]
    fn test_vertex_neighbors_include_id_less_edges() {
        let graph = GraphBuilder::new().build(&LINES).unwrap();
        let result_set = graph.vertex(3).unwrap();
        let neighbors = graph.neighbors(result_set);

        assert!(neighbors
            .iter()
            .any(|n| n.relation == Relation::Outgoing && n.element.id.is_none()));
        assert_eq!(neighbors.len(), 3);
    }

    #[test]
    fn test_isolated_and_unknown() {
        let graph = GraphBuilder::new()
            .build(&[r#"{"id":1,"type":"vertex","label":"metaData"}"#])
            .unwrap();

        assert_eq!(graph.neighbors_of_id(1), Some(Vec::new()));
        assert_eq!(graph.neighbors_of_id(2), None);
        assert_eq!(graph.neighbors_at_line(1), None);
    }

    #[test]
    fn test_id_less_vertex_has_no_neighbors() {
        let graph = GraphBuilder::new()
            .build(&[
                r#"{"type":"vertex","label":"metaData"}"#,
                r#"{"id":1,"type":"edge","label":"item","outV":0,"inV":0}"#,
            ])
            .unwrap();
        assert!(graph.neighbors_at_line(0).unwrap().is_empty());
    }

    #[test]
    fn test_neighbors_at_offset() {
        let graph = GraphBuilder::new().build(&LINES).unwrap();
        let offset = graph.lines().offset_for_line_index(4).unwrap() + 2;
        let neighbors = graph.neighbors_at_offset(offset).unwrap();

        assert_eq!(neighbors.len(), 2);
        assert_eq!(graph.neighbors_at_offset(usize::MAX), None);
    }
}
