use crate::element::GraphElement;
use crate::graph::LsifGraph;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
    /// Share of all lines in the dump.
    pub percentage: f64,
}

/// Vertex and edge counts per label, over the id tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub total_lines: usize,
    pub vertices: Vec<LabelCount>,
    pub edges: Vec<LabelCount>,
}

impl LsifGraph {
    pub fn stats(&self) -> GraphStats {
        let total_lines = self.elements.len();
        GraphStats {
            total_lines,
            vertices: count_by_label(self.vertices(), total_lines),
            edges: count_by_label(self.edges(), total_lines),
        }
    }
}

fn count_by_label<'a>(
    elements: impl Iterator<Item = &'a GraphElement>,
    total_lines: usize,
) -> Vec<LabelCount> {
    let mut by_label: HashMap<&str, usize> = HashMap::new();
    for element in elements {
        *by_label.entry(element.label.as_str()).or_default() += 1;
    }

    let mut counts: Vec<LabelCount> = by_label
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
            percentage: percentage(count, total_lines),
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    counts
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}
