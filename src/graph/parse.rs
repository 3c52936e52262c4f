//! Graphviz-style edge-list ingestion.
//!
//! Accepts the subset of the DOT language the solver cares about: one edge
//! per line, `->` for directed and `--` for bidirectional edges, and an
//! optional `[weight=...]`, `[label=...]`, or `[w=...]` attribute (a bare
//! number inside the brackets also counts). Everything else — `digraph`
//! headers, braces, standalone vertex declarations, `#` comments — is
//! skipped. Missing weights default to `1.0`.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::error::ColonyResult;

use super::Graph;

/// One edge line before index assignment.
struct RawEdge {
    from: String,
    to: String,
    weight: f64,
    bidirectional: bool,
}

impl Graph {
    /// Build a graph from a Graphviz-like file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_dot_file<P: AsRef<Path>>(path: P) -> ColonyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_dot_str(&content))
    }

    /// Build a graph from Graphviz-like text.
    ///
    /// Lines that do not describe an edge are ignored, so malformed input
    /// degrades to a smaller (possibly empty) graph rather than an error.
    /// Labels are collected from the edges and sorted before indices are
    /// assigned, making the indexing deterministic.
    #[must_use]
    pub fn from_dot_str(input: &str) -> Self {
        let mut edges = Vec::new();
        let mut seen: BTreeSet<String> = BTreeSet::new();
        for line in input.lines() {
            if let Some(edge) = parse_edge_line(line) {
                seen.insert(edge.from.clone());
                seen.insert(edge.to.clone());
                edges.push(edge);
            }
        }
        if seen.is_empty() {
            return Self::default();
        }

        let labels: Vec<String> = seen.into_iter().collect();
        let index_by_label: HashMap<String, usize> = labels
            .iter()
            .enumerate()
            .map(|(index, label)| (label.clone(), index))
            .collect();
        let n = labels.len();
        let mut adjacency = vec![vec![Self::NO_EDGE; n]; n];
        for i in 0..n {
            adjacency[i][i] = 0.0;
        }
        for edge in &edges {
            let (Some(&from), Some(&to)) =
                (index_by_label.get(&edge.from), index_by_label.get(&edge.to))
            else {
                continue;
            };
            adjacency[from][to] = edge.weight;
            if edge.bidirectional {
                adjacency[to][from] = edge.weight;
            }
        }

        Self {
            labels,
            index_by_label,
            adjacency,
        }
    }
}

/// Parse one line into an edge, or `None` for non-edge lines.
fn parse_edge_line(line: &str) -> Option<RawEdge> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (operator_pos, bidirectional) = match trimmed.find("->") {
        Some(pos) => (pos, false),
        None => (trimmed.find("--")?, true),
    };
    let from_token = trimmed[..operator_pos].trim();
    let rest = &trimmed[operator_pos + 2..];

    let (to_part, attributes) = match rest.find('[') {
        Some(bracket) => (&rest[..bracket], &rest[bracket..]),
        None => (rest, ""),
    };
    let to_token = match to_part.find(';') {
        Some(semicolon) => &to_part[..semicolon],
        None => to_part,
    }
    .trim();

    if from_token.is_empty() || to_token.is_empty() {
        return None;
    }

    let weight = attribute_weight(attributes).unwrap_or(1.0);
    Some(RawEdge {
        from: strip_quotes(from_token).to_string(),
        to: strip_quotes(to_token).to_string(),
        weight,
        bidirectional,
    })
}

/// Remove one matching layer of single or double quotes.
fn strip_quotes(token: &str) -> &str {
    let bytes = token.as_bytes();
    if bytes.len() >= 2
        && ((bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[bytes.len() - 1] == b'\''))
    {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

/// Extract a weight from an attribute string such as `[weight=2.5]`.
///
/// Tries `weight`, `label`, and `w` keys first; falls back to the first
/// bare numeric literal anywhere in the attributes.
fn attribute_weight(attributes: &str) -> Option<f64> {
    const KEYS: [&str; 3] = ["weight", "label", "w"];
    for (pos, _) in attributes.char_indices() {
        let rest = &attributes[pos..];
        for key in KEYS {
            if let Some(after_key) = rest.strip_prefix(key) {
                if let Some(number_text) = after_key.trim_start().strip_prefix('=') {
                    if let Some(value) = lex_number(number_text.trim_start()) {
                        return Some(value);
                    }
                }
            }
        }
    }
    for (pos, _) in attributes.char_indices() {
        if let Some(value) = lex_number(&attributes[pos..]) {
            return Some(value);
        }
    }
    None
}

/// Lex the floating-point literal at the start of `text`.
///
/// Accepts an optional sign, integer and/or fractional digits, and an
/// optional exponent; stops at the first character that cannot extend the
/// literal.
fn lex_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let integer_start = end;
    while matches!(bytes.get(end), Some(c) if c.is_ascii_digit()) {
        end += 1;
    }
    let integer_digits = end - integer_start;
    let mut fraction_digits = 0;
    if matches!(bytes.get(end), Some(b'.')) {
        let mut after_dot = end + 1;
        while matches!(bytes.get(after_dot), Some(c) if c.is_ascii_digit()) {
            after_dot += 1;
        }
        fraction_digits = after_dot - end - 1;
        if fraction_digits > 0 {
            end = after_dot;
        }
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut after_exp = end + 1;
        if matches!(bytes.get(after_exp), Some(b'+' | b'-')) {
            after_exp += 1;
        }
        let exponent_start = after_exp;
        while matches!(bytes.get(after_exp), Some(c) if c.is_ascii_digit()) {
            after_exp += 1;
        }
        if after_exp > exponent_start {
            end = after_exp;
        }
    }
    text[..end].parse().ok()
}
