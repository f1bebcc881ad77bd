//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// Kind of graph node; each kind gets its own identifier tag so a queue and
/// an exchange sharing a name never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Queue,
    Exchange,
    Producer,
    Consumer,
}

impl NodeKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Queue => "Q",
            Self::Exchange => "X",
            Self::Producer => "P",
            Self::Consumer => "C",
        }
    }

    /// Node identifier for the entity called `name`.
    pub fn id(self, name: &str) -> String {
        format!("{}_{}", self.tag(), escape_id(name))
    }
}

/// Strip characters DOT does not accept in bare identifiers.
///
/// Hyphens and periods are deleted, nothing else is touched. Names that only
/// differ by those characters map to the same identifier.
pub fn escape_id(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, '-' | '.')).collect()
}

/// Escape special characters for DOT labels.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Start an anonymous digraph.
    pub fn new() -> Self {
        let mut output = String::with_capacity(4096);
        output.push_str("digraph {\n");
        Self { output, indent: 1 }
    }

    /// Add a bare `key=value;` attribute to the current graph or cluster.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{key}={value};");
        self
    }

    /// Add a node style default.
    pub fn node_style(&mut self, attrs: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "node [{attrs}];");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with full attributes.
    pub fn node_full(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "\"{id}\" [");
        self.write_attrs(attrs);
        self.output.push_str("];\n");
        self
    }

    /// Add an edge between quoted node ids.
    pub fn edge(&mut self, from: &str, to: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "\"{from}\" -> \"{to}\";");
        self
    }

    /// Add an edge between bare node ids with attributes.
    pub fn edge_with_attrs(&mut self, from: &str, to: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{from} -> {to} [");
        self.write_attrs(attrs);
        self.output.push_str("];\n");
        self
    }

    /// Start a subgraph cluster.
    pub fn start_cluster(&mut self, id: &str, label: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "subgraph cluster_{id} {{");
        self.indent += 1;
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "label=\"{}\";", escape_label(label));
        self
    }

    /// End the current subgraph cluster.
    pub fn end_cluster(&mut self) -> &mut Self {
        self.indent -= 1;
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (i, (key, value)) in attrs.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            let _ = write!(self.output, "{}=\"{}\"", key, escape_label(value));
        }
    }
}

impl Default for DotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
