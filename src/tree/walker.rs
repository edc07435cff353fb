//! Pre-order tree walker producing the LIST rendering.

use crate::tree::node::Node;

/// Two spaces per depth level; the listing contract.
const INDENT: &str = "  ";

/// Collect one line per node, depth-first pre-order, children in insertion
/// order. The root itself is unnamed and contributes no line.
pub fn render(root: &Node) -> Vec<String> {
    let mut lines = Vec::new();
    walk(root, 0, &mut lines);
    lines
}

fn walk(node: &Node, depth: usize, lines: &mut Vec<String>) {
    for (name, child) in node.children() {
        lines.push(format!("{}{}", INDENT.repeat(depth), name));
        walk(child, depth + 1, lines);
    }
}
