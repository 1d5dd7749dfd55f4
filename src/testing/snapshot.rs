//! Snapshot rendering helpers.
//!
//! Dumps a view subtree as indented plain text, one node per line, suitable for
//! inline snapshot assertions.

use crate::dom::node::{NodeData, NodeId};
use crate::dom::tree::Dom;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render the subtree at `node` as text.
///
/// Each line is `tag.class.class [key] "text"`, indented two spaces per level.
/// The key and text parts are omitted when absent or empty. A collapsed or
/// expanded size constraint shows as `max-height=N`. Lines are joined with
/// `'\n'`; the output has no trailing newline.
///
/// # Examples
///
/// ```ignore
/// use grouped_shopping_list::testing::render_to_string;
///
/// let text = render_to_string(card.dom(), container);
/// assert!(text.contains("div.item-row [item:1]"));
/// ```
pub fn render_to_string(dom: &Dom, node: NodeId) -> String {
    let mut lines = Vec::new();
    write_node(dom, node, 0, &mut lines);
    lines.join("\n")
}

/// Render one node's own line, without children.
pub fn describe_node(data: &NodeData) -> String {
    let mut line = data.tag.clone();
    for class in &data.classes {
        line.push('.');
        line.push_str(class);
    }
    if let Some(key) = &data.key {
        line.push_str(&format!(" [{key}]"));
    }
    if let Some(height) = data.max_height {
        line.push_str(&format!(" max-height={height}"));
    }
    if let Some(text) = data.text.as_deref().filter(|t| !t.is_empty()) {
        line.push_str(&format!(" {text:?}"));
    }
    line
}

fn write_node(dom: &Dom, node: NodeId, depth: usize, lines: &mut Vec<String>) {
    let Some(data) = dom.get(node) else {
        return;
    };
    lines.push(format!("{}{}", "  ".repeat(depth), describe_node(data)));
    for &child in dom.children(node) {
        write_node(dom, child, depth + 1, lines);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
