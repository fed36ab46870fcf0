use super::tokens::resolve_facet;
use crate::host::StyleLookup;
use crate::model::{Facet, LineHeight, Node, NodeKind, TextFacet};
use crate::record::{LineHeightLabel, TextStyleEntry};

/// Collect the text styles used anywhere under `component` (itself included).
///
/// Entries are deduplicated by full structural equality; the first occurrence
/// of each distinct entry keeps its position.
pub fn extract_text_styles<L: StyleLookup + ?Sized>(
    styles: &L,
    component: &Node,
) -> Vec<TextStyleEntry> {
    let text_nodes = component.find_all(|node| matches!(node.kind, NodeKind::Text(_)));

    let mut unique: Vec<TextStyleEntry> = Vec::new();
    for node in &text_nodes {
        let NodeKind::Text(text) = &node.kind else {
            continue;
        };
        let entry = describe_text(styles, text);
        if !unique.contains(&entry) {
            unique.push(entry);
        }
    }

    tracing::debug!(
        component = %component.id,
        text_nodes = text_nodes.len(),
        unique = unique.len(),
        "collected text styles"
    );
    unique
}

fn describe_text<L: StyleLookup + ?Sized>(styles: &L, text: &TextFacet) -> TextStyleEntry {
    TextStyleEntry {
        token: resolve_facet(styles, &text.text_style_id),
        font_size: text.font_size.uniform().copied(),
        line_height: line_height_label(&text.line_height),
    }
}

fn line_height_label(line_height: &Facet<LineHeight>) -> Option<LineHeightLabel> {
    match line_height.uniform()? {
        LineHeight::Auto => Some(LineHeightLabel::Auto),
        LineHeight::Percent { value } => Some(LineHeightLabel::Percent(*value)),
        LineHeight::Pixels { value } => Some(LineHeightLabel::Pixels(*value)),
        LineHeight::Unknown => None,
    }
}
