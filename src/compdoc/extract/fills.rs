use super::tokens::resolve_facet;
use crate::host::StyleLookup;
use crate::model::{Facet, Node, Paint, Rgb};
use crate::record::FillSummary;

const DEFAULT_OPACITY: f64 = 1.0;

/// Normalize one paint: opacity rounded to two decimals, solid colors as
/// `rgb(r, g, b)` with 0–255 channels.
pub fn summarize_fill(paint: &Paint) -> FillSummary {
    let color = if paint.kind == Paint::SOLID {
        paint.color.map(format_rgb)
    } else {
        None
    };

    FillSummary {
        kind: paint.kind.clone(),
        opacity: paint.opacity.map_or(DEFAULT_OPACITY, round_opacity),
        color,
        visible: paint.visible,
        token: None,
    }
}

/// Summarize every fill on `node`, tagging each with the node's fill style
/// token when one resolves.
pub fn extract_fills<L: StyleLookup + ?Sized>(styles: &L, node: &Node) -> Vec<FillSummary> {
    let paints = match &node.fills {
        Facet::Uniform(paints) => paints,
        Facet::Mixed | Facet::Absent => return Vec::new(),
    };

    let token = resolve_facet(styles, &node.fill_style_id);
    tracing::debug!(node = %node.id, fills = paints.len(), ?token, "summarizing fills");

    paints
        .iter()
        .map(|paint| FillSummary {
            token: token.clone(),
            ..summarize_fill(paint)
        })
        .collect()
}

fn round_opacity(opacity: f64) -> f64 {
    if !opacity.is_finite() {
        return DEFAULT_OPACITY;
    }
    (opacity.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

fn format_rgb(color: Rgb) -> String {
    format!(
        "rgb({}, {}, {})",
        to_channel(color.r),
        to_channel(color.g),
        to_channel(color.b)
    )
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
