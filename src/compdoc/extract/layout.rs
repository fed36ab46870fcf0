use crate::model::{LayoutMode, Node};
use crate::record::{AutoLayoutDescriptor, Direction, Padding};

const SPACE_BETWEEN: &str = "SPACE_BETWEEN";

/// Describe the node's auto-layout, or `None` when it has no active layout.
pub fn extract_auto_layout(node: &Node) -> Option<AutoLayoutDescriptor> {
    let layout = node.layout.as_ref()?;
    let direction = match layout.mode {
        LayoutMode::None => return None,
        LayoutMode::Horizontal => Direction::Horizontal,
        LayoutMode::Vertical | LayoutMode::Other => Direction::Vertical,
    };

    let alignment = if layout.primary_axis_align == SPACE_BETWEEN {
        "Space Between".to_string()
    } else {
        format!("{}/{}", layout.primary_axis_align, layout.counter_axis_align)
    };

    Some(AutoLayoutDescriptor {
        direction,
        spacing: layout.item_spacing.unwrap_or(0.0),
        padding: Padding {
            top: layout.padding_top.unwrap_or(0.0),
            right: layout.padding_right.unwrap_or(0.0),
            bottom: layout.padding_bottom.unwrap_or(0.0),
            left: layout.padding_left.unwrap_or(0.0),
        },
        alignment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::fixtures;
    use crate::model::LayoutFacet;

    #[test]
    fn no_layout_facet_yields_none() {
        assert_eq!(extract_auto_layout(&fixtures::component("1", "C")), None);
    }

    #[test]
    fn layout_mode_none_yields_none() {
        let node =
            fixtures::component("1", "C").with_layout(LayoutFacet::new(LayoutMode::None));
        assert_eq!(extract_auto_layout(&node), None);
    }

    #[test]
    fn unnamed_active_mode_reads_as_vertical() {
        let node =
            fixtures::component("1", "C").with_layout(LayoutFacet::new(LayoutMode::Other));
        let layout = extract_auto_layout(&node).unwrap();
        assert_eq!(layout.direction, Direction::Vertical);
    }

    #[test]
    fn missing_values_default_to_zero() {
        let node =
            fixtures::component("1", "C").with_layout(LayoutFacet::new(LayoutMode::Vertical));
        let layout = extract_auto_layout(&node).unwrap();
        assert_eq!(layout.direction, Direction::Vertical);
        assert_eq!(layout.spacing, 0.0);
        assert_eq!(layout.padding, Padding::default());
        assert_eq!(layout.alignment, "MIN/MIN");
    }

    #[test]
    fn reads_padding_spacing_and_composed_alignment() {
        let mut facet = LayoutFacet::new(LayoutMode::Horizontal);
        facet.padding_top = Some(8.0);
        facet.padding_right = Some(16.0);
        facet.padding_bottom = Some(8.0);
        facet.padding_left = Some(12.0);
        facet.item_spacing = Some(4.0);
        facet.primary_axis_align = "CENTER".into();
        facet.counter_axis_align = "MAX".into();

        let node = fixtures::component("1", "C").with_layout(facet);
        let layout = extract_auto_layout(&node).unwrap();
        assert_eq!(layout.direction, Direction::Horizontal);
        assert_eq!(layout.spacing, 4.0);
        assert_eq!(
            layout.padding,
            Padding {
                top: 8.0,
                right: 16.0,
                bottom: 8.0,
                left: 12.0
            }
        );
        assert_eq!(layout.alignment, "CENTER/MAX");
    }

    #[test]
    fn space_between_gets_display_label() {
        let mut facet = LayoutFacet::new(LayoutMode::Horizontal);
        facet.primary_axis_align = "SPACE_BETWEEN".into();
        facet.counter_axis_align = "CENTER".into();

        let node = fixtures::component("1", "C").with_layout(facet);
        let layout = extract_auto_layout(&node).unwrap();
        assert_eq!(layout.alignment, "Space Between");
    }
}
