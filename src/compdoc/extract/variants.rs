use crate::model::{Node, NodeKind};
use crate::record::VariantDescriptor;

/// One descriptor per variant: every child of a component set, or the
/// component itself when it carries its own variant properties.
pub fn extract_variant_data(node: &Node) -> Vec<VariantDescriptor> {
    match &node.kind {
        NodeKind::ComponentSet(_) => node.children().iter().map(describe_variant).collect(),
        NodeKind::Component(component) if component.variant_properties.is_some() => {
            vec![describe_variant(node)]
        }
        _ => Vec::new(),
    }
}

fn describe_variant(node: &Node) -> VariantDescriptor {
    let properties = match &node.kind {
        NodeKind::Component(component) => {
            component.variant_properties.clone().unwrap_or_default()
        }
        _ => Default::default(),
    };
    VariantDescriptor {
        name: node.name.clone(),
        properties,
    }
}
