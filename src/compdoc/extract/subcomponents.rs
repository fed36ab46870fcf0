use crate::model::{InstanceFacet, Node, NodeKind};
use crate::record::SubcomponentDescriptor;

/// Describe the direct children of `component`. Grandchildren are not visited.
pub fn extract_subcomponents(component: &Node) -> Vec<SubcomponentDescriptor> {
    let Some(children) = &component.children else {
        return Vec::new();
    };

    children
        .iter()
        .map(|child| SubcomponentDescriptor {
            role: child.name.clone(),
            node_type: child.type_tag().to_string(),
            description: describe_child(child),
        })
        .collect()
}

fn describe_child(child: &Node) -> String {
    match &child.kind {
        NodeKind::Instance(InstanceFacet {
            main_component: Some(main),
        }) => format!("Instance of {}", main.name),
        // Length in UTF-16 code units, as the panel counts it.
        NodeKind::Text(text) => {
            format!("텍스트 노드, 글자 수: {}", text.characters.encode_utf16().count())
        }
        _ => match &child.children {
            Some(grandchildren) => format!(
                "{} ({} children)",
                child.type_tag().to_lowercase(),
                grandchildren.len()
            ),
            None => child.type_tag().to_lowercase(),
        },
    }
}
