use crate::extract;
use crate::host::Host;
use crate::model::{Node, NodeKind};
use crate::record::ComponentMetadata;
use thiserror::Error;

pub const NO_DESCRIPTION: &str = "(정보 없음)";

/// Why metadata could not be produced. The display text is what the panel shows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    #[error("컴포넌트를 선택해 주세요.")]
    NoSelection,

    #[error("Component 또는 Component Set만 지원합니다.")]
    UnsupportedType,

    #[error("기본 Variant를 찾지 못했습니다.")]
    NoDefaultVariant,
}

pub fn run<H: Host + ?Sized>(host: &H) -> Result<ComponentMetadata, ExtractError> {
    let node = primary_node(host.selection())?;
    let base = base_component(node)?;
    tracing::debug!(node = %node.id, base = %base.id, "resolved base component");

    let description = match base.description() {
        "" => NO_DESCRIPTION.to_string(),
        text => text.to_string(),
    };

    Ok(ComponentMetadata {
        name: node.name.clone(),
        semantic_role: semantic_role(&node.name).to_string(),
        variants: extract::extract_variant_data(node),
        auto_layout: extract::extract_auto_layout(base),
        fills: extract::extract_fills(host, base),
        text_styles: extract::extract_text_styles(host, base),
        description,
        subcomponents: extract::extract_subcomponents(base),
        usage_notes: Vec::new(),
    })
}

/// The first selected node, if it is a component or a component set.
pub fn primary_node(selection: &[Node]) -> Result<&Node, ExtractError> {
    let node = selection.first().ok_or(ExtractError::NoSelection)?;
    match node.kind {
        NodeKind::Component(_) | NodeKind::ComponentSet(_) => Ok(node),
        _ => Err(ExtractError::UnsupportedType),
    }
}

/// The variant that stands in for the whole selection.
///
/// A component is its own base. A set uses its designated default variant,
/// falling back to its first child.
pub fn base_component(node: &Node) -> Result<&Node, ExtractError> {
    match &node.kind {
        NodeKind::ComponentSet(set) => {
            let designated = set
                .default_variant_id
                .as_deref()
                .and_then(|id| node.children().iter().find(|child| child.id == id));
            designated
                .or_else(|| node.children().first())
                .ok_or(ExtractError::NoDefaultVariant)
        }
        _ => Ok(node),
    }
}

/// Last `/`-delimited segment of a component name.
pub fn semantic_role(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
