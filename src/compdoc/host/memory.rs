use super::{Clipboard, Host, Style, StyleLookup, UiChannel};
use crate::config::UiConfig;
use crate::error::{CompdocError, Result};
use crate::message::OutboundMessage;
use crate::model::Node;

/// In-memory host for testing and development.
/// Holds the selection and styles directly; has no clipboard unless one is added.
#[derive(Debug, Default)]
pub struct MemoryHost {
    selection: Vec<Node>,
    styles: Vec<Style>,
    clipboard: Option<RecordingClipboard>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, id: &str, name: &str) -> Self {
        self.styles.push(Style {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn with_selection(mut self, selection: Vec<Node>) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_clipboard(mut self, clipboard: RecordingClipboard) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn select(&mut self, selection: Vec<Node>) {
        self.selection = selection;
    }

    /// Texts written to the clipboard so far (empty when there is none).
    pub fn copied(&self) -> &[String] {
        self.clipboard
            .as_ref()
            .map(|c| c.copied.as_slice())
            .unwrap_or(&[])
    }
}

impl StyleLookup for MemoryHost {
    fn style_by_id(&self, style_id: &str) -> Option<&Style> {
        self.styles.iter().find(|style| style.id == style_id)
    }
}

impl Host for MemoryHost {
    fn selection(&self) -> &[Node] {
        &self.selection
    }

    fn clipboard(&mut self) -> Option<&mut dyn Clipboard> {
        self.clipboard.as_mut().map(|c| c as &mut dyn Clipboard)
    }
}

/// Clipboard that remembers what it was given, or fails on demand.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    copied: Vec<String>,
    fail_with: Option<String>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            copied: Vec::new(),
            fail_with: Some(message.to_string()),
        }
    }
}

impl Clipboard for RecordingClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        if let Some(message) = &self.fail_with {
            return Err(CompdocError::Clipboard(message.clone()));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

/// Channel that keeps every posted message, in order.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    pub opened: Option<UiConfig>,
    pub messages: Vec<OutboundMessage>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&OutboundMessage> {
        self.messages.last()
    }
}

impl UiChannel for RecordingChannel {
    fn open(&mut self, ui: &UiConfig) -> Result<()> {
        self.opened = Some(*ui);
        Ok(())
    }

    fn post_message(&mut self, message: &OutboundMessage) -> Result<()> {
        self.messages.push(message.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{
        ComponentFacet, ComponentSetFacet, InstanceFacet, MainComponentRef, Node, NodeKind,
        TextFacet,
    };
    use std::collections::BTreeMap;

    pub fn properties(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    pub fn component(id: &str, name: &str) -> Node {
        Node::new(id, name, NodeKind::Component(ComponentFacet::default())).with_children(vec![])
    }

    pub fn described_component(id: &str, name: &str, description: &str) -> Node {
        let facet = ComponentFacet {
            description: description.to_string(),
            variant_properties: None,
        };
        Node::new(id, name, NodeKind::Component(facet)).with_children(vec![])
    }

    /// A component that is one variant of a set.
    pub fn variant(id: &str, name: &str, props: &[(&str, &str)]) -> Node {
        let facet = ComponentFacet {
            description: String::new(),
            variant_properties: Some(properties(props)),
        };
        Node::new(id, name, NodeKind::Component(facet)).with_children(vec![])
    }

    pub fn component_set(id: &str, name: &str, variants: Vec<Node>) -> Node {
        Node::new(id, name, NodeKind::ComponentSet(ComponentSetFacet::default()))
            .with_children(variants)
    }

    pub fn component_set_with_default(
        id: &str,
        name: &str,
        default_variant_id: &str,
        variants: Vec<Node>,
    ) -> Node {
        let facet = ComponentSetFacet {
            description: String::new(),
            default_variant_id: Some(default_variant_id.to_string()),
        };
        Node::new(id, name, NodeKind::ComponentSet(facet)).with_children(variants)
    }

    pub fn text(id: &str, name: &str, characters: &str) -> Node {
        let facet = TextFacet {
            characters: characters.to_string(),
            ..TextFacet::default()
        };
        Node::new(id, name, NodeKind::Text(facet))
    }

    pub fn instance(id: &str, name: &str, main_component: Option<&str>) -> Node {
        let facet = InstanceFacet {
            main_component: main_component.map(|main| MainComponentRef {
                id: format!("{}-main", id),
                name: main.to_string(),
            }),
        };
        Node::new(id, name, NodeKind::Instance(facet))
    }

    pub fn frame(id: &str, name: &str) -> Node {
        Node::new(id, name, NodeKind::Other("FRAME".to_string())).with_children(vec![])
    }

    pub fn rectangle(id: &str, name: &str) -> Node {
        Node::new(id, name, NodeKind::Other("RECTANGLE".to_string()))
    }
}
