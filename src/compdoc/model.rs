//! # Node Model
//!
//! The design document is a tree of [`Node`]s. Each node carries a kind tag
//! ([`NodeKind`]) and a fixed set of optional capability facets: fills, a fill
//! style reference, auto-layout and children. Kind-specific facets (variant
//! properties, text properties, main-component reference) live inside the
//! [`NodeKind`] variant that owns them.
//!
//! ## Mixed values
//!
//! When a property differs across the characters of a text run (or the members
//! of a multi-node context), the host reports it as `"mixed"`. That case is
//! modeled explicitly by [`Facet::Mixed`] rather than compared against a magic
//! string at every use site.
//!
//! ## Snapshot decoding
//!
//! Nodes deserialize from the host tool's JSON shape (camelCase fields, a
//! `type` tag) through an intermediate flat record. Decoding is lenient where
//! the extraction rules are lenient:
//! - a `fills` value that is neither a list nor `"mixed"` decodes as absent
//! - a `lineHeight` in an unknown encoding decodes as [`LineHeight::Unknown`]

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Sentinel the host uses for heterogeneous values.
pub const MIXED: &str = "mixed";

pub const COMPONENT: &str = "COMPONENT";
pub const COMPONENT_SET: &str = "COMPONENT_SET";
pub const INSTANCE: &str = "INSTANCE";
pub const TEXT: &str = "TEXT";

/// Tri-state value of a node property.
#[derive(Debug, Clone, PartialEq)]
pub enum Facet<T> {
    Uniform(T),
    Mixed,
    Absent,
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::Absent
    }
}

impl<T> Facet<T> {
    pub fn uniform(&self) -> Option<&T> {
        match self {
            Facet::Uniform(value) => Some(value),
            Facet::Mixed | Facet::Absent => None,
        }
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, Facet::Mixed)
    }
}

impl<T: DeserializeOwned> Facet<T> {
    fn decode(field: &str, value: Option<Value>) -> Result<Self, String> {
        match value {
            None => Ok(Facet::Absent),
            Some(Value::String(s)) if s == MIXED => Ok(Facet::Mixed),
            Some(other) => serde_json::from_value(other)
                .map(Facet::Uniform)
                .map_err(|e| format!("invalid `{}`: {}", field, e)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct Node {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub fills: Facet<Vec<Paint>>,
    pub fill_style_id: Facet<String>,
    pub layout: Option<LayoutFacet>,
    /// `None` means the node has no children facet at all (leaf kinds such as
    /// rectangles); `Some(vec![])` is a container that happens to be empty.
    pub children: Option<Vec<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Component(ComponentFacet),
    ComponentSet(ComponentSetFacet),
    Instance(InstanceFacet),
    Text(TextFacet),
    /// Any other node type, keeping its raw tag (e.g. `FRAME`).
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentFacet {
    pub description: String,
    /// Present when the component is one variant of a (possibly implicit) set.
    pub variant_properties: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentSetFacet {
    pub description: String,
    /// Id of the designated default variant among the set's children.
    pub default_variant_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceFacet {
    pub main_component: Option<MainComponentRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MainComponentRef {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFacet {
    pub characters: String,
    pub font_size: Facet<f64>,
    pub line_height: Facet<LineHeight>,
    pub text_style_id: Facet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    Auto,
    Percent {
        value: f64,
    },
    Pixels {
        value: f64,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub color: Option<Rgb>,
    #[serde(default)]
    pub visible: Option<bool>,
}

impl Paint {
    pub const SOLID: &'static str = "SOLID";

    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Self {
            kind: Self::SOLID.to_string(),
            opacity: None,
            color: Some(Rgb { r, g, b }),
            visible: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }
}

/// Normalized (0.0–1.0) color channels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
    /// Any other active mode the host reports (e.g. `GRID`).
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutFacet {
    pub mode: LayoutMode,
    pub padding_top: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,
    pub item_spacing: Option<f64>,
    pub primary_axis_align: String,
    pub counter_axis_align: String,
}

impl LayoutFacet {
    /// Host default for both alignment axes.
    pub const DEFAULT_ALIGN: &'static str = "MIN";

    pub fn new(mode: LayoutMode) -> Self {
        Self {
            mode,
            padding_top: None,
            padding_right: None,
            padding_bottom: None,
            padding_left: None,
            item_spacing: None,
            primary_axis_align: Self::DEFAULT_ALIGN.to_string(),
            counter_axis_align: Self::DEFAULT_ALIGN.to_string(),
        }
    }
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            fills: Facet::Absent,
            fill_style_id: Facet::Absent,
            layout: None,
            children: None,
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_fills(mut self, fills: Vec<Paint>) -> Self {
        self.fills = Facet::Uniform(fills);
        self
    }

    pub fn with_fill_style(mut self, style_id: impl Into<String>) -> Self {
        self.fill_style_id = Facet::Uniform(style_id.into());
        self
    }

    pub fn with_layout(mut self, layout: LayoutFacet) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Raw host type tag, e.g. `COMPONENT_SET` or `FRAME`.
    pub fn type_tag(&self) -> &str {
        match &self.kind {
            NodeKind::Component(_) => COMPONENT,
            NodeKind::ComponentSet(_) => COMPONENT_SET,
            NodeKind::Instance(_) => INSTANCE,
            NodeKind::Text(_) => TEXT,
            NodeKind::Other(tag) => tag,
        }
    }

    /// Description carried by component and component-set nodes.
    pub fn description(&self) -> &str {
        match &self.kind {
            NodeKind::Component(c) => &c.description,
            NodeKind::ComponentSet(s) => &s.description,
            _ => "",
        }
    }

    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Pre-order walk of this node and all its descendants.
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Node>
    where
        F: Fn(&Node) -> bool,
    {
        let mut found = Vec::new();
        self.collect_into(&predicate, &mut found);
        found
    }

    fn collect_into<'a, F>(&'a self, predicate: &F, found: &mut Vec<&'a Node>)
    where
        F: Fn(&Node) -> bool,
    {
        if predicate(self) {
            found.push(self);
        }
        for child in self.children() {
            child.collect_into(predicate, found);
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find_by_id(id))
    }
}

/// Flat wire shape of a node, as the host serializes it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    variant_properties: Option<BTreeMap<String, String>>,
    #[serde(default)]
    default_variant_id: Option<String>,
    #[serde(default)]
    main_component: Option<MainComponentRef>,
    #[serde(default)]
    characters: Option<String>,
    #[serde(default)]
    font_size: Option<Value>,
    #[serde(default)]
    line_height: Option<Value>,
    #[serde(default)]
    text_style_id: Option<Value>,
    #[serde(default)]
    fills: Option<Value>,
    #[serde(default)]
    fill_style_id: Option<Value>,
    #[serde(default)]
    layout_mode: Option<LayoutMode>,
    #[serde(default)]
    padding_top: Option<f64>,
    #[serde(default)]
    padding_right: Option<f64>,
    #[serde(default)]
    padding_bottom: Option<f64>,
    #[serde(default)]
    padding_left: Option<f64>,
    #[serde(default)]
    item_spacing: Option<f64>,
    #[serde(default)]
    primary_axis_align_items: Option<String>,
    #[serde(default)]
    counter_axis_align_items: Option<String>,
    #[serde(default)]
    children: Option<Vec<Node>>,
}

impl TryFrom<RawNode> for Node {
    type Error = String;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let kind = match raw.node_type.as_str() {
            COMPONENT => NodeKind::Component(ComponentFacet {
                description: raw.description.unwrap_or_default(),
                variant_properties: raw.variant_properties,
            }),
            COMPONENT_SET => NodeKind::ComponentSet(ComponentSetFacet {
                description: raw.description.unwrap_or_default(),
                default_variant_id: raw.default_variant_id,
            }),
            INSTANCE => NodeKind::Instance(InstanceFacet {
                main_component: raw.main_component,
            }),
            TEXT => NodeKind::Text(TextFacet {
                characters: raw.characters.unwrap_or_default(),
                font_size: Facet::decode("fontSize", raw.font_size)?,
                line_height: decode_line_height(raw.line_height),
                text_style_id: Facet::decode("textStyleId", raw.text_style_id)?,
            }),
            other => NodeKind::Other(other.to_string()),
        };

        let layout = raw.layout_mode.map(|mode| LayoutFacet {
            mode,
            padding_top: raw.padding_top,
            padding_right: raw.padding_right,
            padding_bottom: raw.padding_bottom,
            padding_left: raw.padding_left,
            item_spacing: raw.item_spacing,
            primary_axis_align: raw
                .primary_axis_align_items
                .unwrap_or_else(|| LayoutFacet::DEFAULT_ALIGN.to_string()),
            counter_axis_align: raw
                .counter_axis_align_items
                .unwrap_or_else(|| LayoutFacet::DEFAULT_ALIGN.to_string()),
        });

        Ok(Node {
            id: raw.id,
            name: raw.name,
            kind,
            fills: decode_fills(raw.fills)?,
            fill_style_id: Facet::decode("fillStyleId", raw.fill_style_id)?,
            layout,
            children: raw.children,
        })
    }
}

fn decode_fills(value: Option<Value>) -> Result<Facet<Vec<Paint>>, String> {
    match value {
        Some(list @ Value::Array(_)) => Facet::decode("fills", Some(list)),
        Some(Value::String(s)) if s == MIXED => Ok(Facet::Mixed),
        // Not list-shaped: treated as no fills.
        _ => Ok(Facet::Absent),
    }
}

fn decode_line_height(value: Option<Value>) -> Facet<LineHeight> {
    match value {
        None => Facet::Absent,
        Some(Value::String(ref s)) if s == MIXED => Facet::Mixed,
        Some(other) => {
            Facet::Uniform(serde_json::from_value(other).unwrap_or(LineHeight::Unknown))
        }
    }
}
