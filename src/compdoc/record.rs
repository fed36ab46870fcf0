//! Output records: the assembled [`ComponentMetadata`] and the fragments each
//! summarizer contributes to it. Field names serialize in camelCase, which is
//! what the presentation layer reads.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub name: String,
    pub semantic_role: String,
    pub variants: Vec<VariantDescriptor>,
    pub auto_layout: Option<AutoLayoutDescriptor>,
    pub fills: Vec<FillSummary>,
    pub text_styles: Vec<TextStyleEntry>,
    pub description: String,
    pub subcomponents: Vec<SubcomponentDescriptor>,
    /// Reserved for manual annotation; extraction never fills it.
    pub usage_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantDescriptor {
    pub name: String,
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoLayoutDescriptor {
    pub direction: Direction,
    pub spacing: f64,
    pub padding: Padding,
    pub alignment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillSummary {
    #[serde(rename = "type")]
    pub kind: String,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Display form of a line height: `"AUTO"`, `"<value>%"` or a pixel number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineHeightLabel {
    Auto,
    Percent(f64),
    Pixels(f64),
}

impl Serialize for LineHeightLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LineHeightLabel::Auto => serializer.serialize_str("AUTO"),
            LineHeightLabel::Percent(value) => serializer.serialize_str(&format!("{}%", value)),
            LineHeightLabel::Pixels(value) => serializer.serialize_f64(*value),
        }
    }
}

impl std::fmt::Display for LineHeightLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineHeightLabel::Auto => write!(f, "AUTO"),
            LineHeightLabel::Percent(value) => write!(f, "{}%", value),
            LineHeightLabel::Pixels(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleEntry {
    pub token: Option<String>,
    pub font_size: Option<f64>,
    pub line_height: Option<LineHeightLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcomponentDescriptor {
    pub role: String,
    pub node_type: String,
    pub description: String,
}
