//! # Extraction Layer
//!
//! Independent, read-only summarizers. Each one takes a single node (or the
//! subtree under it) and returns one normalized fragment of the metadata
//! record. None of them mutate the tree or keep state between calls.
//!
//! | Module | Input | Depth | Output |
//! |--------|-------|-------|--------|
//! | [`tokens`] | style id | n/a | display name of a shared style |
//! | [`fills`] | node | node only | `FillSummary` list |
//! | [`layout`] | node | node only | `AutoLayoutDescriptor` or none |
//! | [`text_styles`] | component | whole subtree | deduplicated `TextStyleEntry` list |
//! | [`subcomponents`] | component | direct children | `SubcomponentDescriptor` list |
//! | [`variants`] | component or set | direct children | `VariantDescriptor` list |
//!
//! Subcomponents only describe one level down while text styles aggregate the
//! whole component. Keep that asymmetry.

pub mod fills;
pub mod layout;
pub mod subcomponents;
pub mod text_styles;
pub mod tokens;
pub mod variants;

pub use fills::{extract_fills, summarize_fill};
pub use layout::extract_auto_layout;
pub use subcomponents::extract_subcomponents;
pub use text_styles::extract_text_styles;
pub use tokens::resolve_token;
pub use variants::extract_variant_data;
