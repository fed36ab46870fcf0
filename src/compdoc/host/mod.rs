//! # Host Layer
//!
//! compdoc never talks to a design tool directly. Everything it needs from the
//! outside world is expressed as a capability trait that the hosting adapter
//! implements:
//!
//! - [`StyleLookup`]: resolve an opaque style id to a shared style record
//! - [`Host`]: the current selection, plus an optional [`Clipboard`]
//! - [`UiChannel`]: the one-way, order-preserving channel to the panel
//!
//! ## Implementations
//!
//! - [`memory::MemoryHost`] / [`memory::RecordingChannel`]: in-memory, for tests
//!   - Selection and styles are plain vectors
//!   - The channel records every posted message
//!
//! - [`snapshot::SnapshotHost`]: a document snapshot loaded from JSON
//!   - Selection can be changed by node id, as a selection-change event would
//!   - Clipboard is whatever writer the adapter plugs in (usually the system one)
//!
//! - [`stdio::LineChannel`]: writes each outbound message as one JSON line
//!
//! ## Snapshot Format
//!
//! ```text
//! {
//!   "nodes":     [ <node>, ... ],          # top-level page nodes
//!   "styles":    [ { "id", "name" }, ... ],
//!   "selection": [ "<node id>", ... ]      # ordered
//! }
//! ```

use crate::config::UiConfig;
use crate::error::Result;
use crate::message::OutboundMessage;
use crate::model::Node;
use serde::{Deserialize, Serialize};

pub mod memory;
pub mod snapshot;
pub mod stdio;

/// A shared style definition (color, text, ...) referenced by id from nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub id: String,
    pub name: String,
}

pub trait StyleLookup {
    /// Look up a style by its opaque id.
    fn style_by_id(&self, style_id: &str) -> Option<&Style>;
}

/// The document side of the host application.
pub trait Host: StyleLookup {
    /// Currently selected nodes, in selection order.
    fn selection(&self) -> &[Node];

    /// The clipboard-write capability, if the host provides one.
    fn clipboard(&mut self) -> Option<&mut dyn Clipboard>;
}

pub trait Clipboard {
    /// Write text to the clipboard. Failures carry the writer's own message.
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// Outbound message channel to the presentation layer.
///
/// Delivery is fire-and-forget: an `Err` means the transport itself broke,
/// never that the panel rejected a message.
pub trait UiChannel {
    /// Called once by `CompdocApi::init` before any message is posted.
    fn open(&mut self, ui: &UiConfig) -> Result<()>;

    fn post_message(&mut self, message: &OutboundMessage) -> Result<()>;
}
