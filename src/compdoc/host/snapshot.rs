use super::{Clipboard, Host, Style, StyleLookup};
use crate::error::{CompdocError, Result};
use crate::model::Node;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// On-disk document snapshot, as exported by the host tool.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub styles: Vec<Style>,
    #[serde(default)]
    pub selection: Vec<String>,
}

/// Host backed by a loaded [`Snapshot`].
///
/// The selection holds copies of the selected subtrees, resolved by id from
/// the document at selection time.
pub struct SnapshotHost<C: Clipboard> {
    nodes: Vec<Node>,
    styles: HashMap<String, Style>,
    selection: Vec<Node>,
    clipboard: Option<C>,
}

impl<C: Clipboard> SnapshotHost<C> {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CompdocError::Snapshot(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        Self::from_snapshot(snapshot)
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let styles = snapshot
            .styles
            .into_iter()
            .map(|style| (style.id.clone(), style))
            .collect();

        let mut host = Self {
            nodes: snapshot.nodes,
            styles,
            selection: Vec::new(),
            clipboard: None,
        };
        host.select(snapshot.selection.as_slice())?;
        tracing::debug!(
            nodes = host.nodes.len(),
            styles = host.styles.len(),
            selected = host.selection.len(),
            "snapshot loaded"
        );
        Ok(host)
    }

    pub fn with_clipboard(mut self, clipboard: C) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Replace the selection with the nodes matching `ids`, in the given order.
    /// Leaves the current selection untouched if any id is unknown.
    pub fn select<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<()> {
        let selection = ids
            .iter()
            .map(|id| {
                self.find(id.as_ref()).cloned().ok_or_else(|| {
                    CompdocError::Snapshot(format!("Node not found: {}", id.as_ref()))
                })
            })
            .collect::<Result<Vec<Node>>>()?;
        self.selection = selection;
        Ok(())
    }

    fn find(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find_map(|node| node.find_by_id(id))
    }
}

impl<C: Clipboard> StyleLookup for SnapshotHost<C> {
    fn style_by_id(&self, style_id: &str) -> Option<&Style> {
        self.styles.get(style_id)
    }
}

impl<C: Clipboard> Host for SnapshotHost<C> {
    fn selection(&self) -> &[Node] {
        &self.selection
    }

    fn clipboard(&mut self) -> Option<&mut dyn Clipboard> {
        self.clipboard.as_mut().map(|c| c as &mut dyn Clipboard)
    }
}
