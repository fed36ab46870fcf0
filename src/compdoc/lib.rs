//! # Compdoc Architecture
//!
//! Compdoc is a **host-agnostic component documentation core**. It reads the
//! selected component out of a design document and turns it into a structured
//! [`record::ComponentMetadata`] record, which a documentation panel renders.
//! The design tool, the panel and the clipboard are all on the far side of
//! traits; the bundled CLI is just one adapter.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Adapter (cli/, wired by main.rs)                       │
//! │  - Loads a snapshot, parses args, runs the stdio session    │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Init, selection-change and panel-message entry points    │
//! │  - Posts every result through the UiChannel                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, extract/)                    │
//! │  - Metadata assembly and the copy-guide flow                │
//! │  - Pure functions over read-only node trees                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host Layer (host/)                                         │
//! │  - Host, StyleLookup, Clipboard and UiChannel traits        │
//! │  - SnapshotHost (production), MemoryHost (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: The Document Is Read-Only
//!
//! Extraction never mutates a node. Every summarizer borrows the tree and
//! returns fresh values, so extraction is repeatable and safe to run on every
//! selection change.
//!
//! ## Mixed Values
//!
//! Where the host reports that a property differs across a node's parts, the
//! model carries [`model::Facet::Mixed`] instead of a sentinel value. Each
//! summarizer decides what a mixed value means for its own output.
//!
//! ## Testing Strategy
//!
//! 1. **Extractors** (`extract/*.rs`): unit tests per summarizer, on fixture trees.
//! 2. **Commands** (`commands/*.rs`): assembly and copy flows against `MemoryHost`.
//! 3. **API** (`api.rs`): message ordering and routing, via `RecordingChannel`.
//! 4. **CLI** (`tests/`): the binary end to end, with a snapshot on disk.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all host events
//! - [`commands`]: Metadata assembly and the copy-guide flow
//! - [`extract`]: Attribute summarizers and the style token resolver
//! - [`host`]: Host capability traits and implementations
//! - [`model`]: The document node tree
//! - [`record`]: The metadata record sent to the panel
//! - [`message`]: Inbound and outbound panel messages
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types
//! - `cli`: Argument parsing, printing and the stdio session for the binary (not part of the lib API)

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod host;
pub mod message;
pub mod model;
pub mod record;
