//! # Command Layer
//!
//! The operations the dispatch layer can trigger. Each command is a plain
//! function over a [`Host`](crate::host::Host) that returns plain Rust data.
//!
//! ## What Commands Do NOT Do
//!
//! - **Post messages**: wrapping results into outbound messages is the API's job
//! - **Fail loudly**: every user-facing failure comes back as data
//!   (`ExtractError`, or a `CopyResult` with `success: false`)
//! - **Cache**: metadata is recomputed from the live node graph on every call
//!
//! ## Command Modules
//!
//! - [`metadata`]: pick the primary node, resolve its base variant, run the
//!   summarizers and assemble a `ComponentMetadata`
//! - [`copy`]: write a guide to the host clipboard and report the outcome

pub mod copy;
pub mod metadata;
