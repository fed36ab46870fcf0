//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for the host adapter: lifecycle events and panel messages come
//! in here, and every reply leaves through the [`UiChannel`].
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Opens** the panel once, at init
//! - **Dispatches** metadata on startup, on selection change and on request
//! - **Routes** inbound panel messages to the matching command
//!
//! ## What the API Does NOT Do
//!
//! - **Extraction logic**: That belongs in `commands/*.rs` and `extract/`
//! - **Transport**: How messages travel is the channel's business
//! - **Presentation**: Messages are structured values, not strings
//!
//! ## Generic Over Host
//!
//! `CompdocApi<H: Host, U: UiChannel>` is generic over both sides:
//! - Production: `CompdocApi<SnapshotHost<SystemClipboard>, LineChannel<Stdout>>`
//! - Testing: `CompdocApi<MemoryHost, RecordingChannel>`
//!
//! Extraction failures never surface as `Err` here. They are posted to the panel
//! as error payloads. `Err` only means the channel itself broke.

use crate::commands;
use crate::config::CompdocConfig;
use crate::error::Result;
use crate::host::{Host, UiChannel};
use crate::message::{InboundMessage, OutboundMessage};
use serde_json::Value;

pub struct CompdocApi<H: Host, U: UiChannel> {
    host: H,
    ui: U,
    config: CompdocConfig,
}

impl<H: Host, U: UiChannel> CompdocApi<H, U> {
    /// Open the panel and, unless disabled, dispatch the first metadata message.
    pub fn init(host: H, mut ui: U, config: CompdocConfig) -> Result<Self> {
        ui.open(&config.ui)?;
        let mut api = Self { host, ui, config };
        if api.config.dispatch_on_startup {
            api.dispatch("startup")?;
        }
        Ok(api)
    }

    pub fn on_selection_changed(&mut self) -> Result<()> {
        self.dispatch("selectionchange")
    }

    /// Handle a raw panel message. Untyped and unknown messages are ignored.
    pub fn on_message(&mut self, raw: &Value) -> Result<()> {
        match InboundMessage::parse(raw) {
            Some(message) => self.handle(message),
            None => {
                tracing::warn!(message = %raw, "ignoring panel message");
                Ok(())
            }
        }
    }

    pub fn handle(&mut self, message: InboundMessage) -> Result<()> {
        match message {
            InboundMessage::RequestMetadata => self.dispatch("request-metadata"),
            InboundMessage::CopyGuide { payload } => {
                let result = commands::copy::run(&mut self.host, &payload);
                self.ui.post_message(&OutboundMessage::CopyResult(result))
            }
        }
    }

    /// Extract metadata for the current selection and post it to the panel.
    pub fn dispatch_metadata(&mut self) -> Result<()> {
        self.dispatch("manual")
    }

    fn dispatch(&mut self, trigger: &str) -> Result<()> {
        let result = commands::metadata::run(&self.host);
        match &result {
            Ok(metadata) => tracing::info!(trigger, component = %metadata.name, "dispatching metadata"),
            Err(e) => tracing::info!(trigger, error = %e, "dispatching metadata error"),
        }
        self.ui.post_message(&OutboundMessage::Metadata(result.into()))
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn config(&self) -> &CompdocConfig {
        &self.config
    }
}
