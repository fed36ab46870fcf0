use super::UiChannel;
use crate::config::UiConfig;
use crate::error::{CompdocError, Result};
use crate::message::OutboundMessage;
use std::io::Write;

/// Writes each outbound message as a single JSON line and flushes it.
///
/// With `pretty` set, messages are pretty-printed instead and may span
/// several lines; consumers reading line-by-line should leave it off.
pub struct LineChannel<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> LineChannel<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> UiChannel for LineChannel<W> {
    fn open(&mut self, ui: &UiConfig) -> Result<()> {
        tracing::info!(width = ui.width, height = ui.height, "ui opened");
        Ok(())
    }

    fn post_message(&mut self, message: &OutboundMessage) -> Result<()> {
        let line = if self.pretty {
            serde_json::to_string_pretty(message)?
        } else {
            serde_json::to_string(message)?
        };
        writeln!(self.writer, "{}", line)
            .and_then(|_| self.writer.flush())
            .map_err(|e| CompdocError::Channel(format!("Failed to post message: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::copy::CopyResult;
    use crate::commands::metadata::ExtractError;
    use serde_json::Value;

    fn lines(output: Vec<u8>) -> Vec<Value> {
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn writes_one_line_per_message_in_order() {
        let mut channel = LineChannel::new(Vec::new(), false);
        channel.open(&UiConfig::default()).unwrap();
        channel
            .post_message(&OutboundMessage::Metadata(
                Err(ExtractError::NoSelection).into(),
            ))
            .unwrap();
        channel
            .post_message(&OutboundMessage::CopyResult(CopyResult {
                success: false,
                message: "x".into(),
            }))
            .unwrap();

        let lines = lines(channel.into_inner());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "metadata");
        assert_eq!(lines[1]["type"], "copy-result");
        assert_eq!(lines[1]["payload"]["message"], "x");
    }

    #[test]
    fn pretty_output_is_still_valid_json() {
        let mut channel = LineChannel::new(Vec::new(), true);
        channel
            .post_message(&OutboundMessage::Metadata(
                Err(ExtractError::UnsupportedType).into(),
            ))
            .unwrap();

        let text = String::from_utf8(channel.into_inner()).unwrap();
        assert!(text.lines().count() > 1);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value["payload"]["error"],
            "Component 또는 Component Set만 지원합니다."
        );
    }
}
