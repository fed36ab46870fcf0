use compdoc::api::CompdocApi;
use compdoc::error::Result;
use compdoc::host::snapshot::SnapshotHost;
use compdoc::host::{Clipboard, UiChannel};
use serde::Deserialize;
use serde_json::Value;
use std::io::BufRead;

/// A host-side event arriving on the session input, as opposed to a panel message.
#[derive(Debug, Deserialize)]
struct HostEvent {
    event: String,
    #[serde(default)]
    selection: Vec<String>,
}

/// Feed every input line to the API until EOF.
///
/// Lines carrying an `event` key are host events; everything else is treated
/// as a panel message. Unreadable lines are skipped.
pub(super) fn run<C, U, R>(api: &mut CompdocApi<SnapshotHost<C>, U>, input: R) -> Result<()>
where
    C: Clipboard,
    U: UiChannel,
    R: BufRead,
{
    for bytes in input.split(b'\n') {
        let line = match String::from_utf8(bytes?) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "skipping non-UTF-8 input line");
                continue;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "skipping invalid input line");
                continue;
            }
        };

        if value.get("event").is_some() {
            handle_event(api, value)?;
        } else {
            api.on_message(&value)?;
        }
    }
    tracing::debug!("session input closed");
    Ok(())
}

fn handle_event<C: Clipboard, U: UiChannel>(
    api: &mut CompdocApi<SnapshotHost<C>, U>,
    value: Value,
) -> Result<()> {
    let event: HostEvent = match serde_json::from_value(value) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, "skipping malformed host event");
            return Ok(());
        }
    };

    match event.event.as_str() {
        "selectionchange" => match api.host_mut().select(event.selection.as_slice()) {
            Ok(()) => api.on_selection_changed(),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring selection change");
                Ok(())
            }
        },
        other => {
            tracing::warn!(event = other, "ignoring unknown host event");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compdoc::commands::copy::CopyResult;
    use compdoc::config::CompdocConfig;
    use compdoc::host::memory::{RecordingChannel, RecordingClipboard};
    use compdoc::host::snapshot::Snapshot;
    use compdoc::host::Host;
    use compdoc::message::{MetadataPayload, OutboundMessage};
    use serde_json::json;

    type TestApi = CompdocApi<SnapshotHost<RecordingClipboard>, RecordingChannel>;

    fn api(clipboard: bool) -> TestApi {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "nodes": [
                { "id": "1", "name": "Button/Primary", "type": "COMPONENT" },
                { "id": "2", "name": "Frame", "type": "FRAME", "children": [] }
            ],
            "selection": ["1"]
        }))
        .unwrap();
        let mut host = SnapshotHost::from_snapshot(snapshot).unwrap();
        if clipboard {
            host = host.with_clipboard(RecordingClipboard::new());
        }
        CompdocApi::init(host, RecordingChannel::new(), CompdocConfig::default()).unwrap()
    }

    fn names(api: &TestApi) -> Vec<String> {
        api.ui()
            .messages
            .iter()
            .map(|m| match m {
                OutboundMessage::Metadata(MetadataPayload::Data { data }) => data.name.clone(),
                OutboundMessage::Metadata(MetadataPayload::Error { error }) => error.clone(),
                OutboundMessage::CopyResult(r) => r.message.clone(),
            })
            .collect()
    }

    #[test]
    fn routes_messages_and_events_in_order() {
        let mut api = api(true);
        let input = [
            r#"{"type":"request-metadata"}"#,
            "",
            r#"{"event":"selectionchange","selection":["2"]}"#,
            r##"{"type":"copy-guide","payload":"# Guide"}"##,
        ]
        .join("\n");
        run(&mut api, input.as_bytes()).unwrap();

        assert_eq!(
            names(&api),
            vec![
                "Button/Primary",
                "Button/Primary",
                "Component 또는 Component Set만 지원합니다.",
                "가이드를 복사했습니다.",
            ]
        );
    }

    #[test]
    fn invalid_lines_and_unknown_events_are_skipped() {
        let mut api = api(false);
        let input = [
            "not json",
            r#"{"event":"resize"}"#,
            r#"{"event":"selectionchange","selection":["404"]}"#,
            r#"{"type":"copy-guide","payload":"x"}"#,
        ]
        .join("\n");
        run(&mut api, input.as_bytes()).unwrap();

        assert_eq!(api.ui().messages.len(), 2);
        assert_eq!(
            api.ui().last(),
            Some(&OutboundMessage::CopyResult(CopyResult {
                success: false,
                message: "copyText API를 사용할 수 없습니다.".into()
            }))
        );
        assert_eq!(api.host().selection()[0].id, "1");
    }

    #[test]
    fn non_utf8_line_does_not_end_the_session() {
        let mut api = api(false);
        let mut input = b"\xff\xfe garbage\n".to_vec();
        input.extend_from_slice(br#"{"type":"request-metadata"}"#);
        input.extend_from_slice(b"\r\n");
        run(&mut api, input.as_slice()).unwrap();

        assert_eq!(names(&api), vec!["Button/Primary", "Button/Primary"]);
    }
}
