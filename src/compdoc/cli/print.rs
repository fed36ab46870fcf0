use colored::Colorize;
use compdoc::commands::copy::CopyResult;
use compdoc::config::UiConfig;
use compdoc::error::Result;
use compdoc::host::UiChannel;
use compdoc::message::{MetadataPayload, OutboundMessage};
use compdoc::record::{ComponentMetadata, Direction, FillSummary, TextStyleEntry};
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: usize = 14;
const EMPTY: &str = "-";

/// Panel channel that prints each message as a human-readable summary.
pub(super) struct SummaryChannel;

impl UiChannel for SummaryChannel {
    fn open(&mut self, _ui: &UiConfig) -> Result<()> {
        Ok(())
    }

    fn post_message(&mut self, message: &OutboundMessage) -> Result<()> {
        println!("{}", format_message(message));
        Ok(())
    }
}

pub(super) fn format_message(message: &OutboundMessage) -> String {
    match message {
        OutboundMessage::Metadata(MetadataPayload::Data { data }) => format_metadata(data),
        OutboundMessage::Metadata(MetadataPayload::Error { error }) => {
            error.yellow().to_string()
        }
        OutboundMessage::CopyResult(result) => format_copy_result(result),
    }
}

fn format_copy_result(result: &CopyResult) -> String {
    if result.success {
        result.message.green().to_string()
    } else {
        result.message.red().to_string()
    }
}

fn format_metadata(metadata: &ComponentMetadata) -> String {
    let mut lines = vec![format!(
        "{} {}",
        metadata.name.bold(),
        format!("({})", metadata.semantic_role).dimmed()
    )];

    lines.push(field("Description", &metadata.description));

    lines.push(field("Variants", &count_or_empty(metadata.variants.len())));
    let names: Vec<&str> = metadata.variants.iter().map(|v| v.name.as_str()).collect();
    let name_width = column_width(&names);
    for variant in &metadata.variants {
        let props: Vec<String> = variant
            .properties
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect();
        lines.push(format!(
            "    {}  {}",
            pad(&variant.name, name_width),
            props.join(", ").dimmed()
        ));
    }

    let layout = match &metadata.auto_layout {
        Some(layout) => {
            let direction = match layout.direction {
                Direction::Horizontal => "Horizontal",
                Direction::Vertical => "Vertical",
            };
            let p = &layout.padding;
            format!(
                "{}, spacing {}, padding {}/{}/{}/{}, {}",
                direction, layout.spacing, p.top, p.right, p.bottom, p.left, layout.alignment
            )
        }
        None => EMPTY.to_string(),
    };
    lines.push(field("Auto layout", &layout));

    lines.push(field("Fills", &count_or_empty(metadata.fills.len())));
    for fill in &metadata.fills {
        lines.push(format!("    {}", format_fill(fill)));
    }

    lines.push(field("Text styles", &count_or_empty(metadata.text_styles.len())));
    for style in &metadata.text_styles {
        lines.push(format!("    {}", format_text_style(style)));
    }

    lines.push(field(
        "Subcomponents",
        &count_or_empty(metadata.subcomponents.len()),
    ));
    let roles: Vec<&str> = metadata
        .subcomponents
        .iter()
        .map(|s| s.role.as_str())
        .collect();
    let role_width = column_width(&roles);
    let types: Vec<&str> = metadata
        .subcomponents
        .iter()
        .map(|s| s.node_type.as_str())
        .collect();
    let type_width = column_width(&types);
    for sub in &metadata.subcomponents {
        lines.push(format!(
            "    {}  {}  {}",
            pad(&sub.role, role_width),
            pad(&sub.node_type, type_width).cyan(),
            sub.description.dimmed()
        ));
    }

    lines.join("\n")
}

fn format_fill(fill: &FillSummary) -> String {
    let mut parts = vec![fill.kind.clone()];
    if let Some(color) = &fill.color {
        parts.push(color.clone());
    }
    if fill.opacity < 1.0 {
        parts.push(format!("opacity {}", fill.opacity));
    }
    if fill.visible == Some(false) {
        parts.push("hidden".to_string());
    }
    let summary = parts.join(" ");
    match &fill.token {
        Some(token) => format!("{}  {}", summary, token.magenta()),
        None => summary,
    }
}

fn format_text_style(style: &TextStyleEntry) -> String {
    let size = style
        .font_size
        .map(|s| format!("{}px", s))
        .unwrap_or_else(|| EMPTY.to_string());
    let line_height = style
        .line_height
        .as_ref()
        .map(|l| l.to_string())
        .unwrap_or_else(|| EMPTY.to_string());
    let token = style.token.as_deref().unwrap_or(EMPTY);
    format!("{} / {}  {}", size, line_height, token.magenta())
}

fn field(label: &str, value: &str) -> String {
    format!("  {}{}", pad(label, LABEL_WIDTH).bold(), value)
}

fn count_or_empty(count: usize) -> String {
    if count == 0 {
        EMPTY.to_string()
    } else {
        count.to_string()
    }
}

fn column_width(cells: &[&str]) -> usize {
    cells.iter().map(|c| c.width()).max().unwrap_or(0)
}

/// Pad to `width` terminal columns. Wide glyphs count double.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use compdoc::record::{LineHeightLabel, SubcomponentDescriptor};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn pad_counts_display_columns() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("라벨", 6), "라벨  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn error_payload_prints_the_message() {
        plain();
        let message = OutboundMessage::Metadata(MetadataPayload::Error {
            error: "컴포넌트를 선택해 주세요.".into(),
        });
        assert_eq!(format_message(&message), "컴포넌트를 선택해 주세요.");
    }

    #[test]
    fn metadata_summary_aligns_subcomponent_columns() {
        plain();
        let metadata = ComponentMetadata {
            name: "Button/Primary".into(),
            semantic_role: "Primary".into(),
            variants: vec![],
            auto_layout: None,
            fills: vec![],
            text_styles: vec![TextStyleEntry {
                token: Some("Label/Medium".into()),
                font_size: Some(14.0),
                line_height: Some(LineHeightLabel::Auto),
            }],
            description: "(정보 없음)".into(),
            subcomponents: vec![
                SubcomponentDescriptor {
                    role: "라벨".into(),
                    node_type: "TEXT".into(),
                    description: "텍스트 노드, 글자 수: 3".into(),
                },
                SubcomponentDescriptor {
                    role: "Icon".into(),
                    node_type: "INSTANCE".into(),
                    description: "Instance of Icon/Cart".into(),
                },
            ],
            usage_notes: vec![],
        };

        let text = format_message(&OutboundMessage::Metadata(MetadataPayload::Data {
            data: Box::new(metadata),
        }));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Button/Primary (Primary)");
        assert!(text.contains("Auto layout   -"));
        assert!(text.contains("14px / AUTO  Label/Medium"));
        assert!(lines.contains(&"    라벨  TEXT      텍스트 노드, 글자 수: 3"));
        assert!(lines.contains(&"    Icon  INSTANCE  Instance of Icon/Cart"));
    }

    #[test]
    fn copy_result_prints_message() {
        plain();
        let message = OutboundMessage::CopyResult(CopyResult {
            success: false,
            message: "복사에 실패했습니다.".into(),
        });
        assert_eq!(format_message(&message), "복사에 실패했습니다.");
    }
}
