use ariadne::{Color, Label, Report, ReportKind, Source};
use webcalc::WebcalcError;

const SOURCE_ID: &str = "<input>";

/// Format a WebcalcError with fancy terminal output using Ariadne
pub fn format_error(error: &WebcalcError) -> String {
    match error {
        WebcalcError::Parse(details) => {
            let mut output = Vec::new();

            let (start, end) =
                char_range(&details.source_text, details.span.start, details.span.end);

            let mut report = Report::build(ReportKind::Error, SOURCE_ID, start)
                .with_message(format!(
                    "Parse error: {} (line {}, column {})",
                    details.message, details.span.line, details.span.col
                ))
                .with_label(
                    Label::new((SOURCE_ID, start..end))
                        .with_message("")
                        .with_color(Color::Red),
                );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report.finish().write(
                (SOURCE_ID, Source::from(details.source_text.as_ref())),
                &mut output,
            ) {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => {
                    // Fallback to simple format
                    format!("{}", error)
                }
            }
        }
        WebcalcError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        other => format!("Error: {}", other),
    }
}

/// Ariadne labels count characters, spans count bytes
fn char_range(source: &str, start: usize, end: usize) -> (usize, usize) {
    let to_chars = |offset: usize| {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        source[..offset].chars().count()
    };

    let start = to_chars(start);
    (start, to_chars(end).max(start))
}
