use crate::core::{PassResult, PlayRecord};

/// Readable coverage name: underscores become spaces and the `ZONE`/`MAN`
/// family qualifier is dropped, e.g. `COVER_3_ZONE` -> `COVER 3`.
pub(crate) fn coverage_label(code: &str) -> String {
    let label = code
        .replace('_', " ")
        .replacen("ZONE", "", 1)
        .replacen("MAN", "", 1);
    let label = label.split_whitespace().collect::<Vec<_>>().join(" ");

    if label.is_empty() {
        code.to_string()
    } else {
        label
    }
}

/// Result shown on a list badge; plays without a result read as incomplete.
pub(crate) fn display_result(play: &PlayRecord) -> PassResult {
    play.pass_result.unwrap_or(PassResult::Incomplete)
}

pub(crate) fn result_class(result: PassResult) -> &'static str {
    match result {
        PassResult::Complete => "result-badge result-badge--complete",
        PassResult::Incomplete => "result-badge result-badge--incomplete",
        PassResult::Interception => "result-badge result-badge--interception",
    }
}

pub(crate) fn format_pass_length(length: Option<f64>) -> String {
    match length {
        Some(len) => format!("{} yds", len.round() as i64),
        None => "-- yds".to_string(),
    }
}
