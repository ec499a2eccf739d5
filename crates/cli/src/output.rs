use blurcheck_core::pipeline::process_result::ProcessResult;

/// Pretty-printed JSON array, one object per result.
pub fn render_json(results: &[ProcessResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// One block per result, each preceded by a blank line.
pub fn render_text(results: &[ProcessResult]) -> String {
    results
        .iter()
        .map(|result| format!("\n{}", render_entry(result)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_entry(result: &ProcessResult) -> String {
    match result {
        ProcessResult::Failed { path, error } => format!("Error processing {path}: {error}"),
        ProcessResult::Scored(report) => {
            let status = if report.metrics.is_blurry {
                "BLURRY"
            } else {
                "SHARP"
            };
            format!(
                "Image: {}\nStatus: {status}\nBlur Percentage: {:.1}%\nTechnical Score: {:.2}",
                report.path, report.metrics.blur_percentage, report.metrics.score
            )
        }
    }
}
