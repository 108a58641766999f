//! Search command presentation: numbered text listing and JSON record.

use crate::cli::presentation::shared::{bold, dim, dim_italic, to_pretty_json, yellow};
use crate::error::ApiError;
use crate::models::{SearchResponse, SearchResult};
use serde_json::json;

/// Render at most `num` results followed by the summary footer.
pub fn format_search_result_text(response: &SearchResponse, num: usize) -> String {
    if response.results.is_empty() {
        return yellow("No results found.");
    }

    let shown: Vec<&SearchResult> = response.results.iter().take(num).collect();
    let mut output = String::new();
    for (i, result) in shown.iter().enumerate() {
        output.push_str(&format!("\n{}\n", bold(&format!("{}. {}", i + 1, result.title))));
        output.push_str(&format!("   {}\n", dim(&result.url)));
        if !result.content.is_empty() {
            output.push_str(&format!("   {}\n", result.content));
        }
        let meta = result_metadata(result);
        if !meta.is_empty() {
            output.push_str(&format!("   {}\n", dim_italic(&meta)));
        }
    }

    output.push_str(&format!(
        "\n{}",
        dim(&format!(
            "Showing {} of {} results",
            shown.len(),
            response.number_of_results
        ))
    ));

    if !response.suggestions.is_empty() {
        output.push_str(&format!(
            "\n{}",
            dim(&format!("Suggestions: {}", response.suggestions.join(", ")))
        ));
    }
    if !response.corrections.is_empty() {
        output.push_str(&format!(
            "\n{}",
            dim(&format!("Corrections: {}", response.corrections.join(", ")))
        ));
    }
    if !response.unresponsive_engines.is_empty() {
        let names: Vec<&str> = response
            .unresponsive_engines
            .iter()
            .map(|e| e.engine.as_str())
            .collect();
        output.push_str(&format!(
            "\n{}",
            yellow(&format!("Unresponsive engines: {}", names.join(", ")))
        ));
    }
    output
}

/// `engines: ... | category: ... | score: ... | date: ...`, skipping empty parts.
fn result_metadata(result: &SearchResult) -> String {
    let engines = if result.engines.is_empty() {
        result.engine.clone()
    } else {
        result.engines.join(", ")
    };

    let mut parts = Vec::new();
    if !engines.is_empty() {
        parts.push(format!("engines: {}", engines));
    }
    if !result.category.is_empty() {
        parts.push(format!("category: {}", result.category));
    }
    if result.score != 0.0 {
        parts.push(format!("score: {:.1}", result.score));
    }
    if !result.published_date.is_empty() {
        parts.push(format!("date: {}", result.published_date));
    }
    parts.join(" | ")
}

/// Structured record for `--json`.
pub fn format_search_result_json(response: &SearchResponse) -> Result<String, ApiError> {
    let results: Vec<_> = response
        .results
        .iter()
        .map(|r| {
            json!({
                "title": r.title,
                "url": r.url,
                "content": r.content,
                "engine": r.engine,
                "engines": r.engines,
                "category": r.category,
                "score": r.score,
                "published_date": r.published_date,
                "thumbnail": r.thumbnail,
            })
        })
        .collect();
    let out = json!({
        "query": response.query,
        "number_of_results": response.number_of_results,
        "results": results,
        "suggestions": response.suggestions,
        "corrections": response.corrections,
    });
    to_pretty_json(&out)
}
