use crate::core::model::OptimizationResult;
use crate::error::OptimizeError;

/// Strips a markdown code fence (```json ... ``` or ``` ... ```) that models
/// sometimes wrap around structured output. Unfenced text passes through
/// trimmed.
pub fn strip_json_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.trim_start();
    match rest.strip_suffix("```") {
        Some(inner) => inner.trim(),
        None => rest.trim_end(),
    }
}

/// Parses raw model output into a typed result. Anything that is not the
/// required structure fails with `InvalidResponseFormat`; partially valid
/// replies are never salvaged.
pub fn parse_optimization(raw: &str) -> Result<OptimizationResult, OptimizeError> {
    let body = strip_json_fence(raw);
    let result: OptimizationResult = serde_json::from_str(body).map_err(|e| {
        log::warn!("model reply rejected: {e}");
        OptimizeError::InvalidResponseFormat
    })?;

    // Suggestions must carry real text in both fields.
    let malformed = result
        .suggestions
        .iter()
        .any(|s| s.content.trim().is_empty() || s.reason.trim().is_empty());
    if malformed {
        log::warn!("model reply rejected: empty suggestion field");
        return Err(OptimizeError::InvalidResponseFormat);
    }

    Ok(result)
}
