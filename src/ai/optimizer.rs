use uuid::Uuid;

use crate::ai::catalog;
use crate::ai::client::TextGenerator;
use crate::ai::schema;
use crate::core::model::{OptimizationResult, Platform};
use crate::core::normalize;
use crate::error::OptimizeError;

/// Executes one optimization request end-to-end: prompt lookup, a single
/// upstream call, response normalization.
///
/// Holds no state between calls, so overlapping calls are independent. It
/// does not track request identity across calls; a caller that wants
/// latest-wins semantics pairs this with `core::session::RequestTracker`.
pub struct Optimizer<C: TextGenerator> {
    client: C,
}

impl<C: TextGenerator> Optimizer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// One request, one upstream call, no retry and no internal timeout.
    /// Assumes `raw_input` is non-empty; the caller validates before
    /// invoking.
    pub async fn optimize(
        &self,
        platform: Platform,
        raw_input: &str,
    ) -> Result<OptimizationResult, OptimizeError> {
        let request_id = Uuid::new_v4();
        log::info!("[{request_id}] optimizing for {}", platform.name());

        let spec = catalog::prompt_spec(platform);
        let user_message = spec.user_message(raw_input);
        let response_schema =
            schema::response_schema(platform).map_err(|_| OptimizeError::Unknown)?;

        let raw = match self
            .client
            .generate(spec.system_instruction, &user_message, Some(response_schema))
            .await
        {
            Ok(text) => text,
            Err(e) => {
                log::warn!("[{request_id}] upstream call failed: {e}");
                return Err(e);
            }
        };

        let mut result = normalize::parse_optimization(&raw)?;

        // Tags belong to the YouTube contract only; drop them if the model
        // volunteers them elsewhere.
        if platform != Platform::YouTube {
            result.tags = None;
        }

        log::info!(
            "[{request_id}] {} guidelines, {} suggestions",
            result.guidelines.len(),
            result.suggestions.len()
        );

        Ok(result)
    }
}
