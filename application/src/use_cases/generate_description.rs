//! Generate Description use case
//!
//! Turns structured property facts into marketing copy:
//!
//! 1. Validate the [`DescriptionRequest`] (per-field errors on failure)
//! 2. Render the copywriter prompt with [`PromptTemplate`]
//! 3. Dispatch it to the [`TextGenerator`] under the
//!    [`OutputSchema::property_description`] contract, bounded by a timeout
//!    and an optional [`CancellationToken`]
//! 4. Return the `propertyDescription` field verbatim
//!
//! No retries, caching or rate limiting happen here. Each call is
//! independent, so one use case instance can serve concurrent requests.

use crate::config::GenerationParams;
use crate::ports::progress::{GenerationProgress, NoProgress};
use crate::ports::text_generator::{GenerationError, TextGenerator};
use estate_domain::{
    DescriptionRequest, GeneratedDescription, OutputSchema, PROPERTY_DESCRIPTION_FIELD,
    PromptTemplate, RequestPhase, ValidatedRequest, ValidationErrors,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while generating a description.
///
/// `Invalid` means the caller must fix its input; `Service` means the
/// backend failed and the same input may be resubmitted later.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateDescriptionError {
    #[error("{0}")]
    Invalid(ValidationErrors),

    #[error("Service error: {0}")]
    Service(#[from] GenerationError),
}

impl GenerateDescriptionError {
    pub fn is_validation(&self) -> bool {
        matches!(self, GenerateDescriptionError::Invalid(_))
    }

    /// Per-field messages, when this is a validation failure
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            GenerateDescriptionError::Invalid(errors) => Some(errors),
            GenerateDescriptionError::Service(_) => None,
        }
    }
}

/// Use case for generating a property description
pub struct GenerateDescriptionUseCase {
    generator: Arc<dyn TextGenerator>,
    params: GenerationParams,
    cancellation_token: Option<CancellationToken>,
}

impl Clone for GenerateDescriptionUseCase {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
            params: self.params.clone(),
            cancellation_token: self.cancellation_token.clone(),
        }
    }
}

impl GenerateDescriptionUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            params: GenerationParams::default(),
            cancellation_token: None,
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Set a cancellation token; cancelling it abandons the outbound call
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Validate only, without touching the backend
    pub fn validate(request: DescriptionRequest) -> Result<ValidatedRequest, ValidationErrors> {
        request.validate()
    }

    /// The exact prompt that would be sent for `request`
    pub fn build_prompt(request: &ValidatedRequest) -> String {
        PromptTemplate::property_description(request)
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        request: DescriptionRequest,
    ) -> Result<GeneratedDescription, GenerateDescriptionError> {
        self.execute_with_progress(request, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: DescriptionRequest,
        progress: &dyn GenerationProgress,
    ) -> Result<GeneratedDescription, GenerateDescriptionError> {
        progress.on_phase(RequestPhase::Received);
        progress.on_phase(RequestPhase::Validating);

        let validated = match request.validate() {
            Ok(v) => v,
            Err(errors) => {
                debug!(fields = errors.len(), "Description request rejected");
                progress.on_phase(RequestPhase::Invalid);
                return Err(GenerateDescriptionError::Invalid(errors));
            }
        };

        info!(location = validated.location(), "Generating description");

        progress.on_phase(RequestPhase::Dispatching);
        progress.on_dispatch(self.generator.name());

        match self.generate(&validated).await {
            Ok(description) => {
                progress.on_phase(RequestPhase::Generated);
                Ok(description)
            }
            Err(e) => {
                warn!(backend = self.generator.name(), "Description generation failed: {}", e);
                progress.on_phase(RequestPhase::ServiceFailed);
                Err(GenerateDescriptionError::Service(e))
            }
        }
    }

    /// Dispatch an already validated request
    pub async fn generate(
        &self,
        request: &ValidatedRequest,
    ) -> Result<GeneratedDescription, GenerationError> {
        let prompt = Self::build_prompt(request);
        let schema = OutputSchema::property_description();
        let started = Instant::now();

        let result = self.complete_bounded(&prompt, &schema).await?;

        let text = schema
            .extract(&result, PROPERTY_DESCRIPTION_FIELD)
            .ok_or_else(|| {
                GenerationError::MalformedResponse(format!(
                    "missing or empty `{}` field",
                    PROPERTY_DESCRIPTION_FIELD
                ))
            })?;

        info!(
            backend = self.generator.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            chars = text.len(),
            "Description generated"
        );

        Ok(GeneratedDescription::new(text))
    }

    /// One backend call, raced against the timeout and the cancellation token
    async fn complete_bounded(
        &self,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<serde_json::Value, GenerationError> {
        if let Some(token) = &self.cancellation_token
            && token.is_cancelled()
        {
            return Err(GenerationError::Cancelled);
        }

        let timeout = self.params.timeout;
        let call = tokio::time::timeout(timeout, self.generator.complete(prompt, schema));

        let outcome = if let Some(ref token) = self.cancellation_token {
            tokio::select! {
                biased;
                _ = token.cancelled() => return Err(GenerationError::Cancelled),
                outcome = call => outcome,
            }
        } else {
            call.await
        };

        outcome.map_err(|_| GenerationError::Timeout(timeout))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Generator that replays a fixed outcome and records every prompt
    struct ScriptedGenerator {
        outcome: Result<Value, GenerationError>,
        delay: Option<Duration>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn ok(value: Value) -> Self {
            Self {
                outcome: Ok(value),
                delay: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: GenerationError) -> Self {
            Self {
                outcome: Err(error),
                delay: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                outcome: Ok(json!({ "propertyDescription": "late" })),
                delay: Some(delay),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            prompt: &str,
            _schema: &OutputSchema,
        ) -> Result<Value, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.outcome.clone()
        }
    }

    /// Records every phase it is told about
    #[derive(Default)]
    struct RecordingProgress {
        phases: Mutex<Vec<RequestPhase>>,
    }

    impl GenerationProgress for RecordingProgress {
        fn on_phase(&self, phase: RequestPhase) {
            self.phases.lock().unwrap().push(phase);
        }
    }

    impl RecordingProgress {
        fn phases(&self) -> Vec<RequestPhase> {
            self.phases.lock().unwrap().clone()
        }
    }

    fn valid_request() -> DescriptionRequest {
        DescriptionRequest::new("3 bed, 2 bath, pool", "Austin, TX")
    }

    #[tokio::test]
    async fn test_generated_text_is_passed_through_verbatim() {
        let text = "  A sun-drenched retreat.\n\nInquire today!  ";
        let generator = Arc::new(ScriptedGenerator::ok(json!({ "propertyDescription": text })));
        let use_case = GenerateDescriptionUseCase::new(generator.clone());

        let result = use_case.execute(valid_request()).await.unwrap();
        assert_eq!(result.as_str(), text);
        assert_eq!(generator.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_backend() {
        let generator = Arc::new(ScriptedGenerator::ok(json!({ "propertyDescription": "x" })));
        let use_case = GenerateDescriptionUseCase::new(generator.clone());

        let err = use_case
            .execute(DescriptionRequest::new("", "X"))
            .await
            .unwrap_err();

        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("propertyFeatures"));
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_prompt_omits_absent_optional_sections() {
        let generator = Arc::new(ScriptedGenerator::ok(json!({ "propertyDescription": "x" })));
        let use_case = GenerateDescriptionUseCase::new(generator.clone());

        use_case.execute(valid_request()).await.unwrap();

        let prompt = &generator.prompts()[0];
        assert!(prompt.contains("Property Features: 3 bed, 2 bath, pool"));
        assert!(!prompt.contains("Proximity to Parks"));
        assert!(!prompt.contains("Neighborhood Quality"));
    }

    #[tokio::test]
    async fn test_prompt_includes_present_optional_sections() {
        let generator = Arc::new(ScriptedGenerator::ok(json!({ "propertyDescription": "x" })));
        let use_case = GenerateDescriptionUseCase::new(generator.clone());

        let request = valid_request()
            .with_proximity_to_parks("across the street")
            .with_neighborhood_quality("top-rated schools");
        use_case.execute(request).await.unwrap();

        let prompt = &generator.prompts()[0];
        assert!(prompt.contains("Proximity to Parks: across the street"));
        assert!(prompt.contains("Neighborhood Quality: top-rated schools"));
    }

    #[tokio::test]
    async fn test_backend_failure_is_service_error() {
        let generator = Arc::new(ScriptedGenerator::failing(GenerationError::ConnectionError(
            "refused".to_string(),
        )));
        let use_case = GenerateDescriptionUseCase::new(generator);

        let err = use_case.execute(valid_request()).await.unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(
            err,
            GenerateDescriptionError::Service(GenerationError::ConnectionError(
                "refused".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_malformed_response() {
        let generator = Arc::new(ScriptedGenerator::ok(json!({ "text": "wrong field" })));
        let use_case = GenerateDescriptionUseCase::new(generator);

        let err = use_case.execute(valid_request()).await.unwrap_err();
        assert!(matches!(
            err,
            GenerateDescriptionError::Service(GenerationError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_description_is_malformed_response() {
        let generator = Arc::new(ScriptedGenerator::ok(json!({ "propertyDescription": "" })));
        let use_case = GenerateDescriptionUseCase::new(generator);

        let err = use_case.execute(valid_request()).await.unwrap_err();
        assert!(matches!(
            err,
            GenerateDescriptionError::Service(GenerationError::MalformedResponse(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_backend_times_out() {
        let generator = Arc::new(ScriptedGenerator::slow(Duration::from_secs(120)));
        let use_case = GenerateDescriptionUseCase::new(generator)
            .with_params(GenerationParams::default().with_timeout(Duration::from_secs(5)));

        let err = use_case.execute(valid_request()).await.unwrap_err();
        assert_eq!(
            err,
            GenerateDescriptionError::Service(GenerationError::Timeout(Duration::from_secs(5)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_sub_second_timeout_keeps_precision() {
        let generator = Arc::new(ScriptedGenerator::slow(Duration::from_secs(2)));
        let use_case = GenerateDescriptionUseCase::new(generator)
            .with_params(GenerationParams::default().with_timeout(Duration::from_millis(250)));

        let err = use_case.execute(valid_request()).await.unwrap_err();
        assert_eq!(
            err,
            GenerateDescriptionError::Service(GenerationError::Timeout(Duration::from_millis(250)))
        );
        assert!(err.to_string().contains("250ms"));
    }

    #[tokio::test]
    async fn test_cancelled_token_stops_dispatch() {
        let generator = Arc::new(ScriptedGenerator::ok(json!({ "propertyDescription": "x" })));
        let token = CancellationToken::new();
        token.cancel();
        let use_case = GenerateDescriptionUseCase::new(generator.clone()).with_cancellation(token);

        let err = use_case.execute(valid_request()).await.unwrap_err();
        assert_eq!(err, GenerateDescriptionError::Service(GenerationError::Cancelled));
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_call() {
        let generator = Arc::new(ScriptedGenerator::slow(Duration::from_secs(20)));
        let token = CancellationToken::new();
        let use_case = GenerateDescriptionUseCase::new(generator).with_cancellation(token.clone());

        let handle = tokio::spawn(async move { use_case.execute(valid_request()).await });
        tokio::time::sleep(Duration::from_secs(1)).await;
        token.cancel();

        let err = handle.await.unwrap().unwrap_err();
        assert_eq!(err, GenerateDescriptionError::Service(GenerationError::Cancelled));
    }

    #[tokio::test]
    async fn test_phases_for_success() {
        let generator = Arc::new(ScriptedGenerator::ok(json!({ "propertyDescription": "x" })));
        let use_case = GenerateDescriptionUseCase::new(generator);
        let progress = RecordingProgress::default();

        use_case
            .execute_with_progress(valid_request(), &progress)
            .await
            .unwrap();

        let phases = progress.phases();
        assert_eq!(
            phases,
            vec![
                RequestPhase::Received,
                RequestPhase::Validating,
                RequestPhase::Dispatching,
                RequestPhase::Generated
            ]
        );
        for pair in phases.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]));
        }
    }

    #[tokio::test]
    async fn test_phases_for_invalid_and_failed() {
        let progress = RecordingProgress::default();
        let use_case = GenerateDescriptionUseCase::new(Arc::new(ScriptedGenerator::failing(
            GenerationError::RateLimited,
        )));

        let _ = use_case
            .execute_with_progress(DescriptionRequest::default(), &progress)
            .await;
        assert_eq!(progress.phases().last(), Some(&RequestPhase::Invalid));

        let progress = RecordingProgress::default();
        let _ = use_case
            .execute_with_progress(valid_request(), &progress)
            .await;
        assert_eq!(progress.phases().last(), Some(&RequestPhase::ServiceFailed));
    }

    #[tokio::test]
    async fn test_concurrent_requests_are_independent() {
        let generator = Arc::new(ScriptedGenerator::ok(json!({ "propertyDescription": "ok" })));
        let use_case = GenerateDescriptionUseCase::new(generator.clone());

        let requests = (0..8).map(|i| {
            let use_case = use_case.clone();
            async move {
                use_case
                    .execute(DescriptionRequest::new(format!("feature {}", i), "Town"))
                    .await
            }
        });
        let results = futures::future::join_all(requests).await;

        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(generator.prompts().len(), 8);
    }
}
