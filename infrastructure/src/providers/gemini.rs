//! Google Gemini adapter for the [`TextGenerator`] port
//!
//! Calls `models/{model}:generateContent` with a JSON response schema so the
//! model answers with a single structured object.

use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use estate_application::ports::text_generator::{GenerationError, TextGenerator};
use estate_domain::OutputSchema;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

/// Gemini-backed text generator
pub struct GeminiTextGenerator {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiTextGenerator {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GenerationError::NotConfigured(
                "Gemini API key is required".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    /// Build from the `[providers.gemini]` section, resolving the key from
    /// the environment when it is not set inline
    pub fn from_config(config: &FileGeminiConfig, model: &str) -> Result<Self, GenerationError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            GenerationError::NotConfigured(format!(
                "no Gemini API key; set ${} or providers.gemini.api_key",
                config.api_key_env
            ))
        })?;
        Self::new(api_key, config.base_url.clone(), model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, prompt: &str, schema: &OutputSchema) -> Result<Value, GenerationError> {
        let body = GenerateContentRequest::new(prompt, schema);

        debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini request failed: {}", e);
                GenerationError::ConnectionError(e.to_string())
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GenerationError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            error!("Gemini API error ({}): {}", status, text);
            return Err(status_error(status, &text));
        }

        parse_response(&text)
    }
}

/// Map a non-success HTTP status onto the port's error kinds
fn status_error(status: StatusCode, body: &str) -> GenerationError {
    let detail = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| status.to_string());

    match status.as_u16() {
        401 | 403 => GenerationError::AuthenticationFailed(detail),
        429 => GenerationError::RateLimited,
        _ => GenerationError::RequestFailed(format!("{}: {}", status.as_u16(), detail)),
    }
}

/// Pull the structured object out of a `generateContent` response body
fn parse_response(body: &str) -> Result<Value, GenerationError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedResponse(format!("invalid envelope: {}", e)))?;

    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        return Err(GenerationError::RequestFailed(format!(
            "prompt blocked: {}",
            reason
        )));
    }

    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|c| c.parts.first())
        .and_then(|p| p.text.as_deref())
        .ok_or_else(|| GenerationError::MalformedResponse("no content in response".to_string()))?;

    let value: Value = serde_json::from_str(text)
        .map_err(|e| GenerationError::MalformedResponse(format!("candidate is not JSON: {}", e)))?;

    if !value.is_object() {
        return Err(GenerationError::MalformedResponse(
            "candidate is not a JSON object".to_string(),
        ));
    }
    Ok(value)
}

/// Gemini schemas spell types in upper case (`OBJECT`, `STRING`)
fn to_gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| {
                    let v = match (k.as_str(), v) {
                        ("type", Value::String(t)) => Value::String(t.to_uppercase()),
                        ("properties", Value::Object(props)) => Value::Object(
                            props
                                .iter()
                                .map(|(name, s)| (name.clone(), to_gemini_schema(s)))
                                .collect(),
                        ),
                        ("items", s) => to_gemini_schema(s),
                        _ => v.clone(),
                    };
                    (k.clone(), v)
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn new(prompt: &str, schema: &OutputSchema) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: to_gemini_schema(&schema.to_json_schema()),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_api_key_is_not_configured() {
        let result = GeminiTextGenerator::new("  ", "http://localhost", "gemini-2.5-flash");
        assert!(matches!(result, Err(GenerationError::NotConfigured(_))));
    }

    #[test]
    fn test_from_config_without_key() {
        let config = FileGeminiConfig {
            api_key_env: "ESTATE_TEST_DEFINITELY_UNSET_VAR".to_string(),
            ..Default::default()
        };
        let Err(GenerationError::NotConfigured(message)) =
            GeminiTextGenerator::from_config(&config, "gemini-2.5-flash")
        else {
            panic!("expected NotConfigured");
        };
        assert!(message.contains("ESTATE_TEST_DEFINITELY_UNSET_VAR"));
    }

    #[test]
    fn test_endpoint() {
        let generator =
            GeminiTextGenerator::new("key", "https://example.test/v1beta/", "gemini-2.5-flash")
                .unwrap();
        assert_eq!(
            generator.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(generator.name(), "gemini");
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest::new("Write copy", &OutputSchema::property_description());
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "Write copy");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        let schema = &value["generationConfig"]["responseSchema"];
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["propertyDescription"]["type"], "STRING");
        assert_eq!(schema["required"], json!(["propertyDescription"]));
    }

    #[test]
    fn test_parse_response_extracts_object() {
        let body = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "{\"propertyDescription\":\"Bright and airy.\"}" }]
                },
                "finishReason": "STOP"
            }]
        })
        .to_string();

        let value = parse_response(&body).unwrap();
        assert_eq!(value["propertyDescription"], "Bright and airy.");
    }

    #[test]
    fn test_parse_response_failures() {
        assert!(matches!(
            parse_response("not json"),
            Err(GenerationError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_response(r#"{"candidates": []}"#),
            Err(GenerationError::MalformedResponse(_))
        ));

        let prose = json!({
            "candidates": [{ "content": { "parts": [{ "text": "Just prose" }] } }]
        })
        .to_string();
        assert!(matches!(
            parse_response(&prose),
            Err(GenerationError::MalformedResponse(_))
        ));

        let array = json!({
            "candidates": [{ "content": { "parts": [{ "text": "[1, 2]" }] } }]
        })
        .to_string();
        assert!(matches!(
            parse_response(&array),
            Err(GenerationError::MalformedResponse(_))
        ));

        let blocked = json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();
        assert_eq!(
            parse_response(&blocked),
            Err(GenerationError::RequestFailed(
                "prompt blocked: SAFETY".to_string()
            ))
        );
    }

    #[test]
    fn test_status_mapping() {
        let body = r#"{"error": {"code": 403, "message": "API key not valid"}}"#;
        assert_eq!(
            status_error(StatusCode::FORBIDDEN, body),
            GenerationError::AuthenticationFailed("API key not valid".to_string())
        );
        assert_eq!(
            status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            GenerationError::RateLimited
        );
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "oops"),
            GenerationError::RequestFailed(msg) if msg.starts_with("500")
        ));
    }
}
