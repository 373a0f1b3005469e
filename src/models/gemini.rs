use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::Model;
use super::types::{ChatTurn, GenerationSettings, Role};
use crate::constants::{GEMINI_BASE_URL, HTTP_REQUEST_TIMEOUT_SECS};
use crate::utils::RemoteServiceError;

/// Model client for the Gemini `generateContent` REST API.
///
/// Holds the fixed system persona and generation parameters for one
/// deployed variant. Every call transmits the entire supplied history;
/// the remote endpoint keeps no conversation state between calls.
pub struct GeminiModel {
    client: Client,
    api_key: String,
    model_name: String,
    system_instruction: String,
    settings: GenerationSettings,
}

impl GeminiModel {
    /// Create a new client for one persona variant.
    pub fn new(
        api_key: impl Into<String>,
        model_name: impl Into<String>,
        system_instruction: impl Into<String>,
        settings: GenerationSettings,
    ) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key: api_key.into(),
            model_name: model_name.into(),
            system_instruction: system_instruction.into(),
            settings,
        })
    }

    fn request_body(&self, history: &[ChatTurn]) -> GenerateContentRequest {
        let contents = history
            .iter()
            .map(|turn| Content {
                role: Some(match turn.role {
                    Role::User => "user".to_string(),
                    Role::Model => "model".to_string(),
                }),
                parts: turn
                    .parts
                    .iter()
                    .map(|text| Part { text: text.clone() })
                    .collect(),
            })
            .collect();

        GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: self.system_instruction.clone(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                top_p: self.settings.top_p,
                top_k: self.settings.top_k,
                max_output_tokens: self.settings.max_output_tokens,
                response_mime_type: self.settings.response_mime_type.clone(),
            },
            contents,
        }
    }
}

#[async_trait]
impl Model for GeminiModel {
    async fn generate(&self, history: &[ChatTurn]) -> Result<String, RemoteServiceError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_BASE_URL, self.model_name, self.api_key
        );
        let body = self.request_body(history);

        debug!("sending {} turns to {}", history.len(), self.model_name);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| RemoteServiceError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, &body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| RemoteServiceError::MalformedResponse(err.to_string()))?;

        extract_text(parsed)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, RemoteServiceError> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .map(|parts| {
            parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .filter(|text| !text.is_empty())
        .ok_or(RemoteServiceError::EmptyReply)
}

fn map_http_error(status: StatusCode, body: &str) -> RemoteServiceError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .ok()
        .and_then(|wrapper| wrapper.error.message)
        .unwrap_or_else(|| body.to_string());

    RemoteServiceError::Api {
        status: status.as_u16(),
        message,
    }
}

// Request structures for the generateContent endpoint

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    generation_config: GenerationConfig,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
    response_mime_type: String,
}

// Response structures

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_model() -> GeminiModel {
        GeminiModel::new(
            "test-key",
            "learnlm-1.5-pro-experimental",
            "Du bist ein Tutor.",
            GenerationSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_request_body_carries_full_history_in_order() {
        let model = test_model();
        let history = vec![
            ChatTurn::new(Role::User, "5+3"),
            ChatTurn::new(Role::Model, "Wie würdest du anfangen?"),
            ChatTurn::new(Role::User, "Mit Addition"),
        ];

        let body = serde_json::to_value(model.request_body(&history)).unwrap();

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "5+3");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "Mit Addition");
    }

    #[test]
    fn test_request_body_uses_camel_case_generation_config() {
        let model = test_model();
        let body = serde_json::to_value(model.request_body(&[])).unwrap();

        let config = &body["generationConfig"];
        assert!((config["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert!((config["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
        assert_eq!(config["topK"], 64);
        assert_eq!(config["maxOutputTokens"], 8192);
        assert_eq!(config["responseMimeType"], "text/plain");
    }

    #[test]
    fn test_request_body_includes_system_instruction() {
        let model = test_model();
        let body = serde_json::to_value(model.request_body(&[])).unwrap();

        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "Du bist ein Tutor."
        );
        // The system instruction carries no role tag
        assert!(body["systemInstruction"].get("role").is_none());
    }

    #[test]
    fn test_extract_text_joins_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Wie würdest du "},{"text":"diese beiden Zahlen zusammenzählen?"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(
            extract_text(response).unwrap(),
            "Wie würdest du diese beiden Zahlen zusammenzählen?"
        );
    }

    #[test]
    fn test_extract_text_fails_on_empty_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).unwrap();

        assert!(matches!(
            extract_text(response),
            Err(RemoteServiceError::EmptyReply)
        ));
    }

    #[test]
    fn test_map_http_error_parses_upstream_message() {
        let body = r#"{"error":{"code":429,"message":"quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body);

        assert_eq!(err.to_string(), "API error (429): quota exceeded");
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream unavailable");

        assert_eq!(err.to_string(), "API error (502): upstream unavailable");
    }
}
