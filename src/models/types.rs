use serde::{Deserialize, Serialize};

use crate::constants::{
    PERSONA_MAX_OUTPUT_TOKENS, PERSONA_RESPONSE_MIME_TYPE, PERSONA_TEMPERATURE, PERSONA_TOP_K,
    PERSONA_TOP_P,
};

/// Role tag of a model-facing turn, matching the remote API's
/// vocabulary ("user" / "model").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One model-facing turn. `parts` mirrors the wire format's parts
/// array; this client always sends a single text segment per turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub parts: Vec<String>,
}

impl ChatTurn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![text.into()],
        }
    }
}

/// Fixed sampling parameters for a deployed persona variant.
/// Set once at startup and never mutated; safely shared read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: PERSONA_TEMPERATURE,
            top_p: PERSONA_TOP_P,
            top_k: PERSONA_TOP_K,
            max_output_tokens: PERSONA_MAX_OUTPUT_TOKENS,
            response_mime_type: PERSONA_RESPONSE_MIME_TYPE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
        assert_eq!(serde_json::to_value(Role::Model).unwrap(), "model");
    }

    #[test]
    fn test_chat_turn_wraps_text_in_single_part() {
        let turn = ChatTurn::new(Role::User, "5+3");
        assert_eq!(turn.parts, vec!["5+3".to_string()]);
    }

    #[test]
    fn test_default_generation_settings() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.temperature, 0.3);
        assert_eq!(settings.top_p, 0.95);
        assert_eq!(settings.top_k, 64);
        assert_eq!(settings.max_output_tokens, 8192);
        assert_eq!(settings.response_mime_type, "text/plain");
    }
}
