/// Constants module to avoid magic numbers in the codebase

// Network Configuration
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Timeouts
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 120;

// UI Configuration
pub const UI_REFRESH_INTERVAL_MS: u64 = 50;
pub const UI_SCROLL_LINES: u16 = 3;
pub const UI_DEFAULT_VIEWPORT_HEIGHT: u16 = 20;

// Default Model Configuration
pub const DEFAULT_MODEL_NAME: &str = "learnlm-1.5-pro-experimental";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

// Fixed generation parameters shared by both deployed personas
pub const PERSONA_TEMPERATURE: f32 = 0.3;
pub const PERSONA_TOP_P: f32 = 0.95;
pub const PERSONA_TOP_K: u32 = 64;
pub const PERSONA_MAX_OUTPUT_TOKENS: u32 = 8192;
pub const PERSONA_RESPONSE_MIME_TYPE: &str = "text/plain";
