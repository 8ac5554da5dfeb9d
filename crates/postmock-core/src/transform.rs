use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{json, Value};

use crate::error::{PostmockError, Result};

/// Instruction sent with every restyle request.
const MOSAIC_PROMPT: &str = "Transform this image into a beautiful physical mosaic wall \
art piece. The result should look like it is made of thousands of small, glossy, artistic \
tiles or stones. Maintain the original composition and colors but apply a distinct mosaic \
texture suitable for high-end home decor. Output only the transformed image.";

/// Environment variable holding the service credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const MODEL: &str = "gemini-2.5-flash-image";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the generative restyle service. One request per user action,
/// no retries, no streaming.
pub struct TransformClient {
    http: reqwest::blocking::Client,
    api_key: String,
    endpoint: String,
}

impl TransformClient {
    /// Build a client from the environment. Constructed fresh before each
    /// call so the current environment is always used.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| PostmockError::RemoteTransform(format!("{API_KEY_VAR} is not set")))?;
        Ok(Self {
            http: reqwest::blocking::Client::new(),
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a different API base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Send the photo for mosaic restyling and return the transformed image
    /// bytes. Fails if the call errors or the response carries no image.
    pub fn transform_to_mosaic(&self, image: &[u8], mime: &str) -> Result<Vec<u8>> {
        let url = format!("{}/models/{MODEL}:generateContent", self.endpoint);
        tracing::info!(mime, bytes = image.len(), "requesting mosaic transform");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request_body(image, mime))
            .send()
            .map_err(|e| PostmockError::RemoteTransform(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PostmockError::RemoteTransform(format!(
                "service returned {status}"
            )));
        }

        let body: Value = response
            .json()
            .map_err(|e| PostmockError::RemoteTransform(format!("unreadable response: {e}")))?;
        extract_inline_image(&body)
    }
}

/// Request payload: the image inline, then the fixed instruction.
pub fn build_request_body(image: &[u8], mime: &str) -> Value {
    json!({
        "contents": [{
            "parts": [
                { "inline_data": { "mime_type": mime, "data": BASE64.encode(image) } },
                { "text": MOSAIC_PROMPT },
            ],
        }],
    })
}

/// Scan the response candidates for the first inline image part and decode
/// it. A response without one is a transform failure.
pub fn extract_inline_image(response: &Value) -> Result<Vec<u8>> {
    let parts = response
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array);

    if let Some(parts) = parts {
        for part in parts {
            // The REST API responds in camelCase; accept snake_case too.
            let data = part
                .get("inlineData")
                .or_else(|| part.get("inline_data"))
                .and_then(|inline| inline.get("data"))
                .and_then(Value::as_str);
            if let Some(data) = data {
                return BASE64.decode(data).map_err(|e| {
                    PostmockError::RemoteTransform(format!("invalid image payload: {e}"))
                });
            }
        }
    }

    Err(PostmockError::RemoteTransform(
        "no image in response".into(),
    ))
}
