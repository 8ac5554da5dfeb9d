use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::json;

use postmock_core::error::PostmockError;
use postmock_core::transform::{build_request_body, extract_inline_image};

#[test]
fn test_request_body_carries_image_and_prompt() {
    let payload = [0xFFu8, 0xD8, 0xFF, 0xE0];
    let body = build_request_body(&payload, "image/jpeg");

    let parts = body
        .pointer("/contents/0/parts")
        .and_then(|p| p.as_array())
        .unwrap();
    assert_eq!(parts.len(), 2);

    let inline = &parts[0]["inline_data"];
    assert_eq!(inline["mime_type"], "image/jpeg");
    assert_eq!(inline["data"], BASE64.encode(payload));

    let prompt = parts[1]["text"].as_str().unwrap();
    assert!(prompt.contains("mosaic"));
}

#[test]
fn test_extract_inline_image_camel_case() {
    let pixels = vec![1u8, 2, 3, 4, 5];
    let response = json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": BASE64.encode(&pixels) } },
                ],
            },
        }],
    });

    assert_eq!(extract_inline_image(&response).unwrap(), pixels);
}

#[test]
fn test_extract_inline_image_snake_case() {
    let pixels = vec![9u8, 8, 7];
    let response = json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "inline_data": { "mime_type": "image/png", "data": BASE64.encode(&pixels) } },
                ],
            },
        }],
    });

    assert_eq!(extract_inline_image(&response).unwrap(), pixels);
}

#[test]
fn test_text_parts_are_skipped() {
    let pixels = vec![42u8; 16];
    let response = json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "text": "Here is your mosaic:" },
                    { "inlineData": { "data": BASE64.encode(&pixels) } },
                ],
            },
        }],
    });

    assert_eq!(extract_inline_image(&response).unwrap(), pixels);
}

#[test]
fn test_text_only_response_is_transform_failure() {
    // A JPEG payload sent up may still come back as prose; no substitution
    // must happen in that case.
    let response = json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "text": "I cannot process this image." },
                ],
            },
        }],
    });

    let err = extract_inline_image(&response).unwrap_err();
    assert!(matches!(err, PostmockError::RemoteTransform(_)));
}

#[test]
fn test_empty_response_is_transform_failure() {
    for response in [json!({}), json!({ "candidates": [] })] {
        let err = extract_inline_image(&response).unwrap_err();
        assert!(matches!(err, PostmockError::RemoteTransform(_)));
    }
}

#[test]
fn test_invalid_base64_payload_rejected() {
    let response = json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "inlineData": { "data": "!!! not base64 !!!" } },
                ],
            },
        }],
    });

    let err = extract_inline_image(&response).unwrap_err();
    assert!(matches!(err, PostmockError::RemoteTransform(_)));
}
