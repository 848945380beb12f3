use std::io::Read;

use anyhow::{bail, Result};
use axum::http::HeaderMap;
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

use backend_domain::RuntimeConfig;

pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|v| v == *api_token)
            .unwrap_or(false);
    }
    true
}

/// Decodes a JSON body, gunzipping it first when `Content-Encoding: gzip` is set.
///
/// `limit` caps the decoded size, so a small compressed body cannot expand
/// past what the body limit allows for plain requests.
pub fn parse_json_body<T: DeserializeOwned>(
    headers: &HeaderMap,
    body: &[u8],
    limit: u64,
) -> Result<T> {
    let content = maybe_gunzip(headers, body, limit)?;
    Ok(serde_json::from_slice(&content)?)
}

fn maybe_gunzip(headers: &HeaderMap, body: &[u8], limit: u64) -> Result<Vec<u8>> {
    let gzipped = headers
        .get("Content-Encoding")
        .map(|encoding| encoding.to_str().unwrap_or("") == "gzip")
        .unwrap_or(false);
    if !gzipped {
        if body.len() as u64 > limit {
            bail!("body exceeds {} bytes", limit);
        }
        return Ok(body.to_vec());
    }
    let mut out = Vec::new();
    GzDecoder::new(body)
        .take(limit.saturating_add(1))
        .read_to_end(&mut out)?;
    if out.len() as u64 > limit {
        bail!("decoded body exceeds {} bytes", limit);
    }
    Ok(out)
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn config_with_token(token: Option<&str>) -> RuntimeConfig {
        RuntimeConfig {
            api_token: token.map(ToString::to_string),
            ..RuntimeConfig::default()
        }
    }

    #[test]
    fn open_when_no_token_configured() {
        assert!(authorize(&config_with_token(None), &HeaderMap::new()));
    }

    #[test]
    fn requires_matching_bearer_token() {
        let config = config_with_token(Some("secret"));
        let mut headers = HeaderMap::new();
        assert!(!authorize(&config, &headers));

        headers.insert("Authorization", HeaderValue::from_static("Bearer wrong"));
        assert!(!authorize(&config, &headers));

        headers.insert("Authorization", HeaderValue::from_static("Bearer secret"));
        assert!(authorize(&config, &headers));
    }

    #[test]
    fn decodes_gzip_bodies() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(br#"{"tag":"A1","reader":7}"#)
            .expect("compress body");
        let body = encoder.finish().expect("finish gzip");
        let mut headers = HeaderMap::new();
        headers.insert("Content-Encoding", HeaderValue::from_static("gzip"));

        let value: serde_json::Value =
            parse_json_body(&headers, &body, 1024).expect("decode body");
        assert_eq!(value["tag"], "A1");
        assert_eq!(value["reader"], 7);
    }

    #[test]
    fn rejects_gzip_bodies_that_expand_past_the_limit() {
        let payload = format!(r#"{{"tag":"{}","reader":7}}"#, "A".repeat(1 << 20));
        let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
        encoder
            .write_all(payload.as_bytes())
            .expect("compress body");
        let body = encoder.finish().expect("finish gzip");
        assert!(body.len() < 64 * 1024);
        let mut headers = HeaderMap::new();
        headers.insert("Content-Encoding", HeaderValue::from_static("gzip"));

        let err = parse_json_body::<serde_json::Value>(&headers, &body, 64 * 1024)
            .expect_err("oversized body");
        assert!(err.to_string().contains("exceeds 65536 bytes"));
    }

    #[test]
    fn rejects_plain_bodies_past_the_limit() {
        let err = parse_json_body::<serde_json::Value>(&HeaderMap::new(), br#"{"tag":"A1"}"#, 4)
            .expect_err("oversized body");
        assert!(err.to_string().contains("exceeds 4 bytes"));
    }
}
