//! JSON-RPC 2.0 request/response envelopes

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;
use crate::utils::helper::truncate_string;

const BODY_PREVIEW_LEN: usize = 120;

#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: P,
    pub id: u64,
}

impl<'a, P: Serialize> JsonRpcRequest<'a, P> {
    pub fn new(method: &'a str, params: P, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcErrorObject {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
}

/// Decode a response body into the expected `result` type.
///
/// An embedded `error` wins over any `result`; a body that is not an
/// envelope, a missing `result` and a `result` of the wrong shape are all
/// malformed.
pub fn decode_response<R: DeserializeOwned>(body: &str) -> Result<R, FetchError> {
    let response: JsonRpcResponse = serde_json::from_str(body).map_err(|e| {
        FetchError::MalformedResponse(format!(
            "not a JSON-RPC response ({}): {}",
            e,
            truncate_string(body, BODY_PREVIEW_LEN)
        ))
    })?;

    if let Some(error) = response.error {
        return Err(FetchError::RemoteApplication {
            code: error.code,
            message: error.message.unwrap_or_else(|| "unknown remote error".to_string()),
        });
    }

    match response.result {
        None | Some(Value::Null) => Err(FetchError::MalformedResponse("missing result".to_string())),
        Some(result) => serde_json::from_value(result)
            .map_err(|e| FetchError::MalformedResponse(format!("unexpected result shape: {}", e))),
    }
}
