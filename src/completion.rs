//! Completion fetch and completion stream operations
//!
//! Both operations are single-shot: build one request, send it,
//! surface whatever comes back. Credentials are passed per call and
//! never stored; each call uses its own HTTP client.

use log::{debug, trace, error};

use crate::config::ChatConfig;
use crate::error::Error;
use crate::request::{
  ApiErrorEnvelope, ChatCompletionResponse
};
use crate::ChatMessage;

/// Resolve the caller-supplied credential before any network I/O
fn require_api_key(api_key: Option<&str>)
  -> Result<&str, Error>
{   match api_key
    {   Some(key) if !key.is_empty() => Ok(key)
      , _ => {
          error!("No API key supplied");
          Err(Error::MissingApiKey)
        }
    }
}

fn completions_url(endpoint: &str) -> String
{   format!(
      "{}/chat/completions",
      endpoint.trim_end_matches('/')
    )
}

/// Send a full message list and return one parsed response
///
/// Always sends `stream: false`. A non-success status surfaces the
/// endpoint's embedded error object verbatim; there is no retry.
pub async fn get_chat_completion(
  endpoint: &str
, messages: &[ChatMessage]
, config: &ChatConfig
, api_key: Option<&str>
) -> Result<ChatCompletionResponse, Error>
{   debug!(
      "get_chat_completion for model: {}",
      config.model
    );
    let api_key = require_api_key(api_key)?;

    let request
      = crate::policy::prepare_request(
          messages,
          config,
          false
        );
    trace!("Completion request: {:?}", request);

    let response = reqwest::Client::new()
      .post(completions_url(endpoint))
      .header("Authorization", format!("Bearer {}", api_key))
      .header("Content-Type", "application/json")
      .json(&request)
      .send()
      .await
      .map_err(|e| {
        error!("HTTP error: {}", e);
        Error::Http(e.to_string())
      })?;

    let status = response.status();
    trace!("Completion response status: {}", status);

    if !status.is_success()
    {   let body = response.text().await
          .unwrap_or_default();
        error!("Completion API error: {}", body);
        let envelope: ApiErrorEnvelope
          = serde_json::from_str(&body)
            .map_err(|e| Error::Parse(e.to_string()))?;
        return Err(Error::Api(envelope.error));
    }

    response
      .json::<ChatCompletionResponse>()
      .await
      .map_err(|e| {
        error!("Parse error: {}", e);
        Error::Parse(e.to_string())
      })
}

/// Send a full message list and return the live response handle
///
/// Always sends `stream: true`. The caller owns the handle and reads
/// it incrementally, e.g. with [`reqwest::Response::chunk`].
pub async fn get_chat_completion_stream(
  endpoint: &str
, messages: &[ChatMessage]
, config: &ChatConfig
, api_key: Option<&str>
) -> Result<reqwest::Response, Error>
{   debug!(
      "get_chat_completion_stream for model: {}",
      config.model
    );
    let api_key = require_api_key(api_key)?;

    let request
      = crate::policy::prepare_request(
          messages,
          config,
          true
        );
    trace!("Stream request: {:?}", request);

    let response = reqwest::Client::new()
      .post(completions_url(endpoint))
      .header("Authorization", format!("Bearer {}", api_key))
      .header("Content-Type", "application/json")
      .json(&request)
      .send()
      .await
      .map_err(|e| {
        error!("HTTP error: {}", e);
        Error::Http(e.to_string())
      })?;

    let status = response.status();
    trace!("Stream response status: {}", status);

    if !status.is_success()
    {   let body = response.text().await
          .unwrap_or_default();
        // Prefer the embedded error message, fall back to the raw
        // body, which may be empty
        let message
          = serde_json::from_str::<ApiErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);
        error!(
          "Stream refused ({}): {}",
          status,
          message
        );
        return Err(Error::StreamFailed
        {   status: status.as_u16()
          , message
        });
    }

    Ok(response)
}
