//! Wire request and response types for the chat-completions endpoint

use serde::{Deserialize, Serialize};

use crate::ChatMessage;

/// Body POSTed to `<endpoint>/chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest
{   pub messages: Vec<ChatMessage>
  , pub model: String
  , pub stream: bool
  , /// Absent from the JSON when the policy suppresses it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>
  , pub temperature: f32
  , pub presence_penalty: f32
  , pub top_p: f32
  , pub frequency_penalty: f32
}

/// Parsed non-streaming completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse
{   #[serde(default)]
    pub id: Option<String>
  , pub choices: Vec<Choice>
  , #[serde(default)]
    pub usage: Option<Usage>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage
{   pub prompt_tokens: usize
  , pub completion_tokens: usize
  , pub total_tokens: usize
}

/// Error envelope wrapping the endpoint's error object
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope
{   pub error: ApiErrorBody
}

/// The error object embedded in a non-success response
///
/// Surfaced verbatim through [`crate::error::Error::Api`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiErrorBody
{   pub message: String
  , #[serde(default, rename = "type")]
    pub kind: Option<String>
  , #[serde(default)]
    pub code: Option<String>
}
