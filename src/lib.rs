pub mod error;
pub mod config;
pub mod request;
pub mod policy;
pub mod completion;
pub mod share;
use serde::{Deserialize, Serialize};

/*

chatwire is a thin async adapter between a chat frontend and an
OpenAI-compatible chat-completions endpoint, plus a one-shot
submission of a finished conversation to ShareGPT.

Three independent operations, nothing shared between them:

chatwire/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports, core message types
│   ├── error.rs        # Custom error types and handling
│   ├── config.rs       # Sampling configuration per request
│   ├── request.rs      # Wire request/response types
│   ├── policy.rs       # Per-model-family parameter policy
│   ├── completion.rs   # Completion fetch + completion stream
│   └── share.rs        # ShareGPT transcript submission
└── tests/              # Integration and unit tests

*/

/// CHATWIRE API SURFACE:

pub use crate::error::Error;
pub use crate::config::ChatConfig;
pub use crate::request::{
  ChatCompletionRequest, ChatCompletionResponse
};
pub use crate::policy::ModelFamily;
pub use crate::completion::{
  get_chat_completion, get_chat_completion_stream
};
pub use crate::share::{
  submit_share_gpt, share_url, ShareGptBody, ShareGptItem
};

/// CHATWIRE STRUCTURES:

/// Role of a single message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role
{   /// Behavior instructions injected before the conversation
    System
  , /// Messages written by the end user
    User
  , /// Messages produced by the model
    Assistant
}

/// A single message in an ordered conversation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatMessage
{   pub role: Role
  , pub content: String
}

impl ChatMessage
{   /// Convenience constructor
    pub fn new(role: Role, content: impl Into<String>) -> Self
    {   ChatMessage
        {   role
          , content: content.into()
        }
    }
}
