//! Sampling configuration passed with every completion request

use serde::{Deserialize, Serialize};

/// Per-request chat configuration
///
/// All values are forwarded verbatim to the endpoint unless the
/// model-family policy overrides them (see [`crate::policy`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig
{   /// Model identifier, e.g. "gpt-3.5-turbo"
    pub model: String
  , /// Max tokens the model may generate
    pub max_tokens: usize
  , /// Temperature for sampling
    pub temperature: f32
  , /// Presence penalty
    pub presence_penalty: f32
  , /// Nucleus sampling cutoff
    pub top_p: f32
  , /// Frequency penalty
    pub frequency_penalty: f32
}

impl Default for ChatConfig
{   fn default() -> Self
    {   ChatConfig
        {   model: "gpt-3.5-turbo".to_string()
          , max_tokens: 4000
          , temperature: 1.0
          , presence_penalty: 0.0
          , top_p: 1.0
          , frequency_penalty: 0.0
        }
    }
}
