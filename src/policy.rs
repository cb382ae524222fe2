//! Per-model-family parameter policy
//!
//! Some model families reject parameters that the rest of the API
//! accepts. The family is looked up once from the model identifier
//! and owns the whole request preparation, so adding another family
//! means adding a variant here rather than another inline check in
//! the completion path.

use log::debug;

use crate::config::ChatConfig;
use crate::request::ChatCompletionRequest;
use crate::{ChatMessage, Role};

/// Model family a given identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily
{   /// OpenAI o1 reasoning models: no system messages, fixed
    /// sampling parameters, no max_tokens field
    O1
  , /// Everything else: parameters pass through verbatim
    Standard
}

impl ModelFamily
{   /// Look up the family for a model identifier
    pub fn of(model: &str) -> Self
    {   if model.contains("o1")
        {   ModelFamily::O1
        } else
        {   ModelFamily::Standard
        }
    }

    /// Build the wire request for this family
    ///
    /// The `stream` flag is owned by the calling operation, never
    /// by the policy.
    pub fn prepare(
      &self
    , messages: &[ChatMessage]
    , config: &ChatConfig
    , stream: bool
    ) -> ChatCompletionRequest
    {   match self
        {   ModelFamily::O1 => {
              debug!(
                "Applying o1 policy for model: {}",
                config.model
              );
              ChatCompletionRequest
              {   messages: messages
                    .iter()
                    .filter(|m| m.role != Role::System)
                    .cloned()
                    .collect()
                , model: config.model.clone()
                , stream
                  // o1 endpoints reject max_tokens; the field must
                  // be absent, not zero
                , max_tokens: None
                , temperature: 1.0
                , presence_penalty: 0.0
                , top_p: 1.0
                , frequency_penalty: 0.0
              }
            }
          , ModelFamily::Standard => {
              ChatCompletionRequest
              {   messages: messages.to_vec()
                , model: config.model.clone()
                , stream
                , max_tokens: Some(config.max_tokens)
                , temperature: config.temperature
                , presence_penalty: config.presence_penalty
                , top_p: config.top_p
                , frequency_penalty: config.frequency_penalty
              }
            }
        }
    }
}

/// Build the wire request for `config.model`'s family
pub fn prepare_request(
  messages: &[ChatMessage]
, config: &ChatConfig
, stream: bool
) -> ChatCompletionRequest
{   ModelFamily::of(&config.model)
      .prepare(messages, config, stream)
}
