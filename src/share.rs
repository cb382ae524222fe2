//! ShareGPT transcript submission
//!
//! One-shot POST of a finished conversation to the public ShareGPT
//! service, then a browser navigation to the short viewer URL built
//! from the returned id.

use log::{debug, trace, error};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Fixed submission endpoint
pub const SHARE_GPT_API_URL: &str
  = "https://sharegpt.com/api/conversations";

/// Base of the short viewer URL
pub const SHARE_GPT_VIEW_URL: &str = "https://shareg.pt";

/// One transcript entry as ShareGPT expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareGptItem
{   /// "human" or "gpt"
    pub from: String
  , pub value: String
}

/// Sharable transcript, assembled by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareGptBody
{   #[serde(rename = "avatarUrl")]
    pub avatar_url: String
  , pub items: Vec<ShareGptItem>
}

#[derive(Debug, Deserialize)]
struct ShareGptResponse
{   id: String
}

/// Viewer URL for a submitted conversation id
pub fn share_url(id: &str) -> String
{   format!("{}/{}", SHARE_GPT_VIEW_URL, id)
}

/// Submit a transcript and open its viewer URL in the browser
///
/// Network and parse failures propagate; nothing is retried or
/// caught locally.
pub async fn submit_share_gpt(body: &ShareGptBody)
  -> Result<(), Error>
{   debug!(
      "Submitting transcript with {} items",
      body.items.len()
    );

    let response = reqwest::Client::new()
      .post(SHARE_GPT_API_URL)
      .header("Content-Type", "application/json")
      .json(body)
      .send()
      .await
      .map_err(|e| {
        error!("HTTP error: {}", e);
        Error::Http(e.to_string())
      })?;

    trace!("ShareGPT response status: {}", response.status());

    let parsed: ShareGptResponse
      = response.json().await.map_err(|e| {
        error!("Parse error: {}", e);
        Error::Parse(e.to_string())
      })?;

    let url = share_url(&parsed.id);
    debug!("Opening share URL: {}", url);

    webbrowser::open(&url).map_err(|e| {
      error!("Could not open browser: {}", e);
      Error::Browser(e.to_string())
    })
}
