use std::fmt;

use crate::request::ApiErrorBody;

/// Custom error type for chatwire operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// No API key was supplied for the request
    MissingApiKey
  , /// HTTP transport error
    Http(String)
  , /// The endpoint answered with an error object
    Api(ApiErrorBody)
  , /// The streaming request was refused by the endpoint
    StreamFailed
    {   status: u16
      , message: String
    }
  , /// Failed to parse a response body
    Parse(String)
  , /// The share viewer URL could not be opened
    Browser(String)
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey => {
              write!(f, "No API key supplied for request")
            }
          , Error::Http(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::Api(body) => {
              write!(f, "API error: {}", body.message)
            }
          , Error::StreamFailed { status, message } => {
              write!(f,
                "Failed to get chat completions ({}): {}",
                status,
                message
              )
            }
          , Error::Parse(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::Browser(msg) => {
              write!(f, "Failed to open share URL: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
