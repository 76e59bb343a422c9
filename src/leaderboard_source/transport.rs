use reqwest::blocking::Client;
use reqwest::blocking::Request;

use crate::error::Result;

/// Issues a prepared request and returns the response body.
///
/// Timeouts, headers and any retry policy belong to the implementation.
pub trait Transport {
  /// # Errors
  ///
  /// `Error::Transport` when the request can't be sent, the status isn't a
  /// success or the body can't be read.
  fn fetch(&self, request: Request) -> Result<String>;
}

impl Transport for Client {
  fn fetch(&self, request: Request) -> Result<String> {
    // SEE: https://docs.rs/reqwest/0.11.13/reqwest/blocking/struct.Client.html#method.execute
    let response = self.execute(request)?.error_for_status()?;
    Ok(response.text()?)
  }
}

/// A client configured the way the provider's own site talks to it.
///
/// # Errors
///
/// `Error::Transport` when the TLS backend can't be initialized.
pub fn default_client() -> Result<Client> {
  use std::time::Duration;

  use reqwest::header::HeaderMap;
  use reqwest::header::HeaderValue;

  const TIMEOUT: Duration = Duration::from_secs(30);

  // SEE: https://docs.rs/reqwest/0.11.13/reqwest/header/struct.HeaderMap.html
  let mut headers = HeaderMap::new();
  headers.insert("Accept", HeaderValue::from_static("application/json"));
  headers.insert(
    "Accept-Language",
    HeaderValue::from_static("en-US,en;q=0.5"),
  );
  headers.insert(
    "Origin",
    HeaderValue::from_static("https://www.pgatour.com"),
  );

  // SEE: https://docs.rs/reqwest/0.11.13/reqwest/blocking/struct.ClientBuilder.html
  let client = Client::builder()
    .user_agent(concat!(
      env!("CARGO_PKG_NAME"),
      "/",
      env!("CARGO_PKG_VERSION"),
    ))
    .timeout(TIMEOUT)
    .gzip(true)
    .deflate(true)
    .brotli(true)
    .default_headers(headers)
    .build()?;

  Ok(client)
}
