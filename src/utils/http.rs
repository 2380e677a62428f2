use crate::fetcher::retry::FetchError;
use futures::StreamExt;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

/// Total per-request timeout, covering connect and body streaming.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    "AssetFetch"
}

/// Build the HTTP client shared by every download in a run.
pub fn client() -> reqwest::Result<Client> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

/// GET `url` and stream the response body into `dest`, chunk by chunk.
///
/// A non-2xx status is an error. A partial file left behind by a
/// mid-stream failure is removed before returning.
pub async fn download_to_file(client: &Client, url: &str, dest: &Path) -> Result<(), FetchError> {
    let response = client
        .get(url)
        .header("User-Agent", get_user_agent())
        .send()
        .await
        .map_err(FetchError::Request)?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    match stream_body(response, dest).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = tokio::fs::remove_file(dest).await;
            Err(e)
        }
    }
}

async fn stream_body(response: reqwest::Response, dest: &Path) -> Result<(), FetchError> {
    let mut file = tokio::fs::File::create(dest).await.map_err(FetchError::Io)?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Request)?;
        file.write_all(&chunk).await.map_err(FetchError::Io)?;
    }
    file.flush().await.map_err(FetchError::Io)?;
    Ok(())
}
