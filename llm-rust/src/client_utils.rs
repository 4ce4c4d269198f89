use crate::LanguageModelError;
use reqwest::{header::HeaderMap, Client};
use serde::{de::DeserializeOwned, Serialize};

/// POST `data` as JSON to `url` and decode the JSON reply.
/// Any non-2xx status becomes [`LanguageModelError::StatusCode`] with the
/// response body attached.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: HeaderMap,
) -> Result<R, LanguageModelError> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, url, "completion endpoint returned an error status");
        return Err(LanguageModelError::StatusCode(status, body));
    }
    Ok(response.json::<R>().await?)
}
