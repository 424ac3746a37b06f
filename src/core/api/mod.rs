//! Client for the TVmaze public api

use serde::Deserialize;
use thiserror::Error;

pub mod series_searching;

const DEFAULT_API_ADDRESS: &str = "https://api.tvmaze.com";

/// Environment variable overriding the api base address, mainly for pointing
/// the tool at a TVmaze mirror or a local test server
pub const API_ADDRESS_ENV: &str = "SERIES_SEEK_API";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error during request")]
    Network(reqwest::Error),
    #[error("tvmaze api error when deserializing json: unexpected '{0}'")]
    Deserialization(String, serde_json::Error),
    #[error("errored json from tvmaze: name: '{0}', message: '{1}'")]
    BadJson(String, String),
}

#[derive(Debug, Deserialize, Clone)]
struct BadResponse {
    name: String,
    message: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Image {
    #[serde(rename = "original")]
    pub original_image_url: String,
    #[serde(rename = "medium")]
    pub medium_image_url: String,
}

fn api_address() -> String {
    std::env::var(API_ADDRESS_ENV).unwrap_or_else(|_| DEFAULT_API_ADDRESS.to_owned())
}

fn try_bad_json(json_string: &str) -> Option<(String, String)> {
    if let Ok(bad_response) = serde_json::from_str::<BadResponse>(json_string) {
        Some((bad_response.name, bad_response.message))
    } else {
        None
    }
}

pub fn deserialize_json<'a, T: serde::Deserialize<'a>>(
    prettified_json: &'a str,
) -> Result<T, ApiError> {
    serde_json::from_str::<T>(prettified_json).map_err(|err| {
        if let Some(data) = try_bad_json(prettified_json) {
            return ApiError::BadJson(data.0, data.1);
        }

        let line_number = err.line() - 1;

        let mut errored_line = String::new();
        prettified_json
            .lines()
            .skip(line_number)
            .take(1)
            .for_each(|line| errored_line = line.to_owned());
        ApiError::Deserialization(errored_line, err)
    })
}

/// Requests text response from the provided url, prettified so that
/// deserialization errors can quote the offending line
async fn get_pretty_json_from_url(url: String) -> Result<String, reqwest::Error> {
    let response = loop {
        match reqwest::get(&url).await {
            Ok(response) => break response,
            Err(err) => {
                if err.is_request() {
                    random_async_sleep().await;
                } else {
                    return Err(err);
                }
            }
        }
    };

    let text = response.text().await?;

    let prettified = match json::parse(&text) {
        Ok(value) => json::stringify_pretty(value, 1),
        // leave non-json responses alone, serde will report them properly
        Err(_) => text,
    };

    Ok(prettified)
}

/// Sleeps the current task asynchronously for up to roughly 0.2 seconds,
/// choosing a random value in between
async fn random_async_sleep() {
    let random_val = rand::random::<u64>() / 100_000_000_000_000_000;
    tokio::time::sleep(std::time::Duration::from_millis(random_val)).await;
}
