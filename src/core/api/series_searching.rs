use super::{deserialize_json, get_pretty_json_from_url, ApiError, Image};

use serde::Deserialize;

// The series name goes in the `q` query parameter
const SERIES_SEARCH_PATH: &str = "/search/shows";

#[derive(Debug, Deserialize, Clone)]
pub struct SeriesSearchResult {
    pub show: Show,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Show {
    pub id: u32,
    pub name: String,
    pub premiered: Option<String>,
    pub genres: Vec<String>,
    pub image: Option<Image>,
}

impl Show {
    /// Premiere year, when the api supplies a premiere date
    pub fn premiere_year(&self) -> Option<&str> {
        self.premiered.as_deref().and_then(|date| date.split('-').next())
    }
}

/// Searches TVmaze for shows matching the given name, returning an empty
/// collection when nothing matches
pub async fn search_series(series_name: &str) -> Result<Vec<SeriesSearchResult>, ApiError> {
    let url = format!("{}{}?q={}", super::api_address(), SERIES_SEARCH_PATH, series_name);

    let prettified_json = get_pretty_json_from_url(url)
        .await
        .map_err(ApiError::Network)?;

    deserialize_json(&prettified_json)
}
