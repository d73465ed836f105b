use serde::{Deserialize, Serialize};

/// Envelope of `GET /?s=...`. OMDb reports failures in-band with
/// `"Response": "False"` and an `Error` message, still under HTTP 200.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<OmdbSearchItem>>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub item_type: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}
