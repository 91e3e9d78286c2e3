use crate::constants::{STATIONS_ENDPOINT, STATIONS_QUERY_PARAM};
use crate::error::LookupError;
use reqwest::Url;
use std::future::Future;
use std::pin::Pin;

/// Pending station name lookup
pub type LookupFuture = Pin<Box<dyn Future<Output = Result<Vec<String>, LookupError>>>>;

/// Source of station names for a typed query
pub trait StationSource {
    /// Look up station names matching `query`, one lookup per call
    fn search(&self, query: &str) -> LookupFuture;
}

/// Client for the station name search endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationLookup {
    endpoint: String,
}

impl Default for StationLookup {
    fn default() -> Self {
        Self::new(STATIONS_ENDPOINT)
    }
}

impl StationLookup {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Lookup URL for `query`, resolved against the page `origin`
    ///
    /// # Errors
    ///
    /// Returns an error if `origin` or the endpoint is not a valid URL.
    pub fn url(&self, origin: &str, query: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(origin)
            .and_then(|base| base.join(&self.endpoint))
            .map_err(|e| LookupError::Url(e.to_string()))?;
        url.query_pairs_mut().append_pair(STATIONS_QUERY_PARAM, query);
        Ok(url)
    }

    /// Fetch station names matching `query`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The page origin is unavailable
    /// - The HTTP request fails
    /// - The response status is not ok
    /// - The response body is not a JSON array of strings
    pub async fn fetch(&self, query: &str) -> Result<Vec<String>, LookupError> {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .ok_or_else(|| LookupError::Url("page origin unavailable".to_string()))?;

        let response = reqwest::get(self.url(&origin, query)?).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        Ok(response.json::<Vec<String>>().await?)
    }
}

impl StationSource for StationLookup {
    fn search(&self, query: &str) -> LookupFuture {
        let lookup = self.clone();
        let query = query.to_string();
        Box::pin(async move { lookup.fetch(&query).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_uses_default_endpoint() {
        let url = StationLookup::default()
            .url("http://127.0.0.1:5000", "Gdynia")
            .expect("valid url");
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/stations?name=Gdynia");
    }

    #[test]
    fn test_url_percent_encodes_query() {
        let url = StationLookup::default()
            .url("https://bilety.example.pl", "Kraków Gł&x=1")
            .expect("valid url");
        assert_eq!(url.path(), "/stations");
        assert_eq!(url.query(), Some("name=Krak%C3%B3w+G%C5%82%26x%3D1"));

        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1, "Kraków Gł&x=1");
    }

    #[test]
    fn test_url_with_custom_endpoint() {
        let url = StationLookup::new("/api/v2/stations")
            .url("http://localhost:8080/trains", "Poz")
            .expect("valid url");
        assert_eq!(url.as_str(), "http://localhost:8080/api/v2/stations?name=Poz");
    }

    #[test]
    fn test_url_rejects_bad_origin() {
        let result = StationLookup::default().url("not a url", "Gdańsk");
        assert!(matches!(result, Err(LookupError::Url(_))));
    }
}
