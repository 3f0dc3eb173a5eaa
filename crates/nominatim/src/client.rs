use reqwest::header::USER_AGENT;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::place::Place;

/// The `ReverseGeocode` trait defines the place lookup behaviour for a
/// coordinate pair.
pub trait ReverseGeocode: Send + Sync {
    /// Looks up the place covering the given coordinates, `None` when the
    /// service has no answer for them.
    fn reverse(
        &self, latitude: f64, longitude: f64,
    ) -> impl Future<Output = Result<Option<Place>>> + Send;
}

/// Reverse geocoding client for a Nominatim-style HTTP endpoint.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn reverse_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/reverse?format=jsonv2&lat={latitude}&lon={longitude}&accept-language={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.config.language),
        )
    }
}

impl ReverseGeocode for Client {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<Place>> {
        let url = self.reverse_url(latitude, longitude);

        let response =
            self.http.get(&url).header(USER_AGENT, self.config.user_agent.as_ref()).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Reverse geocode request rejected");
            return Ok(None);
        }

        let place = response.json::<Place>().await?;
        if place.display_name.is_empty() {
            debug!(lat = latitude, lon = longitude, "No place for coordinates");
            return Ok(None);
        }

        Ok(Some(place))
    }
}
