use std::borrow::Cow;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client configuration for the reverse geocoding service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint base, without the `/reverse` path.
    pub base_url: Cow<'static, str>,
    /// Sent on every request; the public Nominatim usage policy requires
    /// an identifying agent.
    pub user_agent: Cow<'static, str>,
    /// Preferred language for place names, as an `accept-language` value.
    pub language: Cow<'static, str>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed("https://nominatim.openstreetmap.org"),
            user_agent: Cow::Borrowed(DEFAULT_USER_AGENT),
            language: Cow::Borrowed("en"),
            timeout: Duration::from_secs(10),
        }
    }
}
