use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::Error;

/// Path of the overview endpoint, relative to the API base.
pub const OVERVIEW_PATH: &str = "/api/campaign/overview";

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080";

/// Third-party landing page for the campaign.
pub const DEFAULT_CAMPAIGN_URL: &str = "https://campaigns.donately.com/t005/landing?account_subdomain=chitauchapter&campaign_id=cmp_a603ffe4a07e";

//
// ─── PROMOTION ────────────────────────────────────────────────────────────────
//

/// How the external campaign page is presented. Only one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromoVariant {
    /// Full landing page embedded in an iframe.
    #[default]
    LandingPage,
    /// A single "Donate Now" call to action opening the page externally.
    DonateButton,
}

impl FromStr for PromoVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landing" | "landing-page" | "iframe" => Ok(Self::LandingPage),
            "donate" | "donate-now" | "button" => Ok(Self::DonateButton),
            _ => Err(Error::UnknownPromoVariant(s.to_string())),
        }
    }
}

impl fmt::Display for PromoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LandingPage => f.write_str("landing"),
            Self::DonateButton => f.write_str("donate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoConfig {
    pub campaign_url: Url,
    pub variant: PromoVariant,
}

impl PromoConfig {
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` if `campaign_url` is not an absolute http(s) URL.
    pub fn new(campaign_url: &str, variant: PromoVariant) -> Result<Self, Error> {
        Ok(Self {
            campaign_url: parse_http_url("campaign", campaign_url)?,
            variant,
        })
    }
}

//
// ─── DASHBOARD ────────────────────────────────────────────────────────────────
//

/// Resolved configuration for one run of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub overview_url: Url,
    pub promo: PromoConfig,
}

impl DashboardConfig {
    /// Joins [`OVERVIEW_PATH`] onto `api_base`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` if `api_base` is not an absolute http(s) URL.
    pub fn new(api_base: &str, promo: PromoConfig) -> Result<Self, Error> {
        let base = parse_http_url("api base", api_base)?;
        let overview_url = base.join(OVERVIEW_PATH).map_err(|err| Error::InvalidUrl {
            field: "api base",
            raw: api_base.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            overview_url,
            promo,
        })
    }
}

fn parse_http_url(field: &'static str, raw: &str) -> Result<Url, Error> {
    let invalid = |reason: String| Error::InvalidUrl {
        field,
        raw: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}
