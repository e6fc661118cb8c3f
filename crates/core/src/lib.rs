#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod load;
pub mod model;
pub mod progress;

pub use config::{DashboardConfig, PromoConfig, PromoVariant};
pub use error::Error;
pub use load::LoadState;
pub use progress::{CampaignProgress, DerivedMetrics, DonorProgress, Percent, derive_metrics};
