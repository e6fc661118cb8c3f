#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod overview_loader;
pub mod overview_source;

pub use app_services::AppServices;
pub use error::{AppServicesError, FetchError};
pub use overview_loader::{OverviewLoader, OverviewState};
pub use overview_source::{HttpOverviewSource, OverviewPayload, OverviewSource};

pub use tokio_util::sync::CancellationToken;
