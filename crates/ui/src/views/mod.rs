mod dashboard;
mod donor_progress;
mod promotion;
mod state;

pub use dashboard::DashboardView;
pub use donor_progress::{DonorProgressPanel, DonorProgressPanelProps, DonorProgressView, ProgressViewState};
pub use promotion::CampaignPromotionView;
pub use state::load_state_from_resource;

#[cfg(test)]
mod view_smoke;
