mod money_fmt;
mod progress_vm;
mod time_fmt;

pub use money_fmt::format_money;
pub use progress_vm::{CampaignSummaryVm, DashboardVm, DonorCardVm, map_dashboard};
pub use time_fmt::{format_date_range, format_epoch};
