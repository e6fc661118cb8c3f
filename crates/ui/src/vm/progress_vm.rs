use std::collections::HashMap;

use campaign_core::model::{CampaignOverview, PersonId};
use campaign_core::{CampaignProgress, DonorProgress, derive_metrics};

use crate::vm::money_fmt::format_money;
use crate::vm::time_fmt::{format_date_range, format_epoch};

#[derive(Clone, Debug, PartialEq)]
pub struct CampaignSummaryVm {
    pub title: String,
    pub raised_str: String,
    pub goal_str: String,
    pub percent_label: String,
    /// Unrounded, for the bar.
    pub percent_value: f64,
    pub date_range_str: Option<String>,
    pub updated_str: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonorCardVm {
    /// Person id, suffixed with `-N` for the N-th repeat of the same person.
    pub key: String,
    pub name: String,
    pub amount_str: String,
    pub percent_label: String,
    pub percent_value: f64,
    pub goal_met: bool,
}

impl From<&DonorProgress> for DonorCardVm {
    fn from(donor: &DonorProgress) -> Self {
        Self {
            key: donor.person_id.to_string(),
            name: donor.name.clone(),
            amount_str: format!(
                "{} / {}",
                format_money(donor.combined),
                format_money(donor.pledge)
            ),
            percent_label: format!("{}%", donor.percent.rounded()),
            percent_value: donor.percent.value(),
            goal_met: donor.goal_met,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    pub campaign: CampaignSummaryVm,
    /// "N of M donors met their pledge".
    pub goals_met_str: String,
    pub donors: Vec<DonorCardVm>,
}

fn map_campaign(overview: &CampaignOverview, progress: &CampaignProgress) -> CampaignSummaryVm {
    CampaignSummaryVm {
        title: overview.title.clone(),
        raised_str: format_money(progress.raised),
        goal_str: format_money(progress.goal),
        percent_label: format!("{}%", progress.percent.rounded()),
        percent_value: progress.percent.value(),
        date_range_str: format_date_range(
            overview.start_date.as_deref(),
            overview.end_date.as_deref(),
        ),
        updated_str: format_epoch(overview.updated),
    }
}

/// Derives metrics for the snapshot and shapes them for rendering.
#[must_use]
pub fn map_dashboard(overview: &CampaignOverview) -> DashboardVm {
    let metrics = derive_metrics(overview);

    let mut seen: HashMap<&PersonId, usize> = HashMap::new();
    let donors = metrics
        .donors
        .iter()
        .map(|donor| {
            let mut card = DonorCardVm::from(donor);
            let repeats = seen.entry(&donor.person_id).or_default();
            if *repeats > 0 {
                card.key = format!("{}-{repeats}", card.key);
            }
            *repeats += 1;
            card
        })
        .collect();

    DashboardVm {
        campaign: map_campaign(overview, &metrics.campaign),
        goals_met_str: format!(
            "{} of {} donors met their pledge",
            metrics.goals_met(),
            metrics.donors.len()
        ),
        donors,
    }
}
