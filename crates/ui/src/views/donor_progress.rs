use campaign_core::LoadState;
use dioxus::prelude::*;
use services::CancellationToken;

use crate::components::{Badge, Card, ProgressBar, Spinner};
use crate::context::AppContext;
use crate::views::load_state_from_resource;
use crate::vm::{CampaignSummaryVm, DashboardVm, DonorCardVm, map_dashboard};

/// Render-ready state of the progress view. `Loaded(None)` means the endpoint
/// reported no campaign.
pub type ProgressViewState = LoadState<Option<DashboardVm>>;

/// Fetches the campaign overview once per mount and renders its progress.
#[component]
pub fn DonorProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let loader = ctx.overview_loader();

    // Cancelled when this view unmounts, so a late response is never committed.
    let cancel = use_hook(CancellationToken::new);
    use_drop({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let resource = use_resource(move || {
        let loader = loader.clone();
        let cancel = cancel.clone();
        async move { loader.activate(&cancel).await }
    });

    let state = load_state_from_resource(resource)
        .map(|payload| payload.as_ref().map(map_dashboard));

    rsx! {
        DonorProgressPanel { state }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DonorProgressPanelProps {
    pub state: ProgressViewState,
}

/// Pure projection of [`ProgressViewState`] to markup.
#[component]
pub fn DonorProgressPanel(props: DonorProgressPanelProps) -> Element {
    match props.state {
        LoadState::Loading => rsx! {
            Spinner {}
        },
        LoadState::Failed(message) => rsx! {
            div { class: "error", "Error: {message}" }
        },
        LoadState::Loaded(None) => rsx! {
            div { class: "empty", "No Campaign Info" }
        },
        LoadState::Loaded(Some(dashboard)) => rsx! {
            div { class: "progress-page",
                h1 { "Campaign Progress" }
                CampaignSummaryCard { summary: dashboard.campaign.clone() }

                h2 { "Donor Progress" }
                p { class: "goals-summary", "{dashboard.goals_met_str}" }
                div { class: "donor-list",
                    for donor in dashboard.donors.iter() {
                        DonorCard { key: "{donor.key}", donor: donor.clone() }
                    }
                }
            }
        },
    }
}

#[component]
fn CampaignSummaryCard(summary: CampaignSummaryVm) -> Element {
    rsx! {
        Card { class: "campaign-summary",
            p { class: "campaign-title", "{summary.title}" }
            if let Some(range) = summary.date_range_str.as_ref() {
                p { class: "campaign-dates", "{range}" }
            }
            div { class: "summary-row",
                span { "Total Raised: {summary.raised_str} / {summary.goal_str}" }
                span { class: "percent", "{summary.percent_label}" }
            }
            ProgressBar { value: summary.percent_value }
            if let Some(updated) = summary.updated_str.as_ref() {
                p { class: "campaign-updated", "Updated {updated}" }
            }
        }
    }
}

#[component]
fn DonorCard(donor: DonorCardVm) -> Element {
    let class = if donor.goal_met {
        "donor-card goal-met"
    } else {
        "donor-card"
    };

    rsx! {
        Card { class: class,
            div { class: "donor-header",
                h3 { class: "donor-name", "{donor.name}" }
                if donor.goal_met {
                    Badge { label: "Goal Met" }
                }
            }
            div { class: "donor-row",
                span { "{donor.amount_str}" }
                span { class: "percent", "{donor.percent_label}" }
            }
            ProgressBar { value: donor.percent_value }
        }
    }
}
