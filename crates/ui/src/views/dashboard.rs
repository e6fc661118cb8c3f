use dioxus::prelude::*;

use crate::views::{CampaignPromotionView, DonorProgressView};

/// The page: promotion on top, donor progress below. The two are independent.
#[component]
pub fn DashboardView() -> Element {
    rsx! {
        div { class: "page dashboard",
            section { class: "dashboard-promo",
                CampaignPromotionView {}
            }
            section { class: "dashboard-progress",
                DonorProgressView {}
            }
        }
    }
}
