use campaign_core::PromoVariant;
use dioxus::prelude::*;

use crate::context::AppContext;

/// Static promotion of the external campaign page. Renders immediately.
#[component]
pub fn CampaignPromotionView() -> Element {
    let ctx = use_context::<AppContext>();
    let promo = ctx.promo();
    let url = promo.campaign_url.to_string();

    match promo.variant {
        PromoVariant::LandingPage => rsx! { CampaignLandingPage { url } },
        PromoVariant::DonateButton => rsx! { DonateNow { url } },
    }
}

#[component]
fn CampaignLandingPage(url: String) -> Element {
    rsx! {
        div { class: "promo promo-landing",
            iframe {
                class: "landing-frame",
                src: "{url}",
                title: "Campaign Landing Page",
                style: "border: none;",
            }
        }
    }
}

#[component]
fn DonateNow(url: String) -> Element {
    let ctx = use_context::<AppContext>();
    let opener = ctx.link_opener();
    let href = url.clone();

    rsx! {
        div { class: "promo promo-donate",
            a {
                class: "donate-now",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                // The webview would navigate in place; hand the link to the OS instead.
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    opener.open_url(&url);
                },
                "Donate Now"
            }
        }
    }
}
