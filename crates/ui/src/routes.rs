use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::DashboardView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "Donor Dashboard" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
