use dioxus::prelude::*;

#[component]
pub fn Badge(#[props(into)] label: String) -> Element {
    rsx! {
        span { class: "badge", "{label}" }
    }
}
