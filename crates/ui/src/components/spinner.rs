use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner",
            role: "status",
            "aria-busy": "true",
            "aria-label": "Loading",
        }
    }
}
