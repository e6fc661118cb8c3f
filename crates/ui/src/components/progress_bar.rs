use dioxus::prelude::*;

/// Horizontal bar filled to `value` percent. Expects `0.0..=100.0`.
#[component]
pub fn ProgressBar(value: f64) -> Element {
    let width = value.clamp(0.0, 100.0);

    rsx! {
        div {
            class: "progress",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{width}",
            div { class: "progress-fill", style: "width: {width}%;" }
        }
    }
}
