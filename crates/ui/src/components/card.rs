use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card {class}",
            div { class: "card-content", {children} }
        }
    }
}
