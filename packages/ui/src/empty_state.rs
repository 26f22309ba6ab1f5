use dioxus::prelude::*;

/// Placeholder shown when the board has no notices.
#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div {
            class: "empty-state",
            p { "No notices yet. Be the first to post one!" }
        }
    }
}
