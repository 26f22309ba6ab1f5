use dioxus::prelude::*;

use board::NoticeDraft;

/// Inline form for posting a new notice.
#[component]
pub fn NoticeForm(on_submit: EventHandler<NoticeDraft>, on_cancel: EventHandler<()>) -> Element {
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);

    let handle_submit = move |_| {
        let title = title().trim().to_string();
        let content = content().trim().to_string();
        if title.is_empty() || content.is_empty() {
            return;
        }
        on_submit.call(NoticeDraft { title, content });
    };

    rsx! {
        div {
            class: "notice-form",
            id: "notice-form",
            h3 { "Post a Notice" }
            div {
                class: "form-field",
                label { r#for: "notice-title", "Title" }
                input {
                    id: "notice-title",
                    r#type: "text",
                    placeholder: "What's happening?",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { r#for: "notice-content", "Content" }
                textarea {
                    id: "notice-content",
                    rows: "4",
                    value: content(),
                    oninput: move |evt: FormEvent| content.set(evt.value()),
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "primary",
                    onclick: handle_submit,
                    "Post"
                }
                button {
                    class: "secondary",
                    id: "cancel-notice",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
