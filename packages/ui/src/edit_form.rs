use dioxus::prelude::*;

use board::{Notice, NoticeEdit, NoticeId};

/// Shared edit form, prefilled from the notice being edited.
///
/// Key it by notice id at the call site so switching to another notice
/// remounts the form with fresh field state.
#[component]
pub fn EditNoticeForm(
    notice: Notice,
    on_submit: EventHandler<(NoticeId, NoticeEdit)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal({
        let initial = notice.title.clone();
        move || initial
    });
    let mut content = use_signal({
        let initial = notice.content.clone();
        move || initial
    });

    let handle_submit = {
        let id = notice.id.clone();
        move |_| {
            let title = title().trim().to_string();
            let content = content().trim().to_string();
            if title.is_empty() || content.is_empty() {
                return;
            }
            on_submit.call((id.clone(), NoticeEdit { title, content }));
        }
    };

    rsx! {
        div {
            class: "notice-form",
            id: "edit-form",
            h3 { "Edit Notice" }
            div {
                class: "form-field",
                label { r#for: "edit-notice-title", "Title" }
                input {
                    id: "edit-notice-title",
                    r#type: "text",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { r#for: "edit-notice-content", "Content" }
                textarea {
                    id: "edit-notice-content",
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
                    "Save"
                }
                button {
                    class: "secondary",
                    id: "cancel-edit",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
