use dioxus::prelude::*;

use board::{Notice, NoticeId};

use crate::icons::{FaPenToSquare, FaTrashCan};
use crate::{time, Icon};

/// One rendered notice.
///
/// Shows title, content, author and the composed time string; owner cards
/// additionally carry Edit and Delete controls.
#[component]
pub fn NoticeCard(
    notice: Notice,
    on_edit: EventHandler<Notice>,
    on_delete: EventHandler<NoticeId>,
) -> Element {
    let time_info = time::time_info(&notice.created_at, notice.updated_at.as_deref());

    rsx! {
        div {
            class: "notice-card",
            id: "notice-{notice.id}",
            h3 { "{notice.title}" }
            p { class: "notice-content", "{notice.content}" }
            p {
                class: "notice-meta",
                "Posted by "
                strong { "{notice.username}" }
                " • {time_info}"
            }
            if notice.is_owner {
                div {
                    class: "notice-actions",
                    button {
                        class: "btn btn-primary edit-notice-btn",
                        onclick: {
                            let notice = notice.clone();
                            move |_| on_edit.call(notice.clone())
                        },
                        Icon { icon: FaPenToSquare, width: 12, height: 12 }
                        " Edit"
                    }
                    button {
                        class: "btn btn-danger delete-notice-btn",
                        onclick: {
                            let id = notice.id.clone();
                            move |_| on_delete.call(id.clone())
                        },
                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                        " Delete"
                    }
                }
            }
        }
    }
}
