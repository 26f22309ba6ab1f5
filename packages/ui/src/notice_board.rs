//! The notice board controller: fetch, render, mutate, poll.

use std::time::Duration;

use dioxus::prelude::*;

use api::{ApiClient, ApiError};
use board::{BoardState, Notice, NoticeDraft, NoticeEdit, NoticeId};

use crate::icons::FaPlus;
use crate::{dialog, EditNoticeForm, EmptyState, Icon, NoticeCard, NoticeForm};

const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Which form is currently shown. The create and edit forms are mutually
/// exclusive; opening one replaces the other.
#[derive(Clone, Debug, PartialEq)]
enum FormPane {
    Hidden,
    Create,
    Edit(Notice),
}

/// Provider component that builds the [`ApiClient`] and shares it through
/// context. Wrap the app with this component; [`NoticeBoard`] requires it.
///
/// Without an explicit `base_url` the client targets the page origin on the
/// web and `http://localhost:8080` elsewhere.
#[component]
pub fn ApiProvider(#[props(default)] base_url: Option<String>, children: Element) -> Element {
    use_context_provider(move || {
        ApiClient::new(base_url.unwrap_or_else(default_base_url))
    });

    rsx! {
        {children}
    }
}

fn default_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }
    }
    "http://localhost:8080".to_string()
}

/// The shared notice board.
///
/// Renders the card list as a projection of [`BoardState`], submits
/// create/edit/delete requests, and polls the backend every 30 seconds to
/// reconcile with the server snapshot. Must be mounted under an
/// [`ApiProvider`].
#[component]
pub fn NoticeBoard() -> Element {
    let api_ctx = use_context::<ApiClient>();
    let api = use_signal(move || api_ctx);
    let mut board = use_signal(BoardState::new);
    let mut pane = use_signal(|| FormPane::Hidden);

    // Initial load on mount
    let _loader = use_resource(move || async move {
        refresh(api, board).await;
    });

    // Poll for fresh notices; the task is dropped with the component scope.
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(POLL_INTERVAL).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(POLL_INTERVAL).await;

                refresh(api, board).await;
            }
        });
    });

    let handle_show_create = move |_| pane.set(FormPane::Create);
    let handle_cancel = move |_| pane.set(FormPane::Hidden);

    let handle_create = move |draft: NoticeDraft| {
        spawn(async move {
            match api().create_notice(&draft).await {
                Ok(created) => {
                    board.write().insert(created);
                    pane.set(FormPane::Hidden);
                }
                Err(ApiError::Rejected(message)) => dialog::alert(&message),
                Err(err) => {
                    tracing::error!("Error creating notice: {err}");
                    dialog::alert("Failed to create notice. Please try again.");
                }
            }
        });
    };

    let handle_edit_request = move |notice: Notice| {
        pane.set(FormPane::Edit(notice));
    };

    let handle_edit_submit = move |(id, edit): (NoticeId, NoticeEdit)| {
        spawn(async move {
            match api().edit_notice(&id, &edit).await {
                Ok(updated) => {
                    board.write().apply_update(updated);
                    pane.set(FormPane::Hidden);
                }
                Err(ApiError::Rejected(message)) => dialog::alert(&message),
                Err(err) => {
                    tracing::error!("Error updating notice: {err}");
                    dialog::alert("Failed to update notice. Please try again.");
                }
            }
        });
    };

    let handle_delete = move |id: NoticeId| {
        if !dialog::confirm("Are you sure you want to delete this notice?") {
            return;
        }
        spawn(async move {
            match api().delete_notice(&id).await {
                Ok(()) => {
                    board.write().remove(&id);
                }
                Err(ApiError::Rejected(message)) => dialog::alert(&message),
                Err(err) => {
                    tracing::error!("Error deleting notice: {err}");
                    dialog::alert("Failed to delete notice. Please try again.");
                }
            }
        });
    };

    let form = match pane() {
        FormPane::Create => rsx! {
            NoticeForm {
                on_submit: handle_create,
                on_cancel: handle_cancel,
            }
        },
        FormPane::Edit(notice) => rsx! {
            EditNoticeForm {
                key: "{notice.id}",
                notice: notice.clone(),
                on_submit: handle_edit_submit,
                on_cancel: handle_cancel,
            }
        },
        FormPane::Hidden => rsx! {},
    };

    let state = board();
    let show_empty = state.hydrated && state.notices.is_empty();
    let notices = state.notices;

    rsx! {
        div {
            class: "notice-board",
            div {
                class: "board-header",
                h2 { "Notice Board" }
                button {
                    class: "primary",
                    id: "create-notice-btn",
                    onclick: handle_show_create,
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Post a Notice"
                }
            }

            {form}

            div {
                class: "notices-container",
                id: "notices-container",
                if show_empty {
                    EmptyState {}
                }
                for notice in notices {
                    NoticeCard {
                        key: "{notice.id}",
                        notice: notice.clone(),
                        on_edit: handle_edit_request,
                        on_delete: handle_delete,
                    }
                }
            }
        }
    }
}

async fn refresh(api: Signal<ApiClient>, mut board: Signal<BoardState>) {
    match api().get_notices().await {
        // Full replacement is the reconciliation mechanism; any optimistic
        // patch not reflected server-side is overwritten here.
        Ok(notices) => board.write().replace_all(notices),
        // Silent on purpose: keep showing the previous rendering until the
        // next successful poll.
        Err(err) => tracing::error!("Error loading notices: {err}"),
    }
}
