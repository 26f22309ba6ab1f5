//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod notice_board;
pub use notice_board::{ApiProvider, NoticeBoard};

mod notice_card;
pub use notice_card::NoticeCard;

mod notice_form;
pub use notice_form::NoticeForm;

mod edit_form;
pub use edit_form::EditNoticeForm;

mod empty_state;
pub use empty_state::EmptyState;

pub mod dialog;
pub mod time;
