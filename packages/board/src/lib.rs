pub mod models;
pub mod state;

pub use models::{Notice, NoticeDraft, NoticeEdit, NoticeId};
pub use state::BoardState;
