use crate::models::{Notice, NoticeId};

/// In-memory projection of the rendered notice list.
///
/// The list mirrors the latest successful fetch, optimistically patched by
/// local create/edit/delete actions until the next poll replaces it.
/// `hydrated` stays `false` until the first snapshot lands so the UI renders
/// nothing (not the empty state) before the initial load resolves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardState {
    pub notices: Vec<Notice>,
    pub hydrated: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the projection with a server snapshot.
    ///
    /// Presence and ordering follow the snapshot. Per notice, a record whose
    /// `version` is older than the locally known one keeps the local record:
    /// a reply to a local edit may carry a newer write than a snapshot taken
    /// before it committed.
    pub fn replace_all(&mut self, snapshot: Vec<Notice>) {
        self.notices = snapshot
            .into_iter()
            .map(|incoming| {
                match self.notices.iter().find(|n| n.id == incoming.id) {
                    Some(current) if current.version > incoming.version => current.clone(),
                    _ => incoming,
                }
            })
            .collect();
        self.hydrated = true;
    }

    /// Append one notice at the end of the list.
    ///
    /// No sorting, no deduplication; callers only insert a freshly created
    /// notice once.
    pub fn insert(&mut self, notice: Notice) {
        self.notices.push(notice);
        self.hydrated = true;
    }

    /// Merge an edit reply into the matching notice.
    ///
    /// Title, content, `updated_at` and `version` come from the reply;
    /// `username` and `created_at` are kept when the reply leaves them
    /// empty, and `is_owner` is never changed by an edit. Returns `false`
    /// for an unknown id or a stale `version`.
    pub fn apply_update(&mut self, incoming: Notice) -> bool {
        let Some(current) = self.notices.iter_mut().find(|n| n.id == incoming.id) else {
            return false;
        };
        if incoming.version < current.version {
            return false;
        }
        current.title = incoming.title;
        current.content = incoming.content;
        current.updated_at = incoming.updated_at;
        current.version = incoming.version;
        if !incoming.username.is_empty() {
            current.username = incoming.username;
        }
        if !incoming.created_at.is_empty() {
            current.created_at = incoming.created_at;
        }
        true
    }

    /// Remove the notice with the given id. Returns `false` if absent.
    pub fn remove(&mut self, id: &NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| &n.id != id);
        self.notices.len() != before
    }

    pub fn get(&self, id: &NoticeId) -> Option<&Notice> {
        self.notices.iter().find(|n| &n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoticeId;

    fn notice(id: i64, title: &str, version: u64) -> Notice {
        Notice {
            id: NoticeId::Int(id),
            title: title.to_string(),
            content: format!("{title} body"),
            username: "alice".to_string(),
            created_at: "2024-01-01T12:00:00Z".to_string(),
            updated_at: None,
            is_owner: true,
            version,
        }
    }

    #[test]
    fn replace_all_is_idempotent() {
        let mut state = BoardState::new();
        let snapshot = vec![notice(1, "First", 0), notice(2, "Second", 0)];

        state.replace_all(snapshot.clone());
        let first = state.clone();
        state.replace_all(snapshot);

        assert_eq!(state, first);
        assert_eq!(state.notices.len(), 2);
    }

    #[test]
    fn empty_snapshot_hydrates_into_empty_state() {
        let mut state = BoardState::new();
        assert!(!state.hydrated);

        state.replace_all(Vec::new());

        assert!(state.hydrated);
        assert!(state.is_empty());
    }

    #[test]
    fn insert_appends_in_order() {
        let mut state = BoardState::new();
        state.insert(notice(1, "First", 0));
        state.insert(notice(2, "Second", 0));

        assert_eq!(state.notices[0].id, NoticeId::Int(1));
        assert_eq!(state.notices[1].id, NoticeId::Int(2));
        assert!(state.hydrated);
    }

    #[test]
    fn apply_update_touches_only_the_matching_notice() {
        let mut state = BoardState::new();
        state.replace_all(vec![notice(1, "First", 0), notice(2, "Second", 0)]);

        let mut edited = notice(2, "Second (moved)", 1);
        edited.updated_at = Some("2024-01-01T13:00:00Z".to_string());
        assert!(state.apply_update(edited));

        assert_eq!(state.notices[0].title, "First");
        assert!(state.notices[0].updated_at.is_none());
        assert_eq!(state.notices[1].title, "Second (moved)");
        assert_eq!(
            state.notices[1].updated_at.as_deref(),
            Some("2024-01-01T13:00:00Z")
        );
    }

    #[test]
    fn apply_update_preserves_author_when_reply_omits_it() {
        let mut state = BoardState::new();
        state.replace_all(vec![notice(1, "First", 0)]);

        let reply = Notice {
            username: String::new(),
            created_at: String::new(),
            ..notice(1, "First (edited)", 1)
        };
        assert!(state.apply_update(reply));

        let current = state.get(&NoticeId::Int(1)).unwrap();
        assert_eq!(current.title, "First (edited)");
        assert_eq!(current.username, "alice");
        assert_eq!(current.created_at, "2024-01-01T12:00:00Z");
    }

    #[test]
    fn apply_update_rejects_stale_version() {
        let mut state = BoardState::new();
        state.replace_all(vec![notice(1, "Fresh", 3)]);

        assert!(!state.apply_update(notice(1, "Stale", 2)));
        assert_eq!(state.get(&NoticeId::Int(1)).unwrap().title, "Fresh");
    }

    #[test]
    fn apply_update_unknown_id_is_a_noop() {
        let mut state = BoardState::new();
        state.replace_all(vec![notice(1, "First", 0)]);

        assert!(!state.apply_update(notice(9, "Ghost", 0)));
        assert_eq!(state.notices.len(), 1);
    }

    #[test]
    fn snapshot_does_not_roll_back_a_newer_local_edit() {
        let mut state = BoardState::new();
        state.replace_all(vec![notice(1, "First", 0), notice(2, "Second", 0)]);
        assert!(state.apply_update(notice(1, "First (edited)", 2)));

        // Poll taken before the edit committed server-side.
        state.replace_all(vec![notice(1, "First", 1), notice(2, "Second", 1)]);

        assert_eq!(state.get(&NoticeId::Int(1)).unwrap().title, "First (edited)");
        assert_eq!(state.get(&NoticeId::Int(1)).unwrap().version, 2);
        assert_eq!(state.get(&NoticeId::Int(2)).unwrap().version, 1);
    }

    #[test]
    fn remove_last_notice_reenters_empty_state() {
        let mut state = BoardState::new();
        state.replace_all(vec![notice(1, "Only", 0)]);

        assert!(state.remove(&NoticeId::Int(1)));
        assert!(state.is_empty());
        assert!(state.hydrated);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut state = BoardState::new();
        state.replace_all(vec![notice(1, "Only", 0)]);

        assert!(!state.remove(&NoticeId::Int(9)));
        assert_eq!(state.notices.len(), 1);
    }
}
