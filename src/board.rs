use std::rc::Rc;

use yew::prelude::*;

use crate::api::Outcome;
use crate::message::Notice;
use crate::models::Activities;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Activities),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    pub load: LoadState,
    pub names: Vec<String>,
    pub email: String,
    pub selected: String,
    pub notice: Option<Notice>,
    /// Bumped on every new notice so a stale hide can be told apart.
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    Fetched(Activities),
    FetchFailed,
    Email(String),
    Select(String),
    Settled(Outcome),
    Expire(u64),
}

impl Board {
    pub fn apply(&mut self, action: BoardAction) {
        match action {
            BoardAction::Fetched(activities) => {
                self.names = activities.names();
                self.load = LoadState::Loaded(activities);
            }
            // Only the list region changes; the selector keeps its options.
            BoardAction::FetchFailed => self.load = LoadState::Failed,
            BoardAction::Email(email) => self.email = email,
            BoardAction::Select(name) => self.selected = name,
            BoardAction::Settled(outcome) => {
                if outcome.reset_form {
                    self.email.clear();
                    self.selected.clear();
                }
                self.show(outcome.notice);
            }
            BoardAction::Expire(generation) => {
                if generation == self.generation {
                    self.notice = None;
                }
            }
        }
    }

    pub fn show(&mut self, notice: Notice) {
        self.generation += 1;
        self.notice = Some(notice);
    }
}

impl Reducible for Board {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{settle, Action, ActionReply};
    use crate::models::Activity;

    fn activities(names: &[&str]) -> Activities {
        names
            .iter()
            .map(|name| {
                (
                    name.to_string(),
                    Activity {
                        description: "Club".into(),
                        schedule: "Fridays".into(),
                        max_participants: 10,
                        participants: Vec::new(),
                    },
                )
            })
            .collect()
    }

    fn outcome(notice: Notice, refresh: bool, reset_form: bool) -> Outcome {
        Outcome {
            notice,
            refresh,
            reset_form,
        }
    }

    fn filled_form() -> Board {
        let mut board = Board::default();
        board.apply(BoardAction::Fetched(activities(&["Chess Club", "Drama Club"])));
        board.apply(BoardAction::Email("you@example.com".into()));
        board.apply(BoardAction::Select("Chess Club".into()));
        board
    }

    #[test]
    fn starts_loading_with_no_options() {
        let board = Board::default();
        assert_eq!(board.load, LoadState::Loading);
        assert!(board.names.is_empty());
        assert!(board.notice.is_none());
    }

    #[test]
    fn failed_refresh_keeps_selector_options() {
        let mut board = Board::default();
        board.apply(BoardAction::Fetched(activities(&["Chess Club", "Drama Club", "Art Studio"])));
        board.apply(BoardAction::FetchFailed);

        assert_eq!(board.load, LoadState::Failed);
        assert_eq!(board.names, vec!["Chess Club", "Drama Club", "Art Studio"]);
    }

    #[test]
    fn successful_refresh_replaces_options() {
        let mut board = Board::default();
        board.apply(BoardAction::Fetched(activities(&["Chess Club"])));
        board.apply(BoardAction::Fetched(activities(&["Drama Club", "Art Studio"])));
        assert_eq!(board.names, vec!["Drama Club", "Art Studio"]);
    }

    #[test]
    fn older_hide_does_not_clear_newer_message() {
        let mut board = Board::default();
        board.show(Notice::success("Signed up a@b.c for Chess Club"));
        let first = board.generation;
        board.show(Notice::error("Already signed up"));

        board.apply(BoardAction::Expire(first));
        assert_eq!(board.notice, Some(Notice::error("Already signed up")));

        board.apply(BoardAction::Expire(board.generation));
        assert!(board.notice.is_none());
    }

    #[test]
    fn repeated_identical_messages_get_fresh_generations() {
        let mut board = Board::default();
        board.show(Notice::error("An error occurred"));
        let first = board.generation;
        board.show(Notice::error("An error occurred"));
        assert_ne!(first, board.generation);

        board.apply(BoardAction::Expire(first));
        assert!(board.notice.is_some());
    }

    #[test]
    fn signup_success_resets_form_and_shows_message() {
        let mut board = filled_form();
        board.apply(BoardAction::Settled(outcome(
            Notice::success("Signed up you@example.com for Chess Club"),
            true,
            true,
        )));
        assert_eq!(board.email, "");
        assert_eq!(board.selected, "");
        assert_eq!(
            board.notice,
            Some(Notice::success("Signed up you@example.com for Chess Club"))
        );
    }

    #[test]
    fn unregister_success_refreshes_but_keeps_form() {
        let mut board = filled_form();
        let reply = Ok(ActionReply {
            ok: true,
            body: serde_json::from_str(r#"{"message": "Unregistered a@b.c from Chess Club"}"#)
                .expect("valid body"),
        });
        let settled = settle(Action::Unregister, &reply);
        assert!(settled.refresh);

        board.apply(BoardAction::Settled(settled));
        assert_eq!(board.email, "you@example.com");
        assert_eq!(board.selected, "Chess Club");
    }

    #[test]
    fn rejected_signup_keeps_form() {
        let mut board = filled_form();
        board.apply(BoardAction::Settled(outcome(
            Notice::error("Already signed up"),
            false,
            false,
        )));
        assert_eq!(board.email, "you@example.com");
        assert_eq!(board.selected, "Chess Club");
        assert_eq!(board.notice, Some(Notice::error("Already signed up")));
    }
}
