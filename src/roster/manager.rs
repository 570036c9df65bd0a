//! # Record Manager
//!
//! The dispatcher that owns all mutable state: the gateway, the local
//! store, the form state, and the notice board. Every user interaction
//! arrives as a named [`Event`] and is handled to completion before the
//! next one, keeping the model single-threaded and cooperative. There is no
//! hidden re-entrancy: nothing here calls back into `dispatch`.
//!
//! Error policy: each gateway-facing handler catches its own failure,
//! converts it into an error notice, and abandons the local state
//! transition it was about to make. A failed create or update leaves the
//! form state and its contents untouched. Reload is the one exception
//! where failure still mutates state, collapsing the store to empty (see
//! [`LocalStore::reload`]).
//!
//! Overlapping in-flight mutations are not guarded against; whichever
//! reload completes last wins. A one-shot CLI cannot reach that race, but
//! long-lived clients driving this dispatcher inherit the behavior.

use crate::gateway::RecordGateway;
use crate::model::{FormValues, Student};
use crate::notify::{Notice, NoticeBoard};
use crate::session::FormState;
use crate::store::LocalStore;
use chrono::Utc;

/// A user interaction, named after what the user did rather than what the
/// handler will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Re-fetch the record collection from the backend.
    Refresh,
    /// The search input changed; filters the currently loaded records only.
    SearchChanged(String),
    /// The user picked a record to edit.
    EditRequested(String),
    /// The form was submitted, either creating or updating depending on the
    /// form state.
    Submit(FormValues),
    /// The edit was abandoned. No remote call.
    Cancel,
    /// The user confirmed deletion of a record.
    DeleteRequested(String),
}

/// Owns the full lifecycle: fetch, cache, mutate, re-fetch.
pub struct RecordManager<G: RecordGateway> {
    gateway: G,
    store: LocalStore,
    form: FormState,
    notices: NoticeBoard,
}

impl<G: RecordGateway> RecordManager<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            store: LocalStore::new(),
            form: FormState::Idle,
            notices: NoticeBoard::new(),
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        self.notices.sweep(Utc::now());
        match event {
            Event::Refresh => self.refresh(),
            Event::SearchChanged(term) => self.store.apply_search(&term),
            Event::EditRequested(id) => self.begin_edit(&id),
            Event::Submit(values) => self.submit(values),
            Event::Cancel => self.form = FormState::Idle,
            Event::DeleteRequested(id) => self.delete(&id),
        }
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    pub fn find_record(&self, id: &str) -> Option<&Student> {
        self.store.find(id)
    }

    fn refresh(&mut self) {
        if let Err(err) = self.store.reload(&self.gateway) {
            self.notices
                .post(Notice::error(format!("Error fetching students: {}", err)));
        }
    }

    fn begin_edit(&mut self, id: &str) {
        match self.store.find(id) {
            Some(student) => self.form = FormState::Editing(student.clone()),
            None => self.notices.post(Notice::error("Student not found")),
        }
    }

    fn submit(&mut self, values: FormValues) {
        let student = match values.validate() {
            Ok(student) => student,
            Err(err) => {
                // Validation failures never reach the network and leave the
                // form state exactly as it was.
                self.notices.post(Notice::error(err.to_string()));
                return;
            }
        };

        let editing_id = self.form.editing_id().map(str::to_string);
        match editing_id {
            Some(id) => match self.gateway.update(&id, &student) {
                Ok(_) => {
                    self.form = FormState::Idle;
                    self.notices
                        .post(Notice::success("Student updated successfully!"));
                    self.refresh();
                }
                Err(err) => self
                    .notices
                    .post(Notice::error(format!("Error updating student: {}", err))),
            },
            None => match self.gateway.create(&student) {
                Ok(_) => {
                    self.notices
                        .post(Notice::success("Student added successfully!"));
                    self.refresh();
                }
                Err(err) => self
                    .notices
                    .post(Notice::error(format!("Error adding student: {}", err))),
            },
        }
    }

    fn delete(&mut self, id: &str) {
        if self.store.find(id).is_none() {
            self.notices.post(Notice::error("Student not found"));
            return;
        }
        match self.gateway.remove(id) {
            Ok(()) => {
                // The edit session dies with the record it was editing.
                if self.form.editing_id() == Some(id) {
                    self.form = FormState::Idle;
                }
                self.notices
                    .post(Notice::success("Student deleted successfully!"));
                self.refresh();
            }
            Err(err) => self
                .notices
                .post(Notice::error(format!("Error deleting student: {}", err))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::memory::fixtures::GatewayFixture;
    use crate::gateway::memory::InMemoryGateway;
    use crate::notify::NoticeLevel;

    fn manager_with(fixture: GatewayFixture) -> RecordManager<InMemoryGateway> {
        let mut manager = RecordManager::new(fixture.gateway);
        manager.dispatch(Event::Refresh);
        manager
    }

    fn error_contents(manager: &mut RecordManager<InMemoryGateway>) -> Vec<String> {
        manager
            .drain_notices()
            .into_iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .map(|n| n.content)
            .collect()
    }

    #[test]
    fn create_then_reload_round_trips() {
        let mut manager = manager_with(GatewayFixture::new());
        manager.dispatch(Event::Submit(FormValues::new("", "Ann", "20")));

        assert_eq!(manager.store().all().len(), 1);
        let created = &manager.store().all()[0];
        assert_eq!(created.name, "Ann");
        assert_eq!(created.age, 20);
        assert!(created.id.is_some(), "server assigns the id");

        let notices = manager.drain_notices();
        assert!(notices
            .iter()
            .any(|n| n.content == "Student added successfully!"));
    }

    #[test]
    fn invalid_submit_makes_no_remote_call() {
        let mut manager = manager_with(GatewayFixture::new());
        for age in ["0", "151", "abc"] {
            manager.dispatch(Event::Submit(FormValues::new("", "Ann", age)));
        }
        // nothing was created: validation short-circuits before the gateway
        assert!(manager.store().all().is_empty());
        assert_eq!(error_contents(&mut manager).len(), 3);
    }

    #[test]
    fn blank_name_while_editing_keeps_the_session() {
        let mut manager = manager_with(GatewayFixture::new().with_student("5", "Cy", 22));
        manager.dispatch(Event::EditRequested("5".to_string()));
        manager.dispatch(Event::Submit(FormValues::new("5", "   ", "22")));

        assert_eq!(manager.form().editing_id(), Some("5"));
        assert_eq!(manager.store().find("5").unwrap().name, "Cy");
        let errors = error_contents(&mut manager);
        assert_eq!(errors, vec!["Please enter student name".to_string()]);
    }

    #[test]
    fn submit_while_editing_updates_and_returns_to_idle() {
        let mut manager = manager_with(GatewayFixture::new().with_student("5", "Cy", 22));
        manager.dispatch(Event::EditRequested("5".to_string()));
        manager.dispatch(Event::Submit(FormValues::new("5", "Cyrus", "23")));

        assert_eq!(*manager.form(), FormState::Idle);
        let updated = manager.store().find("5").unwrap();
        assert_eq!(updated.name, "Cyrus");
        assert_eq!(updated.age, 23);
    }

    #[test]
    fn failed_update_keeps_editing_state() {
        let mut manager = manager_with(GatewayFixture::new().with_student("5", "Cy", 22));
        manager.dispatch(Event::EditRequested("5".to_string()));
        manager.gateway.fail_with_status(500);
        manager.dispatch(Event::Submit(FormValues::new("5", "Cyrus", "23")));

        assert_eq!(manager.form().editing_id(), Some("5"));
        let errors = error_contents(&mut manager);
        assert!(errors[0].starts_with("Error updating student:"));
        // the snapshot still shows the server state from before the failure
        assert_eq!(manager.store().find("5").unwrap().name, "Cy");
    }

    #[test]
    fn failed_create_leaves_form_idle_and_store_intact() {
        let mut manager = manager_with(GatewayFixture::new().with_student("1", "Ann", 20));
        manager.gateway.fail_with_status(500);
        manager.dispatch(Event::Submit(FormValues::new("", "Bo", "31")));

        assert_eq!(*manager.form(), FormState::Idle);
        assert_eq!(manager.store().all().len(), 1);
        assert!(error_contents(&mut manager)[0].starts_with("Error adding student:"));
    }

    #[test]
    fn edit_requested_snapshots_current_values() {
        let mut manager = manager_with(GatewayFixture::new().with_student("5", "Cy", 22));
        manager.dispatch(Event::EditRequested("5".to_string()));

        let snapshot = manager.form().snapshot().unwrap().clone();
        assert_eq!(snapshot, Student::with_id("5", "Cy", 22));
    }

    #[test]
    fn edit_requested_for_unknown_id_reports_not_found() {
        let mut manager = manager_with(GatewayFixture::new().with_student("1", "Ann", 20));
        manager.dispatch(Event::EditRequested("9".to_string()));

        assert_eq!(*manager.form(), FormState::Idle);
        assert_eq!(error_contents(&mut manager), vec!["Student not found"]);
    }

    #[test]
    fn cancel_discards_the_session_without_remote_calls() {
        let mut manager = manager_with(GatewayFixture::new().with_student("5", "Cy", 22));
        manager.dispatch(Event::EditRequested("5".to_string()));
        manager.dispatch(Event::Cancel);

        assert_eq!(*manager.form(), FormState::Idle);
        assert_eq!(manager.store().find("5").unwrap().name, "Cy");
    }

    #[test]
    fn delete_removes_from_both_sequences_after_reload() {
        let mut manager = manager_with(
            GatewayFixture::new()
                .with_student("1", "Ann", 20)
                .with_student("2", "Bo", 31),
        );
        manager.dispatch(Event::DeleteRequested("2".to_string()));

        assert!(manager.store().find("2").is_none());
        assert!(manager.store().visible().iter().all(|s| s.id.as_deref() != Some("2")));
        let notices = manager.drain_notices();
        assert!(notices
            .iter()
            .any(|n| n.content == "Student deleted successfully!"));
    }

    #[test]
    fn delete_of_unknown_id_reports_not_found() {
        let mut manager = manager_with(GatewayFixture::new().with_student("1", "Ann", 20));
        manager.dispatch(Event::DeleteRequested("9".to_string()));

        assert_eq!(manager.store().all().len(), 1);
        assert_eq!(error_contents(&mut manager), vec!["Student not found"]);
    }

    #[test]
    fn deleting_the_edited_record_ends_the_session() {
        let mut manager = manager_with(GatewayFixture::new().with_student("5", "Cy", 22));
        manager.dispatch(Event::EditRequested("5".to_string()));
        manager.dispatch(Event::DeleteRequested("5".to_string()));

        assert_eq!(*manager.form(), FormState::Idle);
        assert!(manager.store().all().is_empty());
    }

    #[test]
    fn deleting_another_record_keeps_the_session() {
        let mut manager = manager_with(
            GatewayFixture::new()
                .with_student("1", "Ann", 20)
                .with_student("5", "Cy", 22),
        );
        manager.dispatch(Event::EditRequested("5".to_string()));
        manager.dispatch(Event::DeleteRequested("1".to_string()));

        assert_eq!(manager.form().editing_id(), Some("5"));
    }

    #[test]
    fn failed_refresh_posts_a_notice_and_clears_the_store() {
        let mut manager = manager_with(GatewayFixture::new().with_student("1", "Ann", 20));
        assert_eq!(manager.store().all().len(), 1);

        manager.gateway.fail_with_status(503);
        manager.dispatch(Event::Refresh);

        assert!(manager.store().all().is_empty());
        assert!(manager.store().visible().is_empty());
        assert!(error_contents(&mut manager)[0].starts_with("Error fetching students:"));
    }

    #[test]
    fn search_changed_filters_without_refetching() {
        let mut manager = manager_with(
            GatewayFixture::new()
                .with_student("1", "Ann", 20)
                .with_student("2", "Bo", 31),
        );
        manager.dispatch(Event::SearchChanged("3".to_string()));

        assert_eq!(manager.store().visible().len(), 1);
        assert_eq!(manager.store().visible()[0].id.as_deref(), Some("2"));
        assert_eq!(manager.store().all().len(), 2);
    }

    #[test]
    fn mutation_reload_preserves_search_term() {
        let mut manager = manager_with(
            GatewayFixture::new()
                .with_student("1", "Ann", 20)
                .with_student("2", "Bo", 31),
        );
        manager.dispatch(Event::SearchChanged("ann".to_string()));
        manager.dispatch(Event::DeleteRequested("2".to_string()));

        assert_eq!(manager.store().search_term(), "ann");
        assert_eq!(manager.store().visible().len(), 1);
        assert_eq!(manager.store().all().len(), 1);
    }
}
