use crate::error::Result;
use crate::gateway::RecordGateway;
use crate::model::Student;

/// In-memory cache of the last-known record collection.
///
/// Owns the full sequence (`all`, the latest snapshot from the server) and a
/// derived sequence (`visible`, the subset matching the active search term).
/// `visible` is always recomputed from the current `all`; it is never stale
/// relative to the last completed fetch.
///
/// Mutations never touch `all` directly. The dispatcher reconciles by
/// calling [`LocalStore::reload`] after every successful mutation, trading a
/// round trip for freedom from drift between client guess and server truth.
#[derive(Debug, Default)]
pub struct LocalStore {
    all: Vec<Student>,
    visible: Vec<Student>,
    term: String,
}

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot from the gateway and recompute the visible
    /// sequence with the active search term.
    ///
    /// On failure both sequences collapse to empty rather than preserving
    /// the previous snapshot, and the error is returned for reporting. The
    /// search term itself survives, so the next successful reload filters
    /// with it again.
    pub fn reload<G: RecordGateway>(&mut self, gateway: &G) -> Result<()> {
        match gateway.fetch_all() {
            Ok(records) => {
                self.all = records;
                self.refilter();
                Ok(())
            }
            Err(err) => {
                self.all.clear();
                self.visible.clear();
                Err(err)
            }
        }
    }

    /// Recompute `visible` as the records matching `term` case-insensitively
    /// on name, id, or the string form of age. An empty or whitespace-only
    /// term yields the full sequence. Order is preserved from `all`.
    pub fn apply_search(&mut self, term: &str) {
        self.term = term.trim().to_lowercase();
        self.refilter();
    }

    pub fn all(&self) -> &[Student] {
        &self.all
    }

    pub fn visible(&self) -> &[Student] {
        &self.visible
    }

    pub fn search_term(&self) -> &str {
        &self.term
    }

    pub fn find(&self, id: &str) -> Option<&Student> {
        self.all.iter().find(|s| s.id.as_deref() == Some(id))
    }

    fn refilter(&mut self) {
        if self.term.is_empty() {
            self.visible = self.all.clone();
        } else {
            self.visible = self
                .all
                .iter()
                .filter(|s| Self::matches(s, &self.term))
                .cloned()
                .collect();
        }
    }

    // term is already trimmed and lowercased
    fn matches(student: &Student, term: &str) -> bool {
        student.name.to_lowercase().contains(term)
            || student
                .id
                .as_deref()
                .is_some_and(|id| id.to_lowercase().contains(term))
            || student.age.to_string().contains(term)
    }
}
