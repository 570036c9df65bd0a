use super::RecordGateway;
use crate::error::{Result, RosterError};
use crate::model::Student;
use uuid::Uuid;

/// In-memory gateway for testing.
///
/// Behaves like a well-mannered backend: assigns ids on create, replaces
/// records wholesale on update, answers 404 for unknown ids. Switching on a
/// failure status makes every operation fail with that status, which is how
/// tests exercise the error paths without a network.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    records: Vec<Student>,
    fail_with: Option<u16>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Student>) -> Self {
        Self {
            records,
            fail_with: None,
        }
    }

    /// Make every subsequent operation fail with the given HTTP status.
    pub fn fail_with_status(&mut self, status: u16) {
        self.fail_with = Some(status);
    }

    /// Return to normal operation.
    pub fn restore(&mut self) {
        self.fail_with = None;
    }

    pub fn records(&self) -> &[Student] {
        &self.records
    }

    fn check(&self) -> Result<()> {
        match self.fail_with {
            Some(status) => Err(RosterError::Remote { status }),
            None => Ok(()),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|s| s.id.as_deref() == Some(id))
    }
}

impl RecordGateway for InMemoryGateway {
    fn fetch_all(&self) -> Result<Vec<Student>> {
        self.check()?;
        Ok(self.records.clone())
    }

    fn create(&mut self, student: &Student) -> Result<Student> {
        self.check()?;
        let mut created = student.clone();
        if created.id.is_none() {
            created.id = Some(Uuid::new_v4().to_string());
        }
        self.records.push(created.clone());
        Ok(created)
    }

    fn update(&mut self, id: &str, student: &Student) -> Result<Student> {
        self.check()?;
        let pos = self
            .position(id)
            .ok_or(RosterError::Remote { status: 404 })?;
        let mut updated = student.clone();
        updated.id = Some(id.to_string());
        self.records[pos] = updated.clone();
        Ok(updated)
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        self.check()?;
        let pos = self
            .position(id)
            .ok_or(RosterError::Remote { status: 404 })?;
        self.records.remove(pos);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct GatewayFixture {
        pub gateway: InMemoryGateway,
    }

    impl Default for GatewayFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl GatewayFixture {
        pub fn new() -> Self {
            Self {
                gateway: InMemoryGateway::new(),
            }
        }

        pub fn with_student(mut self, id: &str, name: &str, age: u32) -> Self {
            self.gateway.records.push(Student::with_id(id, name, age));
            self
        }
    }
}
