use super::RecordGateway;
use crate::error::{Result, RosterError};
use crate::model::Student;
use reqwest::blocking::{Client, Response};

/// HTTP gateway over the backend's four record endpoints.
///
/// Requests are issued with a shared blocking client and no timeout: a hung
/// request blocks that operation's resolution indefinitely, matching the
/// cooperative model of the dispatcher. Non-2xx responses become
/// [`RosterError::Remote`]; the error body is ignored.
pub struct HttpGateway {
    endpoint: String,
    client: Client,
}

impl HttpGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    fn accept(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(RosterError::Remote {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

impl RecordGateway for HttpGateway {
    fn fetch_all(&self) -> Result<Vec<Student>> {
        let response = self.client.get(&self.endpoint).send()?;
        Ok(Self::accept(response)?.json()?)
    }

    fn create(&mut self, student: &Student) -> Result<Student> {
        let response = self.client.post(&self.endpoint).json(student).send()?;
        Ok(Self::accept(response)?.json()?)
    }

    fn update(&mut self, id: &str, student: &Student) -> Result<Student> {
        let response = self.client.put(self.record_url(id)).json(student).send()?;
        Ok(Self::accept(response)?.json()?)
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        let response = self.client.delete(self.record_url(id)).send()?;
        Self::accept(response)?;
        Ok(())
    }
}
