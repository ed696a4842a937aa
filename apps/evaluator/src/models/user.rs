use serde::{Deserialize, Serialize};

/// Profile metadata supplied alongside an uploaded resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub job_role: String,
}

impl UserInfo {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        job_role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            job_role: job_role.into(),
        }
    }
}
