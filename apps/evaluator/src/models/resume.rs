use serde::{Deserialize, Serialize};

use crate::models::user::UserInfo;

/// Everything collected for one analysis: who is asking, what they uploaded,
/// and the text pulled out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSubmission {
    pub user_info: UserInfo,
    /// Extracted plain text. May be empty; the engine still scores it.
    pub resume_text: String,
    /// Original file name, used only for labelling.
    pub file_name: String,
}

impl ResumeSubmission {
    pub fn new(
        user_info: UserInfo,
        resume_text: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            user_info,
            resume_text: resume_text.into(),
            file_name: file_name.into(),
        }
    }
}
