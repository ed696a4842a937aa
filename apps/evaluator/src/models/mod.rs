pub mod analysis;
pub mod resume;
pub mod user;

pub use analysis::{AnalysisResult, Category, CategoryScoreSet, Grade};
pub use resume::ResumeSubmission;
pub use user::UserInfo;
