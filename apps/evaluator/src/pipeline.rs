//! Upload -> extract -> analyze, with the checks that must happen before the
//! engine sees a job role.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::models::{AnalysisResult, ResumeSubmission, UserInfo};
use crate::scoring::analyze;
use crate::validation::validate_user_info;

/// An uploaded file as received from the user.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub declared_media_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub submission: ResumeSubmission,
    pub analysis: AnalysisResult,
}

/// Reads a file from disk, refusing anything over `max_bytes` before reading it.
pub fn read_upload(
    path: &Path,
    declared_media_type: Option<String>,
    max_bytes: u64,
) -> Result<Upload, AppError> {
    let size = fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(AppError::FileTooLarge {
            size,
            limit: max_bytes,
        });
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!(file_name = %file_name, size, "reading upload");

    Ok(Upload {
        file_name,
        declared_media_type,
        bytes: fs::read(path)?,
    })
}

/// Entry point for a file on disk. The profile is checked before the file is
/// touched, so an invalid profile is reported ahead of any size or IO error.
pub fn evaluate_file(
    user_info: UserInfo,
    path: &Path,
    declared_media_type: Option<String>,
    max_bytes: u64,
) -> Result<Evaluation, AppError> {
    validate_user_info(&user_info)?;
    let upload = read_upload(path, declared_media_type, max_bytes)?;
    evaluate(user_info, &upload)
}

/// Validates the profile, extracts the resume text, and scores it.
pub fn evaluate(user_info: UserInfo, upload: &Upload) -> Result<Evaluation, AppError> {
    validate_user_info(&user_info)?;

    let resume_text = extract_text(
        &upload.bytes,
        upload.declared_media_type.as_deref(),
        &upload.file_name,
    )?;
    info!(
        file_name = %upload.file_name,
        chars = resume_text.chars().count(),
        "resume text extracted"
    );

    let analysis = analyze(&resume_text, &user_info.job_role);
    info!(
        total_score = analysis.total_score,
        grade = %analysis.grade,
        "analysis complete"
    );

    Ok(Evaluation {
        submission: ResumeSubmission::new(user_info, resume_text, upload.file_name.clone()),
        analysis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;

    fn jane() -> UserInfo {
        UserInfo::new("Jane Doe", "jane@example.com", "Software Engineer")
    }

    fn text_upload(body: &str) -> Upload {
        Upload {
            file_name: "resume.txt".to_string(),
            declared_media_type: None,
            bytes: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_evaluate_text_resume() {
        let upload = text_upload(
            "Jane Doe | jane@example.com | 555-123-4567\n\
             Experience: developed software projects in python and javascript since 2019",
        );
        let evaluation = evaluate(jane(), &upload).unwrap();
        assert_eq!(evaluation.submission.file_name, "resume.txt");
        assert_eq!(evaluation.analysis.scores.contact_info, 10);
        assert_eq!(
            evaluation.analysis.total_score,
            evaluation.analysis.scores.total()
        );
    }

    #[test]
    fn test_invalid_profile_stops_before_extraction() {
        let upload = Upload {
            file_name: "photo.png".to_string(),
            declared_media_type: None,
            bytes: vec![0x89, 0x50],
        };
        let err = evaluate(UserInfo::new("Jane", "jane@example.com", " "), &upload).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_unsupported_upload_is_not_scored() {
        let upload = Upload {
            file_name: "photo.png".to_string(),
            declared_media_type: Some("image/png".to_string()),
            bytes: vec![0x89, 0x50],
        };
        let err = evaluate(jane(), &upload).unwrap_err();
        assert_eq!(err.code(), "UNSUPPORTED_FORMAT");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_blank_upload_is_not_scored() {
        let err = evaluate(jane(), &text_upload("   \n")).unwrap_err();
        assert_eq!(err.code(), "EXTRACTION_FAILED");
    }

    #[test]
    fn test_read_upload_respects_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.txt");
        fs::write(&path, "x".repeat(64)).unwrap();

        let err = read_upload(&path, None, 32).unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { size: 64, limit: 32 }));

        let upload = read_upload(&path, Some("text/plain".to_string()), 64).unwrap();
        assert_eq!(upload.file_name, "cv.txt");
        assert_eq!(upload.bytes.len(), 64);
    }

    #[test]
    fn test_read_upload_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_upload(&dir.path().join("nope.pdf"), None, 1024).unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }

    #[test]
    fn test_evaluate_file_validates_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.txt");
        fs::write(&path, "x".repeat(64)).unwrap();
        let blank_role = UserInfo::new("Jane", "jane@example.com", "  ");

        let err = evaluate_file(blank_role.clone(), &path, None, 32).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");

        let missing = dir.path().join("nope.pdf");
        let err = evaluate_file(blank_role, &missing, None, 1024).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");

        let err = evaluate_file(jane(), &path, None, 32).unwrap_err();
        assert_eq!(err.code(), "FILE_TOO_LARGE");
    }

    #[test]
    fn test_evaluate_file_scores_text_resume() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(&path, "Jane Doe | jane@example.com | 555-123-4567").unwrap();

        let evaluation = evaluate_file(jane(), &path, None, 1024).unwrap();
        assert_eq!(evaluation.submission.file_name, "resume.txt");
        assert_eq!(evaluation.analysis.scores.contact_info, 7);
    }

    #[test]
    fn test_short_resume_grades_d() {
        let evaluation = evaluate(jane(), &text_upload("Jane Doe")).unwrap();
        assert_eq!(evaluation.analysis.grade, Grade::D);
        assert!(!evaluation.analysis.weaknesses.is_empty());
    }
}
