//! Text and field extraction from uploaded resume documents.

use std::sync::OnceLock;

use bytes::Bytes;
use regex::Regex;

use crate::errors::AppError;

const FALLBACK_FILENAME: &str = "resume.pdf";

/// Extracts plain text from PDF bytes.
///
/// Runs on the blocking pool; a parser panic on a malformed document is
/// reported the same way as a parse error.
pub async fn extract_pdf_text(bytes: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::UnprocessableEntity(format!("PDF extraction aborted: {e}")))?
        .map_err(|e| AppError::UnprocessableEntity(format!("Unreadable PDF: {e}")))
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("email pattern is valid")
    })
}

/// First email-looking substring in `text`, if any.
pub fn extract_email(text: &str) -> Option<String> {
    email_pattern().find(text).map(|m| m.as_str().to_string())
}

/// Reduces a client-supplied filename to a safe single path component.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') => Some(c),
            _ => None,
        })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');

    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn is_pdf_filename(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resumes::test_pdf::single_page_pdf;

    #[test]
    fn test_extract_email_finds_first_address() {
        let text = "Jane Doe\nContact: jane.doe+cv@example.co.uk or jd@other.org";
        assert_eq!(
            extract_email(text).as_deref(),
            Some("jane.doe+cv@example.co.uk")
        );
    }

    #[test]
    fn test_extract_email_none_when_absent() {
        assert_eq!(extract_email("no contact details here @ all"), None);
    }

    #[test]
    fn test_sanitize_strips_paths_and_unsafe_chars() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\My CV (final).pdf"), "My_CV_final.pdf");
        assert_eq!(sanitize_filename("résumé.pdf"), "rsum.pdf");
    }

    #[test]
    fn test_sanitize_strips_leading_dots_and_falls_back() {
        assert_eq!(sanitize_filename(".hidden.pdf"), "hidden.pdf");
        assert_eq!(sanitize_filename("???"), "resume.pdf");
        assert_eq!(sanitize_filename(""), "resume.pdf");
    }

    #[test]
    fn test_pdf_extension_is_case_insensitive() {
        assert!(is_pdf_filename("cv.PDF"));
        assert!(is_pdf_filename("cv.pdf"));
        assert!(!is_pdf_filename("cv.docx"));
        assert!(!is_pdf_filename("pdf"));
    }

    #[tokio::test]
    async fn test_extracts_text_and_email_from_pdf() {
        let pdf = single_page_pdf("Ada Lovelace ada@example.com analyst");
        let text = extract_pdf_text(Bytes::from(pdf)).await.unwrap();
        assert!(text.contains("Lovelace"), "{text:?}");
        assert_eq!(extract_email(&text).as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_unprocessable() {
        let err = extract_pdf_text(Bytes::from_static(b"definitely not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
