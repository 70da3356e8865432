//! Training corpus parsing: one `<job_title>:<description>` record per line.

use std::path::Path;

use tracing::debug;

use crate::classifier::ClassifierError;

/// A single labeled training example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRecord {
    pub job_title: String,
    pub description: String,
}

/// Parses corpus text strictly. The first `:` on each line splits title from
/// description, and both halves are trimmed. Whitespace-only lines are skipped.
///
/// Line numbers in errors are 1-based.
pub fn parse_corpus(source: &str) -> Result<Vec<CorpusRecord>, ClassifierError> {
    let mut records = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (title, description) = line.split_once(':').ok_or_else(|| {
            ClassifierError::CorpusFormat {
                line: idx + 1,
                reason: format!("missing ':' separator in {:?}", truncate(line, 60)),
            }
        })?;

        let job_title = title.trim();
        if job_title.is_empty() {
            return Err(ClassifierError::CorpusFormat {
                line: idx + 1,
                reason: "empty job title".to_string(),
            });
        }

        records.push(CorpusRecord {
            job_title: job_title.to_string(),
            description: description.trim().to_string(),
        });
    }

    debug!("Parsed {} corpus records", records.len());
    Ok(records)
}

/// Reads and parses a corpus file.
pub fn read_corpus(path: &Path) -> Result<Vec<CorpusRecord>, ClassifierError> {
    let source = std::fs::read_to_string(path).map_err(|source| ClassifierError::CorpusRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_corpus(&source)
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_splits_on_first_colon_and_trims() {
        let records = parse_corpus("  Engineer :  build systems: fast \n").unwrap();
        assert_eq!(
            records,
            vec![CorpusRecord {
                job_title: "Engineer".to_string(),
                description: "build systems: fast".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_separator_is_format_error() {
        let err = parse_corpus("Nurse: care for patients\nEngineer build systems").unwrap_err();
        match err {
            ClassifierError::CorpusFormat { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected CorpusFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_title_is_format_error() {
        let err = parse_corpus(":orphan description").unwrap_err();
        assert!(matches!(err, ClassifierError::CorpusFormat { line: 1, .. }));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let records = parse_corpus("\nEngineer: code\n   \nNurse: care\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].job_title, "Nurse");
    }

    #[test]
    fn test_empty_source_yields_no_records() {
        assert!(parse_corpus("").unwrap().is_empty());
    }

    #[test]
    fn test_read_corpus_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Accountant: audit financial statements").unwrap();
        let records = read_corpus(file.path()).unwrap();
        assert_eq!(records[0].job_title, "Accountant");
    }

    #[test]
    fn test_read_corpus_missing_file() {
        let err = read_corpus(Path::new("/nonexistent/job_descriptions.txt")).unwrap_err();
        assert!(matches!(err, ClassifierError::CorpusRead { .. }));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé...");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
