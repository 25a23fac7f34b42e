//! Per-line classification into code, comment, and blank
//!
//! Classification is line-oriented and deliberately approximate: there
//! is no lexer. Two policy decisions are explicit and covered by tests
//! rather than being treated as bugs:
//!
//! - A line holding code plus a trailing same-line comment counts as
//!   code (no split counting). A trailing unclosed block opener still
//!   flips the block-comment state.
//! - Comment tokens inside string literals are not excluded; they
//!   trigger comment state like real comments.

use std::path::Path;

use tracing::warn;

use crate::models::FileRecord;
use crate::scan::languages::{descriptor_for_extension, LanguageDescriptor, OTHER_LANGUAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Tracks whether the classifier is inside an open block comment.
/// Block comments are not nested.
#[derive(Debug, Default)]
struct BlockState {
    in_block: bool,
}

/// Classify every physical line of `path` and produce a [`FileRecord`].
///
/// Unmapped extensions are still counted (language "Other", code/blank
/// only). An empty file yields a valid all-zero record; a file that
/// cannot be read yields None with a warning so a single bad file
/// never poisons the aggregate.
pub fn classify_file(path: &Path) -> Option<FileRecord> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let descriptor = descriptor_for_extension(extension);
    let language = descriptor.map(|d| d.name).unwrap_or(OTHER_LANGUAGE);

    let mut record = FileRecord {
        path: path.to_path_buf(),
        language: language.to_string(),
        total_lines: 0,
        code_lines: 0,
        comment_lines: 0,
        blank_lines: 0,
    };

    // Lossy decoding: source trees routinely contain a stray latin-1
    // file, and a misread character cannot change a line count.
    let content = match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!("Skipping unreadable file {:?}: {}", path, e);
            return None;
        }
    };

    let mut state = BlockState::default();
    for line in content.lines() {
        record.total_lines += 1;
        match classify_line(line.trim(), descriptor, &mut state) {
            LineKind::Blank => record.blank_lines += 1,
            LineKind::Comment => record.comment_lines += 1,
            LineKind::Code => record.code_lines += 1,
        }
    }

    Some(record)
}

fn classify_line(
    trimmed: &str,
    descriptor: Option<&'static LanguageDescriptor>,
    state: &mut BlockState,
) -> LineKind {
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    let Some(descriptor) = descriptor else {
        // No comment syntax known: everything non-blank is code.
        return LineKind::Code;
    };

    if state.in_block {
        if let Some((_, end)) = descriptor.block_comment {
            if trimmed.contains(end) {
                state.in_block = false;
            }
        }
        return LineKind::Comment;
    }

    if let Some(prefix) = descriptor.line_comment {
        if trimmed.starts_with(prefix) {
            return LineKind::Comment;
        }
    }

    if let Some((start, end)) = descriptor.block_comment {
        if let Some(idx) = trimmed.find(start) {
            let after_start = &trimmed[idx + start.len()..];
            if !after_start.contains(end) {
                state.in_block = true;
            }
            if idx == 0 {
                return LineKind::Comment;
            }
            // Code with a trailing comment counts as code.
        }
    }

    LineKind::Code
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn classify_source(name: &str, source: &str) -> FileRecord {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(name);
        std::fs::write(&path, source).expect("write source");
        classify_file(&path).expect("readable file")
    }

    #[test]
    fn counts_sum_to_total() {
        let record = classify_source(
            "lib.rs",
            "// header\n\nfn main() {\n    let x = 1; // trailing\n}\n",
        );
        assert_eq!(
            record.total_lines,
            record.code_lines + record.comment_lines + record.blank_lines
        );
        assert_eq!(record.total_lines, 5);
    }

    #[test]
    fn blank_comment_code_split() {
        let record = classify_source("app.py", "# comment\n\nx = 1\n   \ny = 2  # trailing\n");
        assert_eq!(record.blank_lines, 2);
        assert_eq!(record.comment_lines, 1);
        assert_eq!(record.code_lines, 2);
        assert_eq!(record.language, "Python");
    }

    #[test]
    fn block_comment_region_is_tracked() {
        let record = classify_source(
            "main.c",
            "/*\n * licensed\n */\nint main(void) {\n    return 0;\n}\n",
        );
        assert_eq!(record.comment_lines, 3);
        assert_eq!(record.code_lines, 3);
    }

    #[test]
    fn single_line_block_comment_does_not_open_region() {
        let record = classify_source("x.c", "/* one liner */\nint x;\n");
        assert_eq!(record.comment_lines, 1);
        assert_eq!(record.code_lines, 1);
    }

    #[test]
    fn trailing_comment_line_counts_as_code() {
        let record = classify_source("x.c", "int x; /* note */\nint y;\n");
        assert_eq!(record.code_lines, 2);
        assert_eq!(record.comment_lines, 0);
    }

    #[test]
    fn code_with_trailing_open_block_flips_state() {
        let record = classify_source("x.c", "int x; /* begins here\nstill inside\n*/\nint y;\n");
        // Line 1 is code, lines 2-3 are comment, line 4 is code.
        assert_eq!(record.code_lines, 2);
        assert_eq!(record.comment_lines, 2);
    }

    #[test]
    fn comment_token_inside_string_triggers_state() {
        // Documented simplification: the opener inside the literal is
        // honored, so the following line is treated as comment.
        let record = classify_source("x.c", "char *s = \"/*\";\nint y;\n*/\n");
        assert_eq!(record.code_lines, 1);
        assert_eq!(record.comment_lines, 2);
    }

    #[test]
    fn html_block_comments() {
        let record = classify_source(
            "page.html",
            "<!-- banner -->\n<div>\n<!--\nmultiline\n-->\n</div>\n",
        );
        assert_eq!(record.comment_lines, 4);
        assert_eq!(record.code_lines, 2);
    }

    #[test]
    fn sql_dash_comments() {
        let record = classify_source("q.sql", "-- select users\nSELECT * FROM users;\n");
        assert_eq!(record.comment_lines, 1);
        assert_eq!(record.code_lines, 1);
    }

    #[test]
    fn unknown_extension_counts_code_and_blank_only() {
        let record = classify_source("notes.xyz", "# looks like a comment\n\ndata\n");
        assert_eq!(record.language, "Other");
        assert_eq!(record.code_lines, 2);
        assert_eq!(record.comment_lines, 0);
        assert_eq!(record.blank_lines, 1);
    }

    #[test]
    fn missing_file_yields_none() {
        assert!(classify_file(Path::new("/nonexistent/costwise/file.rs")).is_none());
    }

    #[test]
    fn empty_file_is_a_valid_zero_record() {
        let record = classify_source("empty.rs", "");
        assert_eq!(record.total_lines, 0);
        assert_eq!(record.code_lines, 0);
        assert_eq!(record.language, "Rust");
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("weird.py");
        std::fs::write(&path, b"x = 1\n\xff\xfe broken\n# done\n").expect("write");
        let record = classify_file(&path).expect("readable file");
        assert_eq!(record.total_lines, 3);
        assert_eq!(record.comment_lines, 1);
    }
}
