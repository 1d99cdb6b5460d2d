//! Placeholder substitution across the fixed target table.
//!
//! Every target is read into memory before the first write, which keeps
//! an unreadable file from interleaving with partially rewritten ones.
//! There is still no cross-file transaction: once writing starts, an
//! interrupt leaves earlier files rewritten and later ones untouched.
//! Failures are collected per file and reported together at the end.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::fields::FieldValues;
use crate::targets::{FileTarget, TARGETS};

#[derive(Debug, Serialize)]
pub struct SubstitutionReport {
    pub updated: Vec<FileReport>,
    pub failed: Vec<FileFailure>,
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    /// Token occurrences replaced in this file.
    pub replacements: usize,
}

#[derive(Debug, Serialize)]
pub struct FileFailure {
    pub path: String,
    pub error: String,
}

impl SubstitutionReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Replace every listed token in `content`, returning the substituted
/// text and the number of occurrences replaced.
///
/// Replacement is sequential per field, literal and whole-occurrence -
/// no regex, no escaping. A resolved value that happens to contain
/// another token's shape is inserted verbatim and may be picked up by a
/// later field in the same list; that matches the reference behavior.
pub fn substitute_content(content: &str, target: &FileTarget, values: &FieldValues) -> (String, usize) {
    let mut out = content.to_string();
    let mut replaced = 0;
    for &field in target.fields {
        let token = field.token();
        replaced += out.matches(&token).count();
        out = out.replace(&token, values.resolve(field));
    }
    (out, replaced)
}

/// Run substitution over the whole target table under `root`.
///
/// Phase 1 reads and substitutes every target in memory; phase 2 writes
/// the results back. With `dry_run` set, phase 2 is skipped and the
/// report shows what would have been written.
pub fn run(root: &Path, values: &FieldValues, dry_run: bool) -> SubstitutionReport {
    let mut updated = Vec::new();
    let mut failed = Vec::new();

    let mut pending: Vec<(PathBuf, &'static str, String, usize)> = Vec::new();
    for target in &TARGETS {
        let path = root.join(target.path);
        match fs::read_to_string(&path) {
            Ok(content) => {
                let (out, count) = substitute_content(&content, target, values);
                pending.push((path, target.path, out, count));
            }
            Err(err) => failed.push(FileFailure {
                path: target.path.to_string(),
                error: format!("read failed: {err}"),
            }),
        }
    }

    for (path, rel, content, count) in pending {
        if dry_run {
            updated.push(FileReport {
                path: rel.to_string(),
                replacements: count,
            });
            continue;
        }
        match fs::write(&path, content) {
            Ok(()) => updated.push(FileReport {
                path: rel.to_string(),
                replacements: count,
            }),
            Err(err) => failed.push(FileFailure {
                path: rel.to_string(),
                error: format!("write failed: {err}"),
            }),
        }
    }

    SubstitutionReport {
        updated,
        failed,
        dry_run,
    }
}
