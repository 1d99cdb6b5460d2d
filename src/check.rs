//! Read-only inspection of the template tree: whether every target file
//! is present, readable, and still carrying the placeholder tokens its
//! table entry lists.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::targets::TARGETS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    /// Every target readable, every expected token present.
    Ready,
    /// Targets readable but some tokens are already gone - the tree
    /// looks like it was set up before.
    Incomplete,
    /// At least one target missing or unreadable.
    Unreadable,
}

impl TemplateStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            TemplateStatus::Ready => 0,
            TemplateStatus::Unreadable => 1,
            TemplateStatus::Incomplete => 2,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateHealth {
    pub status: TemplateStatus,
    pub targets: Vec<TargetStatus>,
}

#[derive(Debug, Serialize)]
pub struct TargetStatus {
    pub path: String,
    pub readable: bool,
    pub present_tokens: Vec<String>,
    pub missing_tokens: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Inspect every target under `root`. Never writes.
pub fn inspect(root: &Path) -> TemplateHealth {
    let mut targets = Vec::new();
    for target in &TARGETS {
        let path = root.join(target.path);
        match fs::read_to_string(&path) {
            Ok(content) => {
                let mut present = Vec::new();
                let mut missing = Vec::new();
                for &field in target.fields {
                    let token = field.token();
                    if content.contains(&token) {
                        present.push(token);
                    } else {
                        missing.push(token);
                    }
                }
                targets.push(TargetStatus {
                    path: target.path.to_string(),
                    readable: true,
                    present_tokens: present,
                    missing_tokens: missing,
                    error: None,
                });
            }
            Err(err) => targets.push(TargetStatus {
                path: target.path.to_string(),
                readable: false,
                present_tokens: Vec::new(),
                missing_tokens: Vec::new(),
                error: Some(err.to_string()),
            }),
        }
    }

    let status = if targets.iter().any(|t| !t.readable) {
        TemplateStatus::Unreadable
    } else if targets.iter().any(|t| !t.missing_tokens.is_empty()) {
        TemplateStatus::Incomplete
    } else {
        TemplateStatus::Ready
    };

    TemplateHealth { status, targets }
}
