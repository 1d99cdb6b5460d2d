//! Health check for the template tree: is every target file present,
//! readable, and still carrying the placeholder tokens it should.
//!
//! Read-only. Exit code 0 when every target is readable and complete,
//! 1 when any target is unreadable, 2 when targets are readable but
//! tokens are already gone (a tree that was scaffolded before).

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use provider_setup::check::{self, TemplateHealth, TemplateStatus};

pub fn execute(dir: &Path, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Checking template files in {}...", dir.display());
        println!();
    }

    let health = check::inspect(dir);

    if json {
        println!("{}", serde_json::to_string_pretty(&health)?);
    } else {
        display_health(&health);
    }

    Ok(health.status.exit_code())
}

fn display_health(health: &TemplateHealth) {
    for target in &health.targets {
        if !target.readable {
            let detail = target.error.as_deref().unwrap_or("unreadable");
            println!("  ✗ {}: {}", target.path.red(), detail);
        } else if target.missing_tokens.is_empty() {
            println!("  ✓ {}", target.path);
        } else {
            println!(
                "  ⚠️  {} (already filled: {})",
                target.path.yellow(),
                target.missing_tokens.join(", ")
            );
        }
    }

    println!();
    match health.status {
        TemplateStatus::Ready => println!("Template is ready for setup."),
        TemplateStatus::Incomplete => println!(
            "{}",
            "Some placeholders are already gone - this tree may have been set up before.".yellow()
        ),
        TemplateStatus::Unreadable => {
            println!("{}", "Some template files are missing or unreadable.".red())
        }
    }
}
