//! The interactive setup run: interview, summary, confirmation, then
//! placeholder substitution across the template tree.
//!
//! An abort at the confirmation prompt is a normal exit with zero file
//! modification. File failures are accumulated during substitution and
//! reported together; any failure turns into exit code 1. With `--json`
//! the wizard talks on stderr and stdout carries exactly one JSON
//! document (the report, or an abort marker).

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use provider_setup::fields::FieldValues;
use provider_setup::substitute::{self, SubstitutionReport};
use provider_setup::wizard::Prompter;

pub fn execute(dir: &Path, yes: bool, dry_run: bool, json: bool) -> Result<i32> {
    let stdin = io::stdin();

    let values = if json {
        let mut prompter = Prompter::new(stdin.lock(), io::stderr());
        interview_and_confirm(&mut prompter, yes)?
    } else {
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        interview_and_confirm(&mut prompter, yes)?
    };

    let values = match values {
        Some(values) => values,
        None => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({ "aborted": true }))?
                );
            } else {
                println!("Aborting. No files were changed.");
                println!();
            }
            return Ok(0);
        }
    };

    if !json {
        println!();
        if dry_run {
            println!("Dry run - showing what would be updated.");
        } else {
            println!("Updating files.");
        }
        println!();
    }

    let report = substitute::run(dir, &values, dry_run);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }

    Ok(if report.is_clean() { 0 } else { 1 })
}

/// Interview plus the confirmation gate. `None` means the user declined
/// and nothing must be written.
fn interview_and_confirm<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    yes: bool,
) -> Result<Option<FieldValues>> {
    let values = prompter.interview()?;
    prompter.summary(&values)?;

    if !yes && !prompter.confirm()? {
        return Ok(None);
    }

    Ok(Some(values))
}

fn display_report(report: &SubstitutionReport) {
    for file in &report.updated {
        println!("✓ {} ({} replacements)", file.path, file.replacements);
    }

    if report.failed.is_empty() {
        println!();
        println!("Done.");
    } else {
        println!();
        println!("{}", "Some template files could not be updated:".red().bold());
        for failure in &report.failed {
            println!("  ✗ {}: {}", failure.path.red(), failure.error);
        }
    }
}
