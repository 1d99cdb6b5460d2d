//! End-to-end substitution over a template tree on disk.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use provider_setup::fields::{FieldValues, PrimaryInputs, RawUserInput};
use provider_setup::substitute;
use provider_setup::TARGETS;

fn dav_values() -> FieldValues {
    FieldValues::new(PrimaryInputs {
        addon_author: RawUserInput::new("John Bieling"),
        email: RawUserInput::new("john@example.com"),
        addon_name: RawUserInput::new("Provider for DAV"),
        addon_description: RawUserInput::new("Adds CalDAV & CardDAV sync to TbSync"),
        addon_homepage: RawUserInput::new("https://example.com/dav4tbsync"),
        name_space: RawUserInput::new("dav"),
        id: RawUserInput::new("dav4tbsync@example.com"),
        menu_name: RawUserInput::new("CalDAV & CardDAV"),
    })
}

/// Write a minimal template tree containing every target, each file
/// carrying the tokens its table entry lists.
fn write_template_tree(root: &Path) {
    for target in &TARGETS {
        let path = root.join(target.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut content = format!("// {}\n", target.path);
        for field in target.fields {
            content.push_str(&format!("value: {}\n", field.token()));
        }
        fs::write(&path, content).unwrap();
    }
}

#[test]
fn substitution_fills_every_target() {
    let temp = TempDir::new().unwrap();
    write_template_tree(temp.path());

    let report = substitute::run(temp.path(), &dav_values(), false);
    assert!(report.is_clean(), "failures: {:?}", report.failed);
    assert_eq!(report.updated.len(), TARGETS.len());

    for target in &TARGETS {
        let content = fs::read_to_string(temp.path().join(target.path)).unwrap();
        for field in target.fields {
            assert!(
                !content.contains(&field.token()),
                "{} still contains {}",
                target.path,
                field.token()
            );
        }
    }

    // Spot-check the derived values landed where their tokens were.
    let manifest = fs::read_to_string(temp.path().join("chrome.manifest")).unwrap();
    assert!(manifest.contains("value: dav4tbsync\n"));
    let sync = fs::read_to_string(temp.path().join("content/includes/sync.js")).unwrap();
    assert!(sync.contains("value: DAV-4-TbSync\n"));
}

#[test]
fn substitution_preserves_surrounding_bytes() {
    let temp = TempDir::new().unwrap();
    write_template_tree(temp.path());

    let path = temp.path().join("content/manager/createAccount.xul");
    fs::write(&path, "<overlay id=\"__ProviderChromeUrl__\">\n  <box/>\n</overlay>\n").unwrap();

    let report = substitute::run(temp.path(), &dav_values(), false);
    assert!(report.is_clean());

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "<overlay id=\"dav4tbsync\">\n  <box/>\n</overlay>\n");
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    write_template_tree(temp.path());

    let before: Vec<String> = TARGETS
        .iter()
        .map(|t| fs::read_to_string(temp.path().join(t.path)).unwrap())
        .collect();

    let report = substitute::run(temp.path(), &dav_values(), true);
    assert!(report.is_clean());
    assert!(report.dry_run);
    assert_eq!(report.updated.len(), TARGETS.len());
    // Each file carries one occurrence per listed token.
    for (file, target) in report.updated.iter().zip(TARGETS.iter()) {
        assert_eq!(file.replacements, target.fields.len(), "{}", file.path);
    }

    let after: Vec<String> = TARGETS
        .iter()
        .map(|t| fs::read_to_string(temp.path().join(t.path)).unwrap())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn missing_file_is_accumulated_while_the_rest_proceed() {
    let temp = TempDir::new().unwrap();
    write_template_tree(temp.path());
    fs::remove_file(temp.path().join("bootstrap.js")).unwrap();

    let report = substitute::run(temp.path(), &dav_values(), false);
    assert!(!report.is_clean());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, "bootstrap.js");
    assert_eq!(report.updated.len(), TARGETS.len() - 1);

    // The readable targets were still rewritten.
    let contributors = fs::read_to_string(temp.path().join("CONTRIBUTORS.md")).unwrap();
    assert!(contributors.contains("John Bieling"));
}

#[test]
fn declining_the_confirmation_leaves_files_untouched() {
    use provider_setup::Prompter;
    use std::io::Cursor;

    let temp = TempDir::new().unwrap();
    write_template_tree(temp.path());

    let before: Vec<String> = TARGETS
        .iter()
        .map(|t| fs::read_to_string(temp.path().join(t.path)).unwrap())
        .collect();

    // Full interview followed by "no" at the confirmation prompt.
    let input = "A\nb@c\nName\nDesc\nhttps://x\ndav\nid@x\nMenu\nno\n";
    let mut sink = Vec::new();
    let mut prompter = Prompter::new(Cursor::new(input.to_string()), &mut sink);
    let values = prompter.interview().unwrap();
    prompter.summary(&values).unwrap();
    let confirmed = prompter.confirm().unwrap();
    assert!(!confirmed);

    // The pipeline never reaches substitution on abort; the tree must be
    // byte-for-byte identical.
    let after: Vec<String> = TARGETS
        .iter()
        .map(|t| fs::read_to_string(temp.path().join(t.path)).unwrap())
        .collect();
    assert_eq!(before, after);
}
