//! The fixed template file set and the placeholders each file carries.
//!
//! The table is fixed at build time; nothing scans arbitrary files for
//! tokens at runtime. Paths are relative to the template root.

use crate::fields::Field;

/// A template file plus the ordered list of placeholders it is known to
/// contain. Replacement order within a file follows this list.
#[derive(Clone, Copy, Debug)]
pub struct FileTarget {
    pub path: &'static str,
    pub fields: &'static [Field],
}

use crate::fields::Field::{
    AddonAuthor, AddonDescription, AddonHomepage, AddonName, ChromeUrl, Email, Id, MenuName,
    NameSpace, ShortName,
};

pub const TARGETS: [FileTarget; 11] = [
    FileTarget {
        path: "CONTRIBUTORS.md",
        fields: &[AddonAuthor],
    },
    FileTarget {
        path: "bootstrap.js",
        fields: &[ShortName, NameSpace, ChromeUrl],
    },
    FileTarget {
        path: "chrome.manifest",
        fields: &[ChromeUrl],
    },
    FileTarget {
        path: "manifest.json",
        fields: &[Id, AddonAuthor, AddonHomepage],
    },
    FileTarget {
        path: "_locales/en-US/messages.json",
        fields: &[AddonName, AddonDescription],
    },
    FileTarget {
        path: "_locales/en-US/provider.dtd",
        fields: &[MenuName],
    },
    FileTarget {
        path: "_locales/en-US/provider.strings",
        fields: &[MenuName],
    },
    FileTarget {
        path: "content/includes/sync.js",
        fields: &[ShortName],
    },
    FileTarget {
        path: "content/provider.js",
        fields: &[ShortName, NameSpace, ChromeUrl, Email],
    },
    FileTarget {
        path: "content/manager/createAccount.js",
        fields: &[ShortName, NameSpace],
    },
    FileTarget {
        path: "content/manager/createAccount.xul",
        fields: &[ChromeUrl],
    },
];
