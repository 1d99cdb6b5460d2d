//! The closed set of values a provider template can reference.
//!
//! Primary fields are collected by the wizard in a fixed order; the two
//! derived fields (`ChromeUrl`, `ShortName`) are computed from the
//! namespace and never prompted for. Every placeholder lookup goes
//! through the `Field` enum, so a target table entry referencing an
//! unresolvable field cannot exist.

/// Every value a template file can reference, primary and derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    AddonAuthor,
    Email,
    AddonName,
    AddonDescription,
    AddonHomepage,
    NameSpace,
    Id,
    MenuName,
    ChromeUrl,
    ShortName,
}

impl Field {
    /// Primary fields in entry order, as prompted and as shown in the
    /// confirmation summary.
    pub const PRIMARY: [Field; 8] = [
        Field::AddonAuthor,
        Field::Email,
        Field::AddonName,
        Field::AddonDescription,
        Field::AddonHomepage,
        Field::NameSpace,
        Field::Id,
        Field::MenuName,
    ];

    /// Name of the field as it appears inside placeholder tokens.
    pub fn name(self) -> &'static str {
        match self {
            Field::AddonAuthor => "AddonAuthor",
            Field::Email => "Email",
            Field::AddonName => "AddonName",
            Field::AddonDescription => "AddonDescription",
            Field::AddonHomepage => "AddonHomepage",
            Field::NameSpace => "NameSpace",
            Field::Id => "ID",
            Field::MenuName => "MenuName",
            Field::ChromeUrl => "ChromeUrl",
            Field::ShortName => "ShortName",
        }
    }

    /// The literal marker embedded in template files, e.g.
    /// `__ProviderChromeUrl__`. Matching is case-sensitive and
    /// whole-occurrence; there is no escaping.
    pub fn token(self) -> String {
        format!("__Provider{}__", self.name())
    }
}

/// A line of free text exactly as the user entered it, with only the
/// line terminator stripped.
///
/// Nothing else is touched - leading and trailing spaces stay part of
/// the value and are inserted verbatim during substitution, and nothing
/// is validated. The type marks the boundary where a validator could be
/// inserted later without touching substitution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawUserInput(String);

impl RawUserInput {
    pub fn new(line: &str) -> Self {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Self(line.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// The eight primary answers, in entry order.
#[derive(Debug)]
pub struct PrimaryInputs {
    pub addon_author: RawUserInput,
    pub email: RawUserInput,
    pub addon_name: RawUserInput,
    pub addon_description: RawUserInput,
    pub addon_homepage: RawUserInput,
    pub name_space: RawUserInput,
    pub id: RawUserInput,
    pub menu_name: RawUserInput,
}

/// Immutable, fully-populated set of resolved values.
///
/// Constructed once after all prompts complete; `resolve` is total over
/// `Field`, so substitution can never hit an unresolved placeholder.
#[derive(Clone, Debug)]
pub struct FieldValues {
    addon_author: String,
    email: String,
    addon_name: String,
    addon_description: String,
    addon_homepage: String,
    name_space: String,
    id: String,
    menu_name: String,
    chrome_url: String,
    short_name: String,
}

impl FieldValues {
    pub fn new(inputs: PrimaryInputs) -> Self {
        let chrome_url = derive_chrome_url(inputs.name_space.as_str());
        let short_name = derive_short_name(inputs.name_space.as_str());
        Self {
            addon_author: inputs.addon_author.into_inner(),
            email: inputs.email.into_inner(),
            addon_name: inputs.addon_name.into_inner(),
            addon_description: inputs.addon_description.into_inner(),
            addon_homepage: inputs.addon_homepage.into_inner(),
            name_space: inputs.name_space.into_inner(),
            id: inputs.id.into_inner(),
            menu_name: inputs.menu_name.into_inner(),
            chrome_url,
            short_name,
        }
    }

    pub fn resolve(&self, field: Field) -> &str {
        match field {
            Field::AddonAuthor => &self.addon_author,
            Field::Email => &self.email,
            Field::AddonName => &self.addon_name,
            Field::AddonDescription => &self.addon_description,
            Field::AddonHomepage => &self.addon_homepage,
            Field::NameSpace => &self.name_space,
            Field::Id => &self.id,
            Field::MenuName => &self.menu_name,
            Field::ChromeUrl => &self.chrome_url,
            Field::ShortName => &self.short_name,
        }
    }
}

/// `ChromeUrl` keeps the namespace exactly as entered.
pub fn derive_chrome_url(namespace: &str) -> String {
    format!("{namespace}4tbsync")
}

pub fn derive_short_name(namespace: &str) -> String {
    format!("{}-4-TbSync", namespace.to_uppercase())
}
