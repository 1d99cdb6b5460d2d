pub mod check;
pub mod fields;
pub mod substitute;
pub mod targets;
pub mod wizard;

// Re-export commonly used types
pub use check::{TemplateHealth, TemplateStatus};
pub use fields::{Field, FieldValues, RawUserInput};
pub use targets::{FileTarget, TARGETS};
pub use wizard::Prompter;
