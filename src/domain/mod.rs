//! Domain layer - Registry document model and date rules

pub mod contact;
pub mod document;
pub mod line;
pub mod offset;
pub mod registry;
pub mod section;

pub use contact::{Contact, SupportStatus};
pub use document::{BumpResult, Diagnostic, Document, Entry, ParseOutcome};
pub use line::{Line, MalformedLine, DATE_FORMAT};
pub use offset::BumpOffset;
pub use registry::RegistryKind;
pub use section::Section;
