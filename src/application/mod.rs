//! Application layer - Use cases and orchestration

pub mod bump;
pub mod check;
pub mod list_entries;
mod loader;
pub mod manage_config;
pub mod prune;
pub mod show;

pub use bump::{BumpOutcome, BumpService};
pub use check::{CheckReport, CheckService, SectionReport};
pub use list_entries::{EntryListing, ListEntriesService, ListedEntry};
pub use manage_config::ConfigService;
pub use prune::PruneService;
pub use show::show_registry;
