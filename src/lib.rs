//! upkeep - Maintainer and support registry tool
//!
//! Keeps MAINTAINERS.txt and SUPPORT.txt ledgers: plain-text files of named
//! sections holding dated contact lines. Entries can be renewed, added and
//! pruned while every other line of the file is kept as written.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::UpkeepError;
