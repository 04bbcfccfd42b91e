//! Dumps the readable text entries of a single directory.
//!
//! The directory is listed once up front, then every entry is opened and
//! read in listing order. Each entry produces exactly one outcome: either a
//! delimited dump of its contents or a one-line failure notice. Per-entry
//! failures never abort the run.

mod dumper;
mod entry;
mod listing;

pub use dumper::{DirectoryDumper, DumpError, DumpReport};
pub use entry::EntryOutcome;
pub use listing::list_entries;
