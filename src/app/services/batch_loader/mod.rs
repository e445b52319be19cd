//! Batch import and export of record files
//!
//! Applies the record codec to each non-blank line of a text source,
//! collecting successes into the course and routing per-line failures to
//! an error sink without aborting the batch. The inverse direction maps a
//! course's assignments back to canonical record lines.

pub mod loader;
pub mod report;

pub use loader::BatchLoader;
pub use report::{LineError, LoadReport};

#[cfg(test)]
mod tests;
