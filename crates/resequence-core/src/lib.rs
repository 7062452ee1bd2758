//! Gap-free renumbering of sequentially named files.
//!
//! Given a flat directory of files like `3.jpg, 1.jpg, 7.jpg, notes.jpg`,
//! the [`Resequencer`] renames them to `2.jpg, 1.jpg, 3.jpg, 4.jpg` so the
//! result is a dense `1..N` sequence that preserves the original relative
//! order. Renames go through a disjoint staging namespace so no rename
//! ever targets an occupied name.

pub mod entry;
pub mod error;
pub mod resequencer;

pub use entry::{Entry, NamePattern, SortKey};
pub use error::{ResequenceError, Result};
pub use resequencer::{
    PlannedRename, RenameFailure, RenamePass, RenameReport, Renamed, Resequencer, TEMP_PREFIX,
};
