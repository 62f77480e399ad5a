//! Pure filter/sort/paginate engine for table screens.
//!
//! Everything here operates on rows already fetched into memory; no database
//! access, no async. Each screen gets a small state struct whose transitions
//! mirror what its UI controls do, so any frontend can drive them.

pub mod report;
pub mod students;
pub mod table;

pub use table::{Pager, SortDirection, SortState, PAGE_SIZES};
