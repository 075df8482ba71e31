//! Shared front-end logic for the Beyblade database tools.
//!
//! Everything both binaries need that is not terminal I/O: where the database
//! lives, what each role may do, the menu catalog, and turning query results
//! into printable reports.

pub mod actions;
pub mod permissions;
pub mod report;
pub mod settings;
pub mod table;

pub use actions::{Action, MenuEntry, MenuSection};
pub use permissions::Permissions;
pub use report::Report;
pub use table::Table;
