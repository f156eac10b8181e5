//! Defines the data structures and models used throughout the application.
//!
//! This covers the static table catalogue that drives the CRUD menus, the catalogue of
//! analytical reports, the values bound into statements and the result sets shown
//! back to the user.

mod entity;
mod report;
mod table;
mod value;

pub use entity::*;
pub use report::*;
pub use table::*;
pub use value::*;
