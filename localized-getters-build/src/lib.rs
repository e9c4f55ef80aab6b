//! Build-time helper that writes localized date getters to a file.
//!
//! Hosts that splice generated methods into their classes from a build
//! script can use this crate to run the generator for one table and keep the
//! output file up to date.
//!
//! # Example
//!
//! In your `build.rs`:
//!
//! ```ignore
//! use localized_getters::{Column, Table};
//!
//! fn main() {
//!     let table = Table::new("book")
//!         .with_column(Column::new("published_at", "TIMESTAMP"));
//!
//!     localized_getters_build::generate_getters(&table)
//!         .parameter("use_intl", "true")
//!         .output_file("generated/BookLocalizedGetters.php")
//!         .run()
//!         .expect("Failed to generate localized getters");
//! }
//! ```

mod builder;

pub use builder::GetterBuild;

use localized_getters::TableSchema;

/// Create a getter build for `table` with default parameters.
pub fn generate_getters<T: TableSchema>(table: &T) -> GetterBuild<'_, T> {
    GetterBuild::new(table)
}
