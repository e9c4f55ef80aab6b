//! Build-time generator for locale-aware date getters.
//!
//! Given a table schema and a [`GetterConfig`], this crate renders the PHP
//! source of one accessor method per temporal column. Each accessor returns
//! the raw column value, or the value formatted through `strftime` (basic
//! template) or `IntlDateFormatter` (locale-aware template) when a pattern is
//! supplied.
//!
//! # Example
//!
//! ```
//! use localized_getters::{Column, GetterConfig, LocalizedDateBehavior, Table};
//!
//! let table = Table::new("book")
//!     .with_column(Column::new("published_at", "TIMESTAMP"))
//!     .with_column(Column::new("title", "VARCHAR"));
//!
//! let code = LocalizedDateBehavior::new(&table, GetterConfig::default())
//!     .object_methods()
//!     .unwrap();
//!
//! assert!(code.contains("public function getPublishedAtUsingLocale($format = null)"));
//! assert!(!code.contains("getTitleUsingLocale"));
//! ```

pub mod config;
pub mod errors;
pub mod generator;
pub mod locale;
pub mod naming;
pub mod schema;
pub mod selector;
pub mod template;

pub use config::{ConfigError, GetterConfig};
pub use errors::{GenerateError, Result};
pub use generator::LocalizedDateBehavior;
pub use schema::{Column, ColumnSchema, Table, TableSchema, TemporalType};
pub use template::Template;
