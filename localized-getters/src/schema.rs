//! Read-only view of the host's table schema.
//!
//! The generator only needs a handful of accessors from the host ORM's
//! schema model, so they are expressed as two small traits. [`Table`] and
//! [`Column`] are plain in-memory implementations for hosts that do not
//! already have a schema model of their own.

use crate::naming::to_identifier_name;

/// SQL types that receive a localized getter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalType {
    Date,
    DateTime,
    Timestamp,
}

impl TemporalType {
    pub const ALL: [TemporalType; 3] = [TemporalType::Date, TemporalType::DateTime, TemporalType::Timestamp];

    /// Tag as it appears in the schema (`DATE`, `DATETIME`, `TIMESTAMP`).
    pub fn as_str(self) -> &'static str {
        match self {
            TemporalType::Date => "DATE",
            TemporalType::DateTime => "DATETIME",
            TemporalType::Timestamp => "TIMESTAMP",
        }
    }

    /// Match a schema type tag. Tags are compared exactly.
    pub fn from_sql_type(sql_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == sql_type)
    }
}

/// A single column as seen by the generator.
pub trait ColumnSchema {
    /// Storage name, used as the backing property inside generated code.
    fn name(&self) -> &str;

    /// Code-safe name used to build method names (e.g. `CreatedAt`).
    fn identifier_name(&self) -> &str;

    /// Declared SQL type tag.
    fn sql_type(&self) -> &str;

    fn temporal_type(&self) -> Option<TemporalType> {
        TemporalType::from_sql_type(self.sql_type())
    }

    fn is_temporal(&self) -> bool {
        self.temporal_type().is_some()
    }
}

/// An ordered collection of columns keyed by name.
pub trait TableSchema {
    type Column: ColumnSchema;

    /// Table name, used in error messages.
    fn name(&self) -> &str;

    /// Look up a column by its storage name.
    fn column(&self, name: &str) -> Option<&Self::Column>;

    /// All columns in declaration order.
    fn columns(&self) -> impl Iterator<Item = &Self::Column>;

    fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}

/// In-memory column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    identifier_name: String,
    sql_type: String,
}

impl Column {
    /// Create a column whose identifier name is derived from `name`
    /// (`created_at` becomes `CreatedAt`).
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        let name = name.into();
        let identifier_name = to_identifier_name(&name);
        Self {
            name,
            identifier_name,
            sql_type: sql_type.into(),
        }
    }

    /// Override the derived identifier name.
    pub fn with_identifier_name(mut self, identifier_name: impl Into<String>) -> Self {
        self.identifier_name = identifier_name.into();
        self
    }
}

impl ColumnSchema for Column {
    fn name(&self) -> &str {
        &self.name
    }

    fn identifier_name(&self) -> &str {
        &self.identifier_name
    }

    fn sql_type(&self) -> &str {
        &self.sql_type
    }
}

/// In-memory table definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column. A column with the same name replaces the earlier one
    /// in place.
    pub fn add_column(&mut self, column: Column) {
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.add_column(column);
        self
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl TableSchema for Table {
    type Column = Column;

    fn name(&self) -> &str {
        &self.name
    }

    fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }
}
