//! Column selection.

use crate::errors::{GenerateError, Result};
use crate::schema::{ColumnSchema, TableSchema};

/// Columns that receive a getter, in the order their methods are emitted.
///
/// With no explicit list, every temporal column is selected in table order.
/// Otherwise the comma-separated names are resolved in the order given; each
/// must exist and be temporal. Empty entries (`"a,,b"`) are skipped and a
/// name listed twice is only selected once.
pub fn select_columns<'t, T: TableSchema>(table: &'t T, columns: Option<&str>) -> Result<Vec<&'t T::Column>> {
    let names = parse_column_list(columns.unwrap_or_default());
    if names.is_empty() {
        return Ok(table.columns().filter(|c| c.is_temporal()).collect());
    }

    let mut selected: Vec<&T::Column> = Vec::with_capacity(names.len());
    for name in names {
        let column = temporal_column_by_name(table, name)?;
        if selected.iter().any(|c| c.name() == column.name()) {
            log::debug!("column \"{name}\" listed more than once for table \"{}\"", table.name());
            continue;
        }
        selected.push(column);
    }
    Ok(selected)
}

/// Split a `columns` option into trimmed, non-empty names.
pub fn parse_column_list(columns: &str) -> Vec<&str> {
    columns.split(',').map(str::trim).filter(|name| !name.is_empty()).collect()
}

fn temporal_column_by_name<'t, T: TableSchema>(table: &'t T, name: &str) -> Result<&'t T::Column> {
    let column = table.column(name).ok_or_else(|| GenerateError::ColumnNotFound {
        column: name.to_string(),
        table: table.name().to_string(),
    })?;
    if !column.is_temporal() {
        return Err(GenerateError::NotATemporalColumn {
            column: name.to_string(),
            table: table.name().to_string(),
            sql_type: column.sql_type().to_string(),
        });
    }
    Ok(column)
}
