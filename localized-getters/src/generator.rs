//! Generation entry point.

use crate::config::GetterConfig;
use crate::errors::Result;
use crate::naming::{build_method_name, validate_format};
use crate::schema::{ColumnSchema, TableSchema};
use crate::selector::select_columns;
use crate::template::{Template, render_method};

/// Generates localized date getters for one table.
///
/// The behavior holds no state besides its table and parameters, so the same
/// instance always produces the same output.
pub struct LocalizedDateBehavior<'t, T: TableSchema> {
    table: &'t T,
    config: GetterConfig,
}

impl<'t, T: TableSchema> LocalizedDateBehavior<'t, T> {
    pub fn new(table: &'t T, config: GetterConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &'t T {
        self.table
    }

    /// Render the getter methods for every selected column, joined by newlines
    /// in selection order.
    ///
    /// Fails without producing output if the name format is invalid or an
    /// explicitly listed column is missing or not temporal. The format is
    /// checked before any column is selected, so an invalid format fails even
    /// for a table without date columns.
    pub fn object_methods(&self) -> Result<String> {
        let format = validate_format(&self.config.function_name_format)?;
        let columns = select_columns(self.table, self.config.columns())?;
        let template = Template::select(self.config.use_intl, Some(self.config.default_locale.as_str()));

        log::debug!(
            "generating {} localized getter(s) for table \"{}\" ({} template)",
            columns.len(),
            self.table.name(),
            if template.is_locale_aware() { "intl" } else { "strftime" }
        );

        let methods: Vec<String> = columns
            .into_iter()
            .map(|column| {
                let method_name = build_method_name(format, column);
                log::trace!("rendering {method_name}() for column \"{}\"", column.name());
                render_method(&method_name, column, &template)
            })
            .collect();

        Ok(methods.join("\n"))
    }
}
