use thiserror::Error;

/// Failures raised while generating getters for a table.
///
/// Every variant aborts generation for the whole table; no partial output is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// An explicitly requested column does not exist.
    #[error(
        "Error when resolving behavior \"localized_date\": column \"{column}\" is not available in table \"{table}\""
    )]
    ColumnNotFound { column: String, table: String },

    /// An explicitly requested column exists but is not a DATE, DATETIME or TIMESTAMP column.
    #[error(
        "Error when resolving behavior \"localized_date\": column \"{column}\" in table \"{table}\" is not a date column, but \"{sql_type}\""
    )]
    NotATemporalColumn {
        column: String,
        table: String,
        sql_type: String,
    },

    /// The `function_name_format` parameter does not hold exactly one `%s`.
    #[error(
        "Error when resolving behavior \"localized_date\": \
         parameter \"function_name_format\" must contain exactly one occurrence of \"%s\" \
         (i.e. \"get%sWithLocalNames\" to generate function names like \"getMyDateColumnWithLocalNames()\"); \
         supplied value is \"{format}\" ({occurrences} occurrences)"
    )]
    InvalidNameFormat { format: String, occurrences: usize },
}

/// Result alias for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;
