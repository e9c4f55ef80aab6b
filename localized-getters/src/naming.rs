//! Method-name synthesis.

use crate::errors::{GenerateError, Result};
use crate::schema::ColumnSchema;

/// Placeholder replaced by the column's identifier name.
pub const PLACEHOLDER: &str = "%s";

/// Name format used when `function_name_format` is not configured.
pub const DEFAULT_FUNCTION_NAME_FORMAT: &str = "get%sUsingLocale";

/// Check that `format` holds exactly one [`PLACEHOLDER`].
pub fn validate_format(format: &str) -> Result<&str> {
    let occurrences = format.matches(PLACEHOLDER).count();
    if occurrences != 1 {
        return Err(GenerateError::InvalidNameFormat {
            format: format.to_string(),
            occurrences,
        });
    }
    Ok(format)
}

/// Substitute the column's identifier name into a validated format.
///
/// The identifier is inserted as-is: no case change, no escaping.
pub fn build_method_name<C: ColumnSchema + ?Sized>(format: &str, column: &C) -> String {
    format.replacen(PLACEHOLDER, column.identifier_name(), 1)
}

/// Derive a PascalCase identifier name from a storage name.
///
/// Splits on `_`, upper-cases the first letter of each part and lower-cases
/// the rest, so `created_at` and `CREATED_AT` both become `CreatedAt`.
pub fn to_identifier_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for part in name.split('_').filter(|part| !part.is_empty()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.extend(chars.flat_map(char::to_lowercase));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Column;

    #[test]
    fn test_validate_format() {
        assert_eq!(validate_format("x%sY"), Ok("x%sY"));
        assert_eq!(validate_format(DEFAULT_FUNCTION_NAME_FORMAT), Ok(DEFAULT_FUNCTION_NAME_FORMAT));
        assert_eq!(
            validate_format("noReplacement"),
            Err(GenerateError::InvalidNameFormat {
                format: "noReplacement".to_string(),
                occurrences: 0,
            })
        );
        assert_eq!(
            validate_format("multipleReplacements%s%s"),
            Err(GenerateError::InvalidNameFormat {
                format: "multipleReplacements%s%s".to_string(),
                occurrences: 2,
            })
        );
    }

    #[test]
    fn test_build_method_name() {
        let column = Column::new("my_date_column", "DATE").with_identifier_name("MyDateColumn");
        assert_eq!(build_method_name("get%sUsingLocale", &column), "getMyDateColumnUsingLocale");
        assert_eq!(build_method_name("%s", &column), "MyDateColumn");
        assert_eq!(
            build_method_name("myWhackyMethodNameFormat%sXD", &column),
            "myWhackyMethodNameFormatMyDateColumnXD"
        );
    }

    #[test]
    fn test_to_identifier_name() {
        assert_eq!(to_identifier_name("created_at"), "CreatedAt");
        assert_eq!(to_identifier_name("CREATED_AT"), "CreatedAt");
        assert_eq!(to_identifier_name("birthday"), "Birthday");
        assert_eq!(to_identifier_name("_last__seen_"), "LastSeen");
    }
}
