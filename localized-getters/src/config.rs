//! Behavior parameters.
//!
//! Parameters arrive either as `name`/`value` string pairs from the host's
//! behavior declaration ([`GetterConfig::from_parameters`]) or from a TOML
//! file ([`GetterConfig::from_toml_file`]). Unknown keys are ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::locale::NULL_LOCALE;
use crate::naming::DEFAULT_FUNCTION_NAME_FORMAT;

/// Errors raised while loading parameters from a file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse behavior parameters: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Fully resolved behavior parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetterConfig {
    /// Method-name template; must hold exactly one `%s`.
    #[serde(default = "default_function_name_format")]
    pub function_name_format: String,

    /// Comma-separated column names. `None` or empty selects every temporal column.
    #[serde(default, deserialize_with = "deserialize_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<String>,

    /// Render the `IntlDateFormatter` template instead of the `strftime` one.
    #[serde(default, deserialize_with = "deserialize_boolean_like")]
    pub use_intl: bool,

    /// Default for the generated `$locale` parameter; `null` means the runtime default.
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl Default for GetterConfig {
    fn default() -> Self {
        Self {
            function_name_format: default_function_name_format(),
            columns: None,
            use_intl: false,
            default_locale: default_locale(),
        }
    }
}

fn default_function_name_format() -> String {
    DEFAULT_FUNCTION_NAME_FORMAT.to_string()
}

fn default_locale() -> String {
    NULL_LOCALE.to_string()
}

impl GetterConfig {
    /// Build a config from host-supplied parameter pairs, starting from the defaults.
    pub fn from_parameters<I, K, V>(parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (name, value) in parameters {
            config.set_parameter(name.as_ref(), value);
        }
        config
    }

    /// Assign one parameter from its string form.
    ///
    /// Returns `false` when the name is not recognized; the value is then ignored.
    pub fn set_parameter(&mut self, name: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        match name {
            "function_name_format" => self.function_name_format = value,
            "columns" => self.columns = Some(value).filter(|v| !v.trim().is_empty()),
            "use_intl" => self.use_intl = parse_boolean_like(&value),
            "default_locale" => self.default_locale = value,
            _ => {
                log::debug!("ignoring unknown behavior parameter \"{name}\"");
                return false;
            }
        }
        true
    }

    /// Parse parameters from TOML.
    ///
    /// Keys may sit at the top level or under a `[parameters]` table.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut document: toml::Table = toml::from_str(content)?;
        let parameters = match document.remove("parameters") {
            Some(toml::Value::Table(parameters)) => parameters,
            Some(other) => {
                document.insert("parameters".to_string(), other);
                document
            }
            None => document,
        };
        Ok(toml::Value::Table(parameters).try_into()?)
    }

    /// Read and parse a TOML parameter file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// The `columns` option, `None` when unset or blank.
    pub fn columns(&self) -> Option<&str> {
        self.columns.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Coerce a textual flag. `false`, `0` and `null` (an absent value spelled
/// out) are off; anything else, including the empty string, is on.
pub fn parse_boolean_like(value: &str) -> bool {
    !matches!(value.trim(), "false" | "0" | "null")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BooleanLike {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl BooleanLike {
    fn is_on(&self) -> bool {
        match self {
            BooleanLike::Bool(b) => *b,
            BooleanLike::Integer(i) => *i != 0,
            BooleanLike::Float(f) => *f != 0.0,
            BooleanLike::Text(s) => parse_boolean_like(s),
        }
    }
}

fn deserialize_boolean_like<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<BooleanLike>::deserialize(deserializer)?;
    Ok(value.is_some_and(|v| v.is_on()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColumnList {
    Text(String),
    List(Vec<String>),
}

fn deserialize_columns<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<ColumnList>::deserialize(deserializer)?;
    let joined = match value {
        Some(ColumnList::Text(text)) => text,
        Some(ColumnList::List(names)) => names.join(","),
        None => return Ok(None),
    };
    Ok(Some(joined).filter(|c| !c.trim().is_empty()))
}
