//! Default-locale literal for the locale-aware template.

/// Token that selects the runtime's default locale.
pub const NULL_LOCALE: &str = "null";

/// Turn the `default_locale` option into a PHP expression.
///
/// An absent option or the token `null` yields the bare `null` keyword; any
/// other value becomes a double-quoted string literal.
pub fn resolve_default_locale_literal(default_locale: Option<&str>) -> String {
    match default_locale {
        None | Some(NULL_LOCALE) => NULL_LOCALE.to_string(),
        Some(locale) => quote_php_string(locale),
    }
}

fn quote_php_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '\\' | '"' | '$' => {
                quoted.push('\\');
                quoted.push(ch);
            }
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
