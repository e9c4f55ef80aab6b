//! Method-body templates.
//!
//! Both templates emit a documented PHP method that returns the raw column
//! value when no pattern is given, `null` when the value is not a
//! `\DateTimeInterface`, and the formatted value otherwise. They differ only
//! in the formatting call and in the extra `$locale` parameter.

use std::fmt::Write;

use crate::locale::resolve_default_locale_literal;
use crate::schema::ColumnSchema;

/// Which method body to render. Chosen once per generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// `strftime` formatting, one `$format` parameter.
    Basic,
    /// `IntlDateFormatter` formatting, `$format` plus `$locale` defaulting to
    /// `locale_literal`.
    LocaleAware { locale_literal: String },
}

impl Template {
    /// Pick the template for the `use_intl` flag, resolving the locale
    /// literal when the locale-aware template is selected.
    pub fn select(use_intl: bool, default_locale: Option<&str>) -> Self {
        if use_intl {
            Template::LocaleAware {
                locale_literal: resolve_default_locale_literal(default_locale),
            }
        } else {
            Template::Basic
        }
    }

    pub fn is_locale_aware(&self) -> bool {
        matches!(self, Template::LocaleAware { .. })
    }
}

/// Render one getter method for `column` named `method_name`.
///
/// The fragment starts with an empty line and ends with the closing brace,
/// without a trailing newline.
pub fn render_method<C: ColumnSchema + ?Sized>(method_name: &str, column: &C, template: &Template) -> String {
    let mut content = String::new();
    let _ = writeln!(content);
    match template {
        Template::Basic => write_basic(&mut content, method_name),
        Template::LocaleAware { locale_literal } => write_locale_aware(&mut content, method_name, locale_literal),
    }
    write_body(&mut content, column.name(), template);
    content
}

fn write_basic(content: &mut String, method_name: &str) {
    let _ = writeln!(content, "/**");
    let _ = writeln!(
        content,
        " * Get the [optionally formatted] temporal [date] column value using strftime, which supports localization."
    );
    let _ = writeln!(content, " *");
    let _ = writeln!(content, " * @param string|null $format The date/time format string in strftime()-style.");
    let _ = writeln!(content, " *   If format is NULL, then the raw DateTime object will be returned.");
    let _ = writeln!(content, " *");
    let _ = writeln!(
        content,
        " * @return string|DateTime|null Formatted date/time value as string or DateTime object (if format is NULL), \
         NULL if column is NULL, and 0 if column value is 0000-00-00"
    );
    let _ = writeln!(content, " *");
    let _ = writeln!(content, " * @throws PropelException - if unable to parse/validate the date/time value.");
    let _ = writeln!(content, " *");
    let _ = writeln!(content, " * @link http://php.net/strftime");
    let _ = writeln!(content, " * @see strftime()");
    let _ = writeln!(content, " */");
    let _ = writeln!(content, "public function {method_name}($format = null)");
}

fn write_locale_aware(content: &mut String, method_name: &str, locale_literal: &str) {
    let _ = writeln!(content, "/**");
    let _ = writeln!(
        content,
        " * Get the [optionally formatted] temporal [date] column value using IntlDateFormatter, which supports localization."
    );
    let _ = writeln!(content, " *");
    let _ = writeln!(content, " * @param string|null $format The date/time pattern in ICU format.");
    let _ = writeln!(content, " *   If format is NULL, then the raw DateTime object will be returned.");
    let _ = writeln!(
        content,
        " * @param string|null $locale The locale to format with, NULL to use the default locale (Locale::getDefault())."
    );
    let _ = writeln!(content, " *");
    let _ = writeln!(
        content,
        " * @return string|DateTime|null|false Formatted date/time value as string or DateTime object (if format is NULL), \
         NULL if column is NULL, and FALSE if formatting fails"
    );
    let _ = writeln!(content, " *");
    let _ = writeln!(content, " * @throws PropelException - if unable to parse/validate the date/time value.");
    let _ = writeln!(content, " *");
    let _ = writeln!(content, " * @link http://php.net/intldateformatter.formatobject");
    let _ = writeln!(content, " * @see IntlDateFormatter::formatObject()");
    let _ = writeln!(content, " */");
    let _ = writeln!(
        content,
        "public function {method_name}($format = null, $locale = {locale_literal})"
    );
}

fn write_body(content: &mut String, field: &str, template: &Template) {
    let _ = writeln!(content, "{{");
    let _ = writeln!(content, "    $value = $this->{field};");
    let _ = writeln!(content, "    if ($format === null) {{");
    let _ = writeln!(content, "        return $value;");
    let _ = writeln!(content, "    }}");
    let _ = writeln!(content, "    if (!$value instanceof \\DateTimeInterface) {{");
    let _ = writeln!(content, "        return null;");
    let _ = writeln!(content, "    }}");
    match template {
        Template::Basic => {
            let _ = writeln!(content, "    return strftime($format, $value->getTimestamp());");
        }
        Template::LocaleAware { .. } => {
            let _ = writeln!(content, "    return \\IntlDateFormatter::formatObject($value, $format, $locale);");
        }
    }
    content.push('}');
}
