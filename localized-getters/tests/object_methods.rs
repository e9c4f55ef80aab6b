use localized_getters::{Column, GenerateError, GetterConfig, LocalizedDateBehavior, Table, TableSchema};

const DATE_COLUMNS: [(&str, &str); 3] = [
    ("DATE", "MyDateColumn"),
    ("DATETIME", "MyDatetimeColumn"),
    ("TIMESTAMP", "MyTimestampColumn"),
];

const NON_DATE_COLUMNS: [(&str, &str); 1] = [("INTEGER", "MyNonDateColumn")];

fn mock_table() -> Table {
    let mut table = Table::new("TestTable");
    for (sql_type, name) in DATE_COLUMNS.iter().chain(NON_DATE_COLUMNS.iter()) {
        table.add_column(Column::new(*name, *sql_type).with_identifier_name(*name));
    }
    table
}

fn apply_behavior(parameters: &[(&str, &str)]) -> Result<String, GenerateError> {
    let table = mock_table();
    let config = GetterConfig::from_parameters(parameters.iter().copied());
    LocalizedDateBehavior::new(&table, config).object_methods()
}

fn header(name: &str) -> String {
    format!("public function {name}(")
}

#[test]
fn generates_code() {
    let script = apply_behavior(&[]).unwrap();
    assert!(script.contains("public function"));
}

#[test]
fn generates_a_getter_for_every_date_column() {
    let script = apply_behavior(&[]).unwrap();
    for (_, name) in DATE_COLUMNS {
        assert!(script.contains(&header(&format!("get{name}UsingLocale"))), "missing getter for {name}");
    }
    assert_eq!(script.matches("public function").count(), DATE_COLUMNS.len());
}

#[test]
fn ignores_non_date_columns() {
    let script = apply_behavior(&[]).unwrap();
    assert!(!script.contains(&header("getMyNonDateColumnUsingLocale")));
}

#[test]
fn columns_parameter_selects_columns() {
    let script = apply_behavior(&[("columns", "MyDateColumn, MyTimestampColumn")]).unwrap();
    assert!(script.contains(&header("getMyDateColumnUsingLocale")));
    assert!(script.contains(&header("getMyTimestampColumnUsingLocale")));
    assert!(!script.contains(&header("getMyDatetimeColumnUsingLocale")));
}

#[test]
fn columns_parameter_sets_method_order() {
    let script = apply_behavior(&[("columns", "MyTimestampColumn,MyDateColumn")]).unwrap();
    let timestamp = script.find(&header("getMyTimestampColumnUsingLocale")).unwrap();
    let date = script.find(&header("getMyDateColumnUsingLocale")).unwrap();
    assert!(timestamp < date);
}

#[test]
fn format_parameter_changes_method_names() {
    let script = apply_behavior(&[("function_name_format", "myWhackyMethodNameFormat%sXD")]).unwrap();
    for (_, name) in DATE_COLUMNS {
        assert!(script.contains(&header(&format!("myWhackyMethodNameFormat{name}XD"))));
    }
}

#[test]
fn unknown_column_aborts_generation() {
    let err = apply_behavior(&[("columns", "MyDateColumn, MyUnknownColumn")]).unwrap_err();
    assert_eq!(
        err,
        GenerateError::ColumnNotFound {
            column: "MyUnknownColumn".to_string(),
            table: "TestTable".to_string(),
        }
    );
    let message = err.to_string();
    assert!(message.contains("\"MyUnknownColumn\""));
    assert!(message.contains("\"TestTable\""));
}

#[test]
fn non_date_column_aborts_generation() {
    let err = apply_behavior(&[("columns", "MyNonDateColumn")]).unwrap_err();
    assert_eq!(
        err,
        GenerateError::NotATemporalColumn {
            column: "MyNonDateColumn".to_string(),
            table: "TestTable".to_string(),
            sql_type: "INTEGER".to_string(),
        }
    );
}

#[test]
fn format_without_placeholder_aborts_generation() {
    let err = apply_behavior(&[("function_name_format", "noReplacement")]).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidNameFormat { occurrences: 0, .. }));
}

#[test]
fn format_with_multiple_placeholders_aborts_generation() {
    let err = apply_behavior(&[("function_name_format", "multipleReplacements%s%s")]).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidNameFormat { occurrences: 2, .. }));
    assert!(err.to_string().contains("multipleReplacements%s%s"));
}

#[test]
fn basic_template_takes_one_parameter() {
    for flag in ["false", "0", "null"] {
        let script = apply_behavior(&[("use_intl", flag)]).unwrap();
        assert!(script.contains("public function getMyDateColumnUsingLocale($format = null)\n"));
        assert!(script.contains("strftime($format, $value->getTimestamp())"));
        assert!(!script.contains("IntlDateFormatter::formatObject("));
    }
}

#[test]
fn use_intl_coercion_is_exact() {
    for flag in ["", "FALSE", "no"] {
        let script = apply_behavior(&[("use_intl", flag)]).unwrap();
        assert!(script.contains("$locale = null)"), "use_intl = {flag:?} should select the intl template");
    }
}

#[test]
fn intl_template_takes_locale_parameter() {
    let script = apply_behavior(&[("use_intl", "true")]).unwrap();
    assert!(script.contains("public function getMyDateColumnUsingLocale($format = null, $locale = null)\n"));
    assert!(script.contains("\\IntlDateFormatter::formatObject($value, $format, $locale)"));
    assert!(!script.contains("strftime($format"));
}

#[test]
fn intl_template_embeds_default_locale() {
    let script = apply_behavior(&[("use_intl", "1"), ("default_locale", "en_US")]).unwrap();
    for (_, name) in DATE_COLUMNS {
        let signature = format!("public function get{name}UsingLocale($format = null, $locale = \"en_US\")");
        assert!(script.contains(&signature), "missing {signature}");
    }

    let script = apply_behavior(&[("use_intl", "1"), ("default_locale", "null")]).unwrap();
    assert!(script.contains("$locale = null)"));
}

#[test]
fn default_locale_is_ignored_by_basic_template() {
    let script = apply_behavior(&[("default_locale", "en_US")]).unwrap();
    assert!(!script.contains("en_US"));
}

#[test]
fn generation_is_deterministic() {
    let table = mock_table();
    let config = GetterConfig::from_parameters([("use_intl", "true"), ("default_locale", "pt_BR")]);
    let behavior = LocalizedDateBehavior::new(&table, config);
    let first = behavior.object_methods().unwrap();
    let second = behavior.object_methods().unwrap();
    assert_eq!(first, second);
    assert_eq!(behavior.table().name(), "TestTable");
}

#[test]
fn getters_read_the_backing_column() {
    let table = Table::new("article").with_column(Column::new("published_at", "TIMESTAMP"));
    let script = LocalizedDateBehavior::new(&table, GetterConfig::default())
        .object_methods()
        .unwrap();
    assert!(script.contains("public function getPublishedAtUsingLocale($format = null)"));
    assert!(script.contains("$value = $this->published_at;"));
}
