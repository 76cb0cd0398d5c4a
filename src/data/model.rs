use std::fmt;

// ---------------------------------------------------------------------------
// Value – a single cell of a measurement table
// ---------------------------------------------------------------------------

/// Tokens the reader treats as "no value", on top of the empty string.
const MISSING_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A", "<NA>",
];

/// A dynamically-typed cell value.
///
/// `Missing` is the explicit "no usable value" marker. It is never equal to
/// `Number(0.0)` or to `Text(String::new())`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Missing,
}

impl Value {
    /// Interpret a raw field read from a delimited file.
    ///
    /// Surrounding whitespace is ignored when recognising numbers and missing
    /// tokens. Text cells keep their original spelling.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || MISSING_TOKENS.contains(&trimmed) {
            return Value::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_nan() => Value::Missing,
            Ok(v) => Value::Number(v),
            Err(_) => Value::Text(raw.to_string()),
        }
    }

    /// Numeric view of the cell. Text and missing cells have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Coerce to a number. Cells that cannot be read as one become `Missing`.
    pub fn coerce_numeric(self) -> Self {
        match self {
            Value::Text(s) => match s.trim().parse::<f64>() {
                Ok(v) if !v.is_nan() => Value::Number(v),
                _ => Value::Missing,
            },
            other => other,
        }
    }

    /// Field text as written to a delimited file. Whole numbers keep a
    /// trailing `.0` so float columns read as floats.
    pub fn to_field(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(v) => format!("{v:?}"),
            Value::Missing => String::new(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Number(v) => write!(f, "{v}"),
            Value::Missing => write!(f, "<missing>"),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete in-memory record set
// ---------------------------------------------------------------------------

/// One row: a value per table column, in column order.
pub type Row = Vec<Value>;

/// Ordered rows sharing one column schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Column names in header order.
    pub columns: Vec<String>,
    /// Rows in source order; every row has `columns.len()` cells.
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Position of a column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell lookup by row number and column name.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    /// Iterate over one column's cells.
    pub fn column_values<'a>(&'a self, column: &str) -> impl Iterator<Item = &'a Value> + 'a {
        let idx = self.column_index(column);
        self.rows
            .iter()
            .filter_map(move |r| idx.and_then(|i| r.get(i)))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parse_distinguishes_number_text_and_missing() {
        assert_eq!(Value::parse("7.5"), Value::Number(7.5));
        assert_eq!(Value::parse("-2"), Value::Number(-2.0));
        assert_eq!(Value::parse("Gadus morhua"), Value::Text("Gadus morhua".into()));
        assert_eq!(Value::parse(""), Value::Missing);
        assert_eq!(Value::parse("N/A"), Value::Missing);
        assert_eq!(Value::parse("NaN"), Value::Missing);
    }

    #[test]
    fn parse_ignores_padding_around_numbers_and_tokens() {
        assert_eq!(Value::parse(" 7"), Value::Number(7.0));
        assert_eq!(Value::parse("8.1 "), Value::Number(8.1));
        assert_eq!(Value::parse("  "), Value::Missing);
        assert_eq!(Value::parse(" N/A "), Value::Missing);
        assert_eq!(Value::parse(" Aurelia "), Value::Text(" Aurelia ".into()));
    }

    #[test]
    fn missing_is_not_zero_or_empty_text() {
        assert_ne!(Value::Missing, Value::Number(0.0));
        assert_ne!(Value::Missing, Value::Text(String::new()));
        assert_eq!(Value::Missing.as_f64(), None);
    }

    #[test]
    fn coerce_numeric_turns_garbage_into_missing() {
        assert_eq!(Value::Text(" 12.5 ".into()).coerce_numeric(), Value::Number(12.5));
        assert_eq!(Value::Text("warm".into()).coerce_numeric(), Value::Missing);
        assert_eq!(Value::Number(3.0).coerce_numeric(), Value::Number(3.0));
        assert_eq!(Value::Missing.coerce_numeric(), Value::Missing);
    }

    #[test]
    fn number_fields_parse_back_unchanged() {
        for v in [7.0, 0.1, 35.123456789, -1.5e-7] {
            let field = Value::Number(v).to_field();
            assert_eq!(Value::parse(&field), Value::Number(v));
        }
        assert_eq!(Value::Number(8.0).to_field(), "8.0");
        assert_eq!(Value::Number(7.25).to_field(), "7.25");
        assert_eq!(Value::Missing.to_field(), "");
    }

    #[test]
    fn lookup_by_column_name() {
        let mut table = Table::new(vec!["species".into(), "ph".into()]);
        table.rows.push(vec![Value::Text("Aurelia".into()), Value::Number(8.1)]);

        assert_eq!(table.value(0, "ph"), Some(&Value::Number(8.1)));
        assert_eq!(table.value(0, "depth_m"), None);
        assert_eq!(table.value(1, "ph"), None);
        assert!(table.has_column("species"));
        assert_eq!(table.column_values("ph").count(), 1);
    }

    proptest! {
        #[test]
        fn prop_padded_numbers_parse(v in -1e6..1e6f64, left in " {0,2}", right in " {0,2}") {
            prop_assert_eq!(Value::parse(&format!("{left}{v}{right}")), Value::Number(v));
        }

        #[test]
        fn prop_number_field_round_trips(v in any::<f64>()) {
            prop_assume!(!v.is_nan());
            prop_assert_eq!(Value::parse(&Value::Number(v).to_field()), Value::Number(v));
        }
    }
}
