use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// Raw url-form-encoded input as axum hands it to us.
pub type RawForm = HashMap<String, String>;

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text { min_len: usize, max_len: usize },
    Int { min: i64, max: i64 },
}

/// A single declarative field constraint.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: &'static str,
    kind: FieldKind,
    required: bool,
}

impl FieldSpec {
    pub fn text(name: &'static str, min_len: usize, max_len: usize) -> Self {
        Self {
            name,
            kind: FieldKind::Text { min_len, max_len },
            required: true,
        }
    }

    pub fn int(name: &'static str, min: i64, max: i64) -> Self {
        Self {
            name,
            kind: FieldKind::Int { min, max },
            required: true,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
}

/// A validated, typed record. Getters return errors only when mapping code
/// asks for a field the schema never guaranteed, which is a programming
/// mistake rather than bad user input.
#[derive(Debug, Default)]
pub struct Record(HashMap<&'static str, FieldValue>);

impl Record {
    pub fn str_field(&self, name: &str) -> color_eyre::Result<&str> {
        match self.0.get(name) {
            Some(FieldValue::Text(value)) => Ok(value),
            _ => Err(color_eyre::eyre::eyre!(
                "Validated record has no text field `{name}`"
            )),
        }
    }

    pub fn int_field(&self, name: &str) -> color_eyre::Result<i64> {
        match self.0.get(name) {
            Some(FieldValue::Int(value)) => Ok(*value),
            _ => Err(color_eyre::eyre::eyre!(
                "Validated record has no integer field `{name}`"
            )),
        }
    }

    pub fn opt_str_field(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(FieldValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Per-field validation messages, keyed by the submitted field name.
/// A BTreeMap keeps the serialized order stable for clients.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }
}

/// An ordered list of field constraints consumed by `validate`.
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Validate raw form input against every field spec. Either all fields
    /// pass and a typed `Record` comes back, or every failing field is
    /// reported. Unknown submitted keys are ignored.
    pub fn validate(&self, raw: &RawForm) -> Result<Record, FieldErrors> {
        let mut record = Record::default();
        let mut errors = FieldErrors::default();

        for spec in &self.fields {
            // Blank submissions count as absent: HTML forms post empty
            // strings for untouched inputs.
            let value = raw.get(spec.name).map(String::as_str).filter(|v| !v.is_empty());

            let Some(value) = value else {
                if spec.required {
                    errors.push(spec.name, "This field is required");
                }
                continue;
            };

            match spec.kind {
                FieldKind::Text { min_len, max_len } => {
                    let len = value.chars().count();
                    if len < min_len {
                        errors.push(
                            spec.name,
                            format!("Must be at least {min_len} characters"),
                        );
                    } else if len > max_len {
                        errors.push(
                            spec.name,
                            format!("Must be at most {max_len} characters"),
                        );
                    } else {
                        record
                            .0
                            .insert(spec.name, FieldValue::Text(value.to_string()));
                    }
                }
                FieldKind::Int { min, max } => match value.parse::<i64>() {
                    Ok(number) if (min..=max).contains(&number) => {
                        record.0.insert(spec.name, FieldValue::Int(number));
                    }
                    Ok(_) => {
                        errors.push(spec.name, format!("Must be between {min} and {max}"));
                    }
                    Err(_) => {
                        errors.push(spec.name, "Must be a whole number");
                    }
                },
            }
        }

        if errors.is_empty() { Ok(record) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_error<'a>(errors: &'a FieldErrors, field: &str) -> &'a str {
        errors
            .field(field)
            .and_then(|msgs| msgs.first())
            .map(String::as_str)
            .unwrap_or_else(|| panic!("no error recorded for field `{field}`"))
    }

    fn form(entries: &[(&str, &str)]) -> RawForm {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sample_schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSpec::text("name", 1, 255),
            FieldSpec::int("year", 1900, 2021),
            FieldSpec::text("notes", 1, 10).optional(),
        ])
    }

    #[test]
    fn test_valid_input_produces_typed_record() {
        let record = sample_schema()
            .validate(&form(&[("name", "Blue Train"), ("year", "1957")]))
            .unwrap();

        assert_eq!(record.str_field("name").unwrap(), "Blue Train");
        assert_eq!(record.int_field("year").unwrap(), 1957);
        assert_eq!(record.opt_str_field("notes"), None);
    }

    #[test]
    fn test_missing_required_field_is_reported_per_field() {
        let errors = sample_schema()
            .validate(&form(&[("year", "1957")]))
            .unwrap_err();

        assert_eq!(
            first_error(&errors, "name"),
            "This field is required"
        );
        assert!(errors.field("year").is_none());
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let errors = sample_schema()
            .validate(&form(&[("name", ""), ("year", "1957")]))
            .unwrap_err();

        assert!(errors.field("name").is_some());
    }

    #[test]
    fn test_text_too_long() {
        let long = "x".repeat(300);
        let errors = sample_schema()
            .validate(&form(&[("name", long.as_str()), ("year", "1957")]))
            .unwrap_err();

        assert_eq!(
            first_error(&errors, "name"),
            "Must be at most 255 characters"
        );
    }

    #[test]
    fn test_year_below_range() {
        let errors = sample_schema()
            .validate(&form(&[("name", "X"), ("year", "1899")]))
            .unwrap_err();

        assert_eq!(
            first_error(&errors, "year"),
            "Must be between 1900 and 2021"
        );
    }

    #[test]
    fn test_year_above_range() {
        let errors = sample_schema()
            .validate(&form(&[("name", "X"), ("year", "2022")]))
            .unwrap_err();

        assert!(errors.field("year").is_some());
    }

    #[test]
    fn test_year_not_a_number() {
        let errors = sample_schema()
            .validate(&form(&[("name", "X"), ("year", "soon")]))
            .unwrap_err();

        assert_eq!(
            first_error(&errors, "year"),
            "Must be a whole number"
        );
    }

    #[test]
    fn test_multiple_failures_all_reported() {
        let errors = sample_schema().validate(&form(&[])).unwrap_err();

        assert!(errors.field("name").is_some());
        assert!(errors.field("year").is_some());
        // Optional field stays silent when absent.
        assert!(errors.field("notes").is_none());
    }

    #[test]
    fn test_optional_field_validated_when_present() {
        let errors = sample_schema()
            .validate(&form(&[
                ("name", "X"),
                ("year", "2000"),
                ("notes", "far too many characters"),
            ]))
            .unwrap_err();

        assert!(errors.field("notes").is_some());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let record = sample_schema()
            .validate(&form(&[
                ("name", "X"),
                ("year", "2000"),
                ("csrf_token", "abc"),
            ]))
            .unwrap();

        assert!(record.str_field("csrf_token").is_err());
    }
}
