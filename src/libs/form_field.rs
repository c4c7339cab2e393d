//! Examination form metadata.
//!
//! A [`FormField`] describes one dynamic attribute of an examination. The
//! ordered list of fields, [`FormSchema`], decides which columns the
//! `Examinations` table carries after its four fixed columns. The schema is
//! resolved once when the store is opened; changing it later does not touch
//! existing rows (see `Db::extend_examination_columns`).

use crate::db::error::{DbError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Columns every `Examinations` row has regardless of the form definition.
pub const FIXED_EXAMINATION_COLUMNS: [&str; 4] = ["id", "client_id", "is_full_examination", "date"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    /// Stored as `ddMMyyyy` text by the data-entry forms.
    Date,
    Float,
    Integer,
    /// One value out of a fixed list presented by the form.
    Choice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Column name and form key at the same time.
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub value: String,
    /// Fields that may stay empty are skipped by a short consultation.
    #[serde(default)]
    pub may_be_empty: bool,
}

impl FormField {
    pub fn new(name: &str, kind: FieldKind, may_be_empty: bool) -> Self {
        FormField {
            name: name.to_string(),
            kind,
            value: String::new(),
            may_be_empty,
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Ordered, validated list of examination form fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    fields: Vec<FormField>,
}

impl FormSchema {
    /// Validates names and keeps the given order. Values are cleared.
    pub fn new(fields: Vec<FormField>) -> Result<Self> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !is_identifier(&field.name) || FIXED_EXAMINATION_COLUMNS.iter().any(|c| c.eq_ignore_ascii_case(&field.name)) {
                return Err(DbError::InvalidFieldName(field.name.clone()));
            }
            if !seen.insert(field.name.to_ascii_lowercase()) {
                return Err(DbError::DuplicateFieldName(field.name.clone()));
            }
        }
        let fields = fields
            .into_iter()
            .map(|field| FormField { value: String::new(), ..field })
            .collect();
        Ok(FormSchema { fields })
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    /// Empty copies of every field, ready to be filled in.
    pub fn blank_fields(&self) -> Vec<FormField> {
        self.fields.clone()
    }
}

impl Default for FormSchema {
    /// The compiled-in examination form.
    fn default() -> Self {
        use FieldKind::*;

        let fields = vec![
            FormField::new("complaints", Text, false),
            FormField::new("anamnesis", Text, true),
            FormField::new("height_cm", Float, false),
            FormField::new("weight_kg", Float, false),
            FormField::new("waist_cm", Float, true),
            FormField::new("hips_cm", Float, true),
            FormField::new("body_fat_percent", Float, true),
            FormField::new("blood_pressure", Text, true),
            FormField::new("pulse", Integer, true),
            FormField::new("meals_per_day", Integer, false),
            FormField::new("activity_level", Choice, false),
            FormField::new("diet_start", Date, true),
            FormField::new("recommendations", Text, true),
        ];
        FormSchema { fields }
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schema_passes_validation() {
        let schema = FormSchema::default();
        assert!(FormSchema::new(schema.fields().to_vec()).is_ok());
        assert!(schema.column_names().any(|name| name == "weight_kg"));
    }

    #[test]
    fn rejects_names_that_are_not_identifiers() {
        for bad in ["", "1st", "body fat", "x;DROP TABLE Clients", "вес"] {
            let result = FormSchema::new(vec![FormField::new(bad, FieldKind::Text, true)]);
            assert!(matches!(result, Err(DbError::InvalidFieldName(_))), "{bad:?} accepted");
        }
    }

    #[test]
    fn rejects_fixed_column_names_and_duplicates() {
        let fixed = FormSchema::new(vec![FormField::new("Date", FieldKind::Date, false)]);
        assert!(matches!(fixed, Err(DbError::InvalidFieldName(_))));

        let duplicate = FormSchema::new(vec![
            FormField::new("pulse", FieldKind::Integer, true),
            FormField::new("PULSE", FieldKind::Integer, true),
        ]);
        assert!(matches!(duplicate, Err(DbError::DuplicateFieldName(_))));
    }

    #[test]
    fn values_are_cleared_on_construction() {
        let schema = FormSchema::new(vec![FormField::new("pulse", FieldKind::Integer, true).with_value("70")]).unwrap();
        assert!(schema.fields()[0].is_blank());
    }
}
