use super::form_field::{FormField, FormSchema};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One visit of a client: a consultation or a full examination.
///
/// The store keeps only the client's id. `fields` mirrors the dynamic
/// column set of the form schema the examination was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Examination {
    pub id: Option<i64>,
    pub client_id: i64,
    pub is_full_examination: bool,
    pub date: NaiveDateTime,
    pub fields: Vec<FormField>,
}

impl Examination {
    pub fn new(client_id: i64, is_full_examination: bool, date: NaiveDateTime, schema: &FormSchema) -> Self {
        Examination {
            id: None,
            client_id,
            is_full_examination,
            date,
            fields: schema.blank_fields(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|field| field.value.as_str())
    }

    /// Returns `false` when the examination has no field called `name`.
    pub fn set_field_value(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Mandatory fields left blank. Consultations only require the fields
    /// that may not be empty; full examinations require all of them.
    pub fn missing_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.is_blank() && (self.is_full_examination || !field.may_be_empty))
            .map(|field| field.name.as_str())
            .collect()
    }
}
