//! Examination repository.
//!
//! Besides its four fixed columns an examination row carries one text column
//! per field of the store's [`FormSchema`]. Statements are built from that
//! schema (resolved when the store was opened), never from the field list of
//! the examination being written. Column names are validated identifiers.

use super::db::Db;
use super::encode::encode_datetime;
use super::error::Result;
use crate::libs::examination::Examination;
use crate::libs::form_field::{FormField, FormSchema};
use crate::libs::messages::Message;
use crate::msg_debug;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

const SELECT_EXAMINATION_BY_ID: &str = "SELECT * FROM Examinations WHERE id = ?1";
const SELECT_EXAMINATION_IDS: &str = "SELECT id FROM Examinations";
const SELECT_EXAMINATION_IDS_BY_CLIENT: &str = "SELECT id FROM Examinations WHERE client_id = ?1";
const SELECT_EXAMINATION_IDS_BETWEEN: &str = "SELECT id FROM Examinations WHERE date BETWEEN ?1 AND ?2";

pub struct Examinations<'a> {
    db: &'a mut Db,
}

impl Db {
    pub fn examinations(&mut self) -> Examinations<'_> {
        Examinations { db: self }
    }
}

fn insert_sql(form: &FormSchema) -> String {
    let mut columns = String::from("client_id, is_full_examination, date");
    let mut placeholders = String::from("?1, ?2, ?3");
    for (i, name) in form.column_names().enumerate() {
        columns.push_str(&format!(", `{}`", name));
        placeholders.push_str(&format!(", ?{}", i + 4));
    }
    format!("INSERT INTO Examinations ({}) VALUES ({})", columns, placeholders)
}

fn update_fields_sql(form: &FormSchema) -> String {
    let assignments: Vec<String> = form
        .column_names()
        .enumerate()
        .map(|(i, name)| format!("`{}` = ?{}", name, i + 1))
        .collect();
    format!("UPDATE Examinations SET {} WHERE id = ?{}", assignments.join(", "), form.len() + 1)
}

/// Values of the schema's fields in schema order; fields the examination
/// lacks are written as `NULL`.
fn field_values(form: &FormSchema, examination: &Examination) -> Vec<Value> {
    form.column_names()
        .map(|name| match examination.field_value(name) {
            Some(value) => Value::Text(value.to_string()),
            None => Value::Null,
        })
        .collect()
}

/// Maps a `SELECT *` row. A schema field whose column the table does not
/// have (form changed after the file was created) reads as empty.
fn examination_from_row(row: &Row<'_>, form: &FormSchema) -> rusqlite::Result<Examination> {
    let mut fields = Vec::with_capacity(form.len());
    for field in form.fields() {
        let value = match row.get::<_, Option<String>>(field.name.as_str()) {
            Ok(value) => value.unwrap_or_default(),
            Err(rusqlite::Error::InvalidColumnName(_)) => String::new(),
            Err(e) => return Err(e),
        };
        fields.push(FormField { value, ..field.clone() });
    }

    Ok(Examination {
        id: Some(row.get("id")?),
        client_id: row.get("client_id")?,
        is_full_examination: row.get("is_full_examination")?,
        date: row.get("date")?,
        fields,
    })
}

impl Examinations<'_> {
    /// Inserts the examination and returns its new id.
    ///
    /// Fails (foreign key) when `client_id` does not name a stored client.
    pub fn insert(&mut self, examination: &Examination) -> Result<i64> {
        let result = self.db.conn().and_then(|conn| {
            let form = self.db.form();
            let mut values = vec![
                Value::Integer(examination.client_id),
                Value::Integer(examination.is_full_examination as i64),
                Value::Text(encode_datetime(examination.date)),
            ];
            values.extend(field_values(form, examination));
            conn.execute(&insert_sql(form), params_from_iter(values))?;
            Ok(conn.last_insert_rowid())
        });
        self.db.track("Examinations::insert", result)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Examination>> {
        let result = self.db.conn().and_then(|conn| {
            let form = self.db.form();
            let examination = conn
                .query_row(SELECT_EXAMINATION_BY_ID, params![id], |row| examination_from_row(row, form))
                .optional()?;
            Ok(examination)
        });
        let examination = self.db.track("Examinations::get", result)?;
        if examination.is_none() {
            msg_debug!(Message::ExaminationNotFound(id));
        }
        Ok(examination)
    }

    pub fn list(&mut self) -> Vec<Examination> {
        let ids = self.db.query_ids(SELECT_EXAMINATION_IDS, []);
        self.fetch_all("Examinations::list", ids)
    }

    pub fn list_for_client(&mut self, client_id: i64) -> Vec<Examination> {
        let ids = self.db.query_ids(SELECT_EXAMINATION_IDS_BY_CLIENT, params![client_id]);
        self.fetch_all("Examinations::list_for_client", ids)
    }

    /// Examinations dated from the start of `from` to the last nanosecond of
    /// `to`.
    pub fn list_between(&mut self, from: NaiveDate, to: NaiveDate) -> Vec<Examination> {
        let start = from.and_hms_opt(0, 0, 0).map(encode_datetime);
        let end = to.and_hms_nano_opt(23, 59, 59, 999_999_999).map(encode_datetime);
        let ids = self.db.query_ids(SELECT_EXAMINATION_IDS_BETWEEN, params![start, end]);
        self.fetch_all("Examinations::list_between", ids)
    }

    /// Rewrites the form field columns of a stored examination.
    ///
    /// Id, client, examination kind and date are never changed. Returns
    /// `Ok(false)` when the examination has no id or is not stored.
    pub fn update_fields(&mut self, examination: &Examination) -> Result<bool> {
        let Some(id) = examination.id else {
            return Ok(false);
        };
        if self.get(id)?.is_none() {
            return Ok(false);
        }
        if self.db.form().is_empty() {
            return Ok(true);
        }

        let result = self.db.conn().and_then(|conn| {
            let form = self.db.form();
            let mut values = field_values(form, examination);
            values.push(Value::Integer(id));
            conn.execute(&update_fields_sql(form), params_from_iter(values))?;
            Ok(())
        });
        self.db.track("Examinations::update_fields", result)?;
        msg_debug!(Message::ExaminationUpdated(id));
        Ok(true)
    }

    fn fetch_all(&mut self, operation: &str, ids: Result<Vec<i64>>) -> Vec<Examination> {
        let Ok(ids) = self.db.track(operation, ids) else {
            return Vec::new();
        };
        ids.into_iter().filter_map(|id| self.get(id).ok().flatten()).collect()
    }
}
