use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person under the nutritionist's care.
///
/// `id` is `None` until the record has been inserted; the store assigns it
/// and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: Option<i64>,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub birth_date: NaiveDate,
    /// Single-character code, `'m'` or `'f'` by convention.
    pub gender: char,
    pub age: i32,
    pub tel_number: String,
}

impl Client {
    pub fn new(
        surname: &str,
        name: &str,
        patronymic: &str,
        birth_date: NaiveDate,
        gender: char,
        age: i32,
        tel_number: &str,
    ) -> Self {
        Client {
            id: None,
            surname: surname.to_string(),
            name: name.to_string(),
            patronymic: patronymic.to_string(),
            birth_date,
            gender,
            age,
            tel_number: tel_number.to_string(),
        }
    }

    pub fn is_init(&self) -> bool {
        self.id.is_some()
    }

    /// "Surname Name Patronymic", skipping empty parts.
    pub fn full_name(&self) -> String {
        [self.surname.as_str(), self.name.as_str(), self.patronymic.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
