//! Client repository.

use super::db::Db;
use super::encode::encode_date;
use super::error::Result;
use super::search::{contains_pattern, name_tokens};
use crate::libs::client::Client;
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{params, OptionalExtension, Row};

const INSERT_CLIENT: &str = "INSERT INTO Clients (surname, name, patronymic, birth_date, gender, age, tel_number) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_CLIENT: &str = "UPDATE Clients SET surname = ?1, name = ?2, patronymic = ?3, birth_date = ?4, gender = ?5, age = ?6, tel_number = ?7 WHERE id = ?8";
const SELECT_CLIENT_BY_ID: &str = "SELECT * FROM Clients WHERE id = ?1";
const SELECT_CLIENT_IDS: &str = "SELECT id FROM Clients";
const SEARCH_CLIENT_IDS: &str = "
    SELECT id FROM Clients
    WHERE surname LIKE ?1 ESCAPE '\\'
       OR name LIKE ?1 ESCAPE '\\'
       OR patronymic LIKE ?1 ESCAPE '\\'
";

pub struct Clients<'a> {
    db: &'a mut Db,
}

impl Db {
    pub fn clients(&mut self) -> Clients<'_> {
        Clients { db: self }
    }
}

fn client_from_row(row: &Row<'_>) -> rusqlite::Result<Client> {
    let gender: String = row.get("gender")?;
    Ok(Client {
        id: Some(row.get("id")?),
        surname: row.get("surname")?,
        name: row.get("name")?,
        patronymic: row.get("patronymic")?,
        birth_date: row.get("birth_date")?,
        gender: gender.chars().next().unwrap_or_default(),
        age: row.get("age")?,
        tel_number: row.get("tel_number")?,
    })
}

impl Clients<'_> {
    pub fn insert(&mut self, client: &Client) -> Result<i64> {
        let result = self.db.conn().and_then(|conn| {
            conn.execute(
                INSERT_CLIENT,
                params![
                    client.surname,
                    client.name,
                    client.patronymic,
                    encode_date(client.birth_date),
                    client.gender.to_string(),
                    client.age,
                    client.tel_number
                ],
            )?;
            Ok(conn.last_insert_rowid())
        });
        self.db.track("Clients::insert", result)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Client>> {
        let result = self
            .db
            .conn()
            .and_then(|conn| Ok(conn.query_row(SELECT_CLIENT_BY_ID, params![id], client_from_row).optional()?));
        let client = self.db.track("Clients::get", result)?;
        if client.is_none() {
            msg_debug!(Message::ClientNotFound(id));
        }
        Ok(client)
    }

    pub fn list(&mut self) -> Vec<Client> {
        let ids = self.db.query_ids(SELECT_CLIENT_IDS, []);
        self.fetch_all("Clients::list", ids)
    }

    /// Clients whose surname, name or patronymic contains a token of `query`.
    ///
    /// The query is split into capitalised tokens (see
    /// [`name_tokens`]); each token is matched on its own and a client is
    /// returned once per matching token.
    pub fn search(&mut self, query: &str) -> Vec<Client> {
        let mut clients = Vec::new();
        for token in name_tokens(query) {
            let ids = self.db.query_ids(SEARCH_CLIENT_IDS, params![contains_pattern(&token)]);
            let failed = ids.is_err();
            clients.extend(self.fetch_all("Clients::search", ids));
            if failed {
                break;
            }
        }
        clients
    }

    /// Overwrites every column of an existing client.
    ///
    /// Returns `Ok(false)` without writing when `client` has no id or no
    /// such client is stored.
    pub fn update(&mut self, client: &Client) -> Result<bool> {
        let Some(id) = client.id else {
            return Ok(false);
        };
        if self.get(id)?.is_none() {
            return Ok(false);
        }

        let result = self.db.conn().and_then(|conn| {
            conn.execute(
                UPDATE_CLIENT,
                params![
                    client.surname,
                    client.name,
                    client.patronymic,
                    encode_date(client.birth_date),
                    client.gender.to_string(),
                    client.age,
                    client.tel_number,
                    id
                ],
            )?;
            Ok(())
        });
        self.db.track("Clients::update", result)?;
        msg_debug!(Message::ClientUpdated(id));
        Ok(true)
    }

    fn fetch_all(&mut self, operation: &str, ids: Result<Vec<i64>>) -> Vec<Client> {
        let Ok(ids) = self.db.track(operation, ids) else {
            return Vec::new();
        };
        ids.into_iter().filter_map(|id| self.get(id).ok().flatten()).collect()
    }
}
