//! Physical activity repository.

use super::db::Db;
use super::error::Result;
use super::search::contains_pattern;
use crate::libs::activity::Activity;
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{params, OptionalExtension};

const INSERT_ACTIVITY: &str = "INSERT INTO Activities (type, kkal_m_km) VALUES (?1, ?2)";
const SELECT_ACTIVITY_BY_ID: &str = "SELECT * FROM Activities WHERE id = ?1";
const SELECT_ACTIVITY_IDS: &str = "SELECT id FROM Activities";
const SEARCH_ACTIVITY_IDS: &str = "SELECT id FROM Activities WHERE type LIKE ?1 ESCAPE '\\'";
const SELECT_ACTIVITY_IDS_IN_RANGE: &str = "SELECT id FROM Activities WHERE kkal_m_km BETWEEN ?1 AND ?2";

pub struct Activities<'a> {
    db: &'a mut Db,
}

impl Db {
    pub fn activities(&mut self) -> Activities<'_> {
        Activities { db: self }
    }
}

impl Activities<'_> {
    pub fn insert(&mut self, activity: &Activity) -> Result<i64> {
        let result = self.db.conn().and_then(|conn| {
            conn.execute(INSERT_ACTIVITY, params![activity.kind, activity.kkal_per_kg_min])?;
            Ok(conn.last_insert_rowid())
        });
        self.db.track("Activities::insert", result)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Activity>> {
        let result = self.db.conn().and_then(|conn| {
            let activity = conn
                .query_row(SELECT_ACTIVITY_BY_ID, params![id], |row| {
                    Ok(Activity {
                        id: Some(row.get("id")?),
                        kind: row.get("type")?,
                        kkal_per_kg_min: row.get("kkal_m_km")?,
                    })
                })
                .optional()?;
            Ok(activity)
        });
        let activity = self.db.track("Activities::get", result)?;
        if activity.is_none() {
            msg_debug!(Message::ActivityNotFound(id));
        }
        Ok(activity)
    }

    pub fn list(&mut self) -> Vec<Activity> {
        let ids = self.db.query_ids(SELECT_ACTIVITY_IDS, []);
        self.fetch_all("Activities::list", ids)
    }

    /// Activities whose type label contains any of `terms`, one match per
    /// term and row.
    pub fn search<S: AsRef<str>>(&mut self, terms: &[S]) -> Vec<Activity> {
        let mut activities = Vec::new();
        for term in terms {
            let ids = self.db.query_ids(SEARCH_ACTIVITY_IDS, params![contains_pattern(term.as_ref())]);
            let failed = ids.is_err();
            activities.extend(self.fetch_all("Activities::search", ids));
            if failed {
                break;
            }
        }
        activities
    }

    /// Activities burning between `lower` and `upper` kcal/kg/min inclusive.
    pub fn filter_range(&mut self, lower: f64, upper: f64) -> Vec<Activity> {
        let ids = self.db.query_ids(SELECT_ACTIVITY_IDS_IN_RANGE, params![lower, upper]);
        self.fetch_all("Activities::filter_range", ids)
    }

    /// Accepted and ignored, like product and recipe updates.
    pub fn update(&mut self, activity: &Activity) -> Result<()> {
        msg_debug!(Message::UpdateNotSupported(format!("activity {:?}", activity.id)));
        Ok(())
    }

    fn fetch_all(&mut self, operation: &str, ids: Result<Vec<i64>>) -> Vec<Activity> {
        let Ok(ids) = self.db.track(operation, ids) else {
            return Vec::new();
        };
        ids.into_iter().filter_map(|id| self.get(id).ok().flatten()).collect()
    }
}
