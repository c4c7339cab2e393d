//! Schema manager.
//!
//! Creates the seven tables of an empty store. The `Examinations` table gets
//! one `TEXT` column per form field, appended after its fixed columns, so its
//! DDL is generated from the [`FormSchema`] rather than being a constant.
//!
//! Statements run one at a time; a failing statement is logged and the rest
//! still run. Nothing is rolled back.

use crate::libs::form_field::FormSchema;
use crate::libs::messages::Message;
use crate::{msg_error, msg_warning};
use rusqlite::Connection;

const SCHEMA_CLIENTS: &str = "CREATE TABLE IF NOT EXISTS `Clients` (
    `id`         INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
    `surname`    TEXT NOT NULL,
    `name`       TEXT NOT NULL,
    `patronymic` TEXT NOT NULL,
    `birth_date` TEXT NOT NULL,
    `gender`     TEXT NOT NULL,
    `age`        INTEGER NOT NULL,
    `tel_number` TEXT NOT NULL
)";
const SCHEMA_PRODUCTS: &str = "CREATE TABLE IF NOT EXISTS `Products` (
    `id`            INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
    `name`          TEXT NOT NULL,
    `description`   TEXT NOT NULL,
    `proteins`      REAL NOT NULL,
    `fats`          REAL NOT NULL,
    `carbohydrates` REAL NOT NULL,
    `kkal`          REAL NOT NULL,
    `units`         INTEGER NOT NULL
)";
const SCHEMA_RECIPES: &str = "CREATE TABLE IF NOT EXISTS `Recipes` (
    `id`   INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
    `name` TEXT NOT NULL
)";
const SCHEMA_COOKING_POINTS: &str = "CREATE TABLE IF NOT EXISTS `CookingPoints` (
    `recipe_id`   INTEGER NOT NULL,
    `point_num`   INTEGER NOT NULL,
    `description` TEXT NOT NULL,
    FOREIGN KEY(`recipe_id`) REFERENCES `Recipes`(`id`) ON DELETE CASCADE ON UPDATE CASCADE
)";
// `amound` is the column name in existing files; keep it.
const SCHEMA_PRODUCTS_IN_RECIPES: &str = "CREATE TABLE IF NOT EXISTS `ProductsInRecipes` (
    `recipe_id`  INTEGER NOT NULL,
    `product_id` INTEGER NOT NULL,
    `amound`     REAL NOT NULL,
    FOREIGN KEY(`recipe_id`) REFERENCES `Recipes`(`id`) ON DELETE CASCADE ON UPDATE CASCADE,
    FOREIGN KEY(`product_id`) REFERENCES `Products`(`id`) ON DELETE CASCADE ON UPDATE CASCADE
)";
const SCHEMA_ACTIVITIES: &str = "CREATE TABLE IF NOT EXISTS `Activities` (
    `id`        INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
    `type`      TEXT NOT NULL,
    `kkal_m_km` REAL NOT NULL
)";

pub const TABLES: [&str; 7] = [
    "Clients",
    "Examinations",
    "Products",
    "Recipes",
    "CookingPoints",
    "ProductsInRecipes",
    "Activities",
];

/// `CREATE TABLE` for `Examinations` with one text column per form field.
pub fn examinations_ddl(form: &FormSchema) -> String {
    let dynamic: String = form.column_names().map(|name| format!("    `{}` TEXT,\n", name)).collect();
    format!(
        "CREATE TABLE IF NOT EXISTS `Examinations` (
    `id`                  INTEGER PRIMARY KEY AUTOINCREMENT UNIQUE,
    `client_id`           INTEGER NOT NULL,
    `is_full_examination` INTEGER NOT NULL,
    `date`                TEXT NOT NULL,
{}    FOREIGN KEY(`client_id`) REFERENCES `Clients`(`id`) ON DELETE CASCADE ON UPDATE CASCADE
)",
        dynamic
    )
}

/// Creates every table that does not exist yet.
///
/// Returns the number of statements that failed; each failure has already
/// been reported.
pub fn create_tables(conn: &Connection, form: &FormSchema) -> usize {
    let examinations = examinations_ddl(form);
    let statements: [(&str, &str); 7] = [
        ("Clients", SCHEMA_CLIENTS),
        ("Examinations", examinations.as_str()),
        ("Products", SCHEMA_PRODUCTS),
        ("Recipes", SCHEMA_RECIPES),
        ("CookingPoints", SCHEMA_COOKING_POINTS),
        ("ProductsInRecipes", SCHEMA_PRODUCTS_IN_RECIPES),
        ("Activities", SCHEMA_ACTIVITIES),
    ];

    let mut failures = 0;
    for (table, ddl) in statements {
        if let Err(e) = conn.execute(ddl, []) {
            msg_error!(Message::SchemaStatementFailed(table.to_string(), e.to_string()));
            failures += 1;
        }
    }
    failures
}

/// Names from [`TABLES`] that the connected file lacks.
pub fn missing_tables(conn: &Connection) -> rusqlite::Result<Vec<&'static str>> {
    let mut stmt = conn.prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
    let mut missing = Vec::new();
    for table in TABLES {
        if !stmt.exists([table])? {
            missing.push(table);
        }
    }
    Ok(missing)
}

/// Creates tables that are absent from an otherwise readable file.
pub fn heal_missing_tables(conn: &Connection, form: &FormSchema) -> rusqlite::Result<()> {
    let missing = missing_tables(conn)?;
    if missing.is_empty() {
        return Ok(());
    }
    for table in &missing {
        msg_warning!(Message::SchemaTableMissing(table.to_string()));
    }
    create_tables(conn, form);
    Ok(())
}

/// Column names of `table`, in declaration order.
pub fn table_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info(`{}`)", table))?;
    let columns = stmt.query_map([], |row| row.get::<_, String>("name"))?;
    columns.collect()
}

/// Adds form fields that the `Examinations` table does not have yet.
///
/// Existing rows get `NULL` in the new columns. Columns of fields that were
/// dropped from the form are left alone.
pub fn add_missing_examination_columns(conn: &Connection, form: &FormSchema) -> rusqlite::Result<Vec<String>> {
    let existing: Vec<String> = table_columns(conn, "Examinations")?.into_iter().map(|c| c.to_ascii_lowercase()).collect();
    let mut added = Vec::new();
    for name in form.column_names() {
        if existing.contains(&name.to_ascii_lowercase()) {
            continue;
        }
        conn.execute(&format!("ALTER TABLE `Examinations` ADD COLUMN `{}` TEXT", name), [])?;
        added.push(name.to_string());
    }
    Ok(added)
}
