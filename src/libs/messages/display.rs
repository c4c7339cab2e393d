//! Display text for [`Message`].
//!
//! Wording conventions: sentence case, the failing object first, the
//! underlying reason last after a colon so log lines grep well.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONNECTION MESSAGES ===
            Message::DbDriverUnavailable(version) => {
                format!("Unable to load database. The linked SQLite library ({}) is too old", version)
            }
            Message::DbOpenFailed(path, reason) => format!("Database file {} could not be opened: {}", path, reason),
            Message::DbRemoveCorruptFailed(path, reason) => format!("Unreadable database file {} could not be removed: {}", path, reason),
            Message::DbReinitialized(path) => format!("Database file {} was unreadable and has been recreated empty", path),
            Message::DbCreated(path) => format!("Created new empty database at {}", path),
            Message::DbNotConnected => "Database is not connected".to_string(),
            Message::DbReady(path) => format!("Database ready: {}", path),

            // === SCHEMA MESSAGES ===
            Message::SchemaStatementFailed(table, reason) => format!("Table {} was not created: {}", table, reason),
            Message::SchemaTableMissing(table) => format!("Table {} is missing, creating it", table),
            Message::ExaminationColumnsAdded(columns) => format!("Added examination columns: {}", columns.join(", ")),
            Message::ExaminationColumnsUpToDate => "Examination columns already match the form definition".to_string(),
            Message::FormSchemaInvalid(reason) => format!("Examination form definition rejected: {}", reason),

            // === QUERY MESSAGES ===
            Message::QueryFailed(operation, reason) => format!("Error in {}: {}", operation, reason),
            Message::RecipeInsertFailed(phase, reason) => format!("Error in Recipes::insert ({} phase): {}", phase, reason),

            // === LOOKUP MESSAGES ===
            Message::ClientNotFound(id) => format!("In DB has no Client with id: {}", id),
            Message::ExaminationNotFound(id) => format!("In DB has no Examination with id: {}", id),
            Message::ProductNotFound(id) => format!("In DB has no Product with id: {}", id),
            Message::RecipeNotFound(id) => format!("In DB has no Recipe with id: {}", id),
            Message::ActivityNotFound(id) => format!("In DB has no Activity with id: {}", id),
            Message::NothingFound => "Nothing found".to_string(),

            // === UPDATE MESSAGES ===
            Message::UpdateNotSupported(kind) => format!("Updating {} records is not supported; nothing was changed", kind),
            Message::ClientUpdated(id) => format!("Client {} updated", id),
            Message::ExaminationUpdated(id) => format!("Examination {} updated", id),

            // === FILTER MESSAGES ===
            Message::UnknownNutrientSelector(code) => format!("Unknown nutrient selector '{}', returning all products", code),

            // === TRANSFER MESSAGES ===
            Message::ImportEmptyPath => "No file name given for import".to_string(),
            Message::ImportUnreadable(path, reason) => format!("File {} cannot be used as a database: {}", path, reason),
            Message::ImportOldFileMissing(path) => format!("The old database file {} does not exist", path),
            Message::ImportRemoveFailed(path, reason) => format!("Old database file {} can not be deleted: {}", path, reason),
            Message::ImportCopyFailed(path, reason) => format!("New database file {} can not be copied: {}", path, reason),
            Message::ImportCompleted(path) => format!("Database imported from {}", path),
            Message::ExportFailed(path, reason) => format!("Database can not be copied to {}: {}", path, reason),
            Message::ExportCompleted(path) => format!("Database exported to {}", path),

            // === ERROR LOG MESSAGES ===
            Message::UnwatchedErrorsHeader(count) => format!("{} unwatched database error(s):", count),
            Message::NoUnwatchedErrors => "No unwatched database errors".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigParseError(reason) => format!("Failed to parse configuration: {}", reason),

            // === LISTING HEADERS ===
            Message::ClientsHeader => "Clients:".to_string(),
            Message::ExaminationsHeader => "Examinations:".to_string(),
            Message::ProductsHeader => "Products:".to_string(),
            Message::RecipesHeader => "Recipes:".to_string(),
            Message::ActivitiesHeader => "Activities:".to_string(),
        };
        write!(f, "{}", text)
    }
}
