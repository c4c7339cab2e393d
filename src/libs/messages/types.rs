/// Every message nutridesk can print or log.
///
/// Variants are grouped by the part of the system that emits them. Payloads
/// are pre-rendered strings or plain ids so the enum stays `Clone` and cheap
/// to build at error sites.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONNECTION MESSAGES ===
    DbDriverUnavailable(String), // linked sqlite version
    DbOpenFailed(String, String), // path, reason
    DbRemoveCorruptFailed(String, String), // path, reason
    DbReinitialized(String), // path
    DbCreated(String), // path
    DbNotConnected,
    DbReady(String), // path

    // === SCHEMA MESSAGES ===
    SchemaStatementFailed(String, String), // table, reason
    SchemaTableMissing(String),
    ExaminationColumnsAdded(Vec<String>),
    ExaminationColumnsUpToDate,
    FormSchemaInvalid(String),

    // === QUERY MESSAGES ===
    QueryFailed(String, String), // operation, reason
    RecipeInsertFailed(String, String), // phase, reason

    // === LOOKUP MESSAGES ===
    ClientNotFound(i64),
    ExaminationNotFound(i64),
    ProductNotFound(i64),
    RecipeNotFound(i64),
    ActivityNotFound(i64),
    NothingFound,

    // === UPDATE MESSAGES ===
    UpdateNotSupported(String), // entity kind
    ClientUpdated(i64),
    ExaminationUpdated(i64),

    // === FILTER MESSAGES ===
    UnknownNutrientSelector(char),

    // === TRANSFER MESSAGES ===
    ImportEmptyPath,
    ImportUnreadable(String, String), // path, reason
    ImportOldFileMissing(String),
    ImportRemoveFailed(String, String),
    ImportCopyFailed(String, String),
    ImportCompleted(String),
    ExportFailed(String, String),
    ExportCompleted(String),

    // === ERROR LOG MESSAGES ===
    UnwatchedErrorsHeader(usize),
    NoUnwatchedErrors,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),
    ConfigParseError(String),

    // === LISTING HEADERS ===
    ClientsHeader,
    ExaminationsHeader,
    ProductsHeader,
    RecipesHeader,
    ActivitiesHeader,
}
