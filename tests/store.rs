#[cfg(test)]
mod tests {
    use nutridesk::db::db::Db;
    use nutridesk::db::error::DbError;
    use nutridesk::db::schema::TABLES;
    use nutridesk::libs::activity::Activity;
    use nutridesk::libs::form_field::FormSchema;
    use nutridesk::libs::product::{Product, Units};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        temp_dir: TempDir,
    }

    impl StoreTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("db.sqlite")
        }
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            StoreTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn table_names(path: &PathBuf) -> Vec<String> {
        let conn = rusqlite::Connection::open(path).unwrap();
        let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'").unwrap();
        let names = stmt.query_map([], |row| row.get::<_, String>(0)).unwrap();
        names.map(|name| name.unwrap()).collect()
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_open_creates_schema(ctx: &mut StoreTestContext) {
        let db = Db::open(ctx.db_path(), FormSchema::default());
        assert!(db.is_connected());
        assert!(ctx.db_path().exists());
        assert!(!db.has_unwatched_error());

        let names = table_names(&ctx.db_path());
        for table in TABLES {
            assert!(names.iter().any(|name| name == table), "missing table {}", table);
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_reopen_keeps_data(ctx: &mut StoreTestContext) {
        {
            let mut db = Db::open(ctx.db_path(), FormSchema::default());
            db.activities().insert(&Activity::new("Cycling", 0.1)).unwrap();
        }

        let mut db = Db::open(ctx.db_path(), FormSchema::default());
        let activities = db.activities().list();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].kind, "Cycling");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_corrupt_file_is_recreated(ctx: &mut StoreTestContext) {
        fs::write(ctx.db_path(), "this is not a database ".repeat(64)).unwrap();

        let mut db = Db::open(ctx.db_path(), FormSchema::default());
        assert!(db.is_connected());
        assert!(db.products().list().is_empty());

        let id = db.products().insert(&Product::new("Rice", "", 7.0, 0.6, 77.0, 344.0, Units::Grams)).unwrap();
        assert!(db.products().get(id).unwrap().is_some());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_tables_are_healed(ctx: &mut StoreTestContext) {
        {
            let conn = rusqlite::Connection::open(ctx.db_path()).unwrap();
            conn.execute("CREATE TABLE Notes (id INTEGER PRIMARY KEY, text TEXT)", []).unwrap();
        }

        let mut db = Db::open(ctx.db_path(), FormSchema::default());
        assert!(db.is_connected());
        assert!(db.recipes().list().is_empty());

        let names = table_names(&ctx.db_path());
        assert!(names.iter().any(|name| name == "Notes"));
        for table in TABLES {
            assert!(names.iter().any(|name| name == table), "missing table {}", table);
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_unreachable_path_degrades(ctx: &mut StoreTestContext) {
        let blocker = ctx.temp_dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let mut db = Db::open(blocker.join("db.sqlite"), FormSchema::default());
        assert!(!db.is_connected());

        let result = db.products().insert(&Product::new("Milk", "", 3.2, 3.6, 4.8, 64.0, Units::Milliliters));
        assert!(matches!(result, Err(DbError::NotConnected)));
        assert!(matches!(db.clients().get(1), Err(DbError::NotConnected)));
        assert!(db.activities().list().is_empty());
        assert!(db.has_unwatched_error());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_error_log_drains_once(ctx: &mut StoreTestContext) {
        let mut db = Db::open(ctx.db_path(), FormSchema::default());

        // reading the empty store logs nothing
        assert!(db.products().list().is_empty());
        assert!(db.products().get(7).unwrap().is_none());
        assert!(!db.has_unwatched_error());

        let blocker = ctx.temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        assert!(db.export_to(blocker.join("copy.sqlite")).is_err());

        assert!(db.has_unwatched_error());
        assert_eq!(db.error_count(), 1);

        let errors = db.drain_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Db::export_to"));

        assert!(!db.has_unwatched_error());
        assert!(db.drain_errors().is_empty());
    }
}
