#[cfg(test)]
mod tests {
    use nutridesk::db::db::Db;
    use nutridesk::db::error::DbError;
    use nutridesk::libs::activity::Activity;
    use nutridesk::libs::form_field::FormSchema;
    use nutridesk::libs::product::{Product, Units};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TransferTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for TransferTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let mut db = Db::open(temp_dir.path().join("db.sqlite"), FormSchema::default());
            db.products().insert(&Product::new("Apple", "Green", 0.4, 0.4, 9.8, 47.0, Units::Grams)).unwrap();
            TransferTestContext { temp_dir, db }
        }
    }

    impl TransferTestContext {
        fn file(&self, name: &str) -> PathBuf {
            self.temp_dir.path().join(name)
        }
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_export_copies_store(ctx: &mut TransferTestContext) {
        let backup = ctx.file("backup.sqlite");
        ctx.db.export_to(&backup).unwrap();

        let mut copy = Db::open(&backup, FormSchema::default());
        let products = copy.products().list();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Apple");

        // the canonical store is still in use
        assert_eq!(ctx.db.path(), ctx.file("db.sqlite"));
        assert_eq!(ctx.db.products().list().len(), 1);
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_export_to_unwritable_destination(ctx: &mut TransferTestContext) {
        let result = ctx.db.export_to(ctx.file("missing/dir/backup.sqlite"));
        assert!(matches!(result, Err(DbError::Io { .. })));
        assert!(ctx.db.has_unwatched_error());

        let result = ctx.db.export_to("");
        assert!(matches!(result, Err(DbError::EmptyPath)));
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_replaces_store(ctx: &mut TransferTestContext) {
        let other = ctx.file("other.sqlite");
        {
            let mut source = Db::open(&other, FormSchema::default());
            source.activities().insert(&Activity::new("Skiing", 0.13)).unwrap();
        }

        ctx.db.import_from(&other).unwrap();

        assert!(ctx.db.is_connected());
        assert_eq!(ctx.db.path(), ctx.file("db.sqlite"));
        assert!(ctx.db.products().list().is_empty());
        let activities = ctx.db.activities().list();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].kind, "Skiing");

        // the source file is copied, not moved
        assert!(other.exists());
        assert!(!ctx.db.has_unwatched_error());
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_garbage_keeps_store(ctx: &mut TransferTestContext) {
        let garbage = ctx.file("garbage.sqlite");
        fs::write(&garbage, "definitely not sqlite ".repeat(64)).unwrap();

        let result = ctx.db.import_from(&garbage);
        assert!(matches!(result, Err(DbError::ImportUnreadable { .. })));
        assert!(ctx.db.has_unwatched_error());

        assert!(ctx.db.is_connected());
        assert_eq!(ctx.db.path(), ctx.file("db.sqlite"));
        assert_eq!(ctx.db.products().list().len(), 1);
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_missing_file_keeps_store(ctx: &mut TransferTestContext) {
        let missing = ctx.file("nowhere.sqlite");

        assert!(ctx.db.import_from(&missing).is_err());
        assert!(!missing.exists());
        assert!(ctx.db.has_unwatched_error());
        assert_eq!(ctx.db.products().list().len(), 1);

        assert!(matches!(ctx.db.import_from(""), Err(DbError::EmptyPath)));
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_of_canonical_file_is_noop(ctx: &mut TransferTestContext) {
        let canonical = ctx.file("db.sqlite");
        ctx.db.import_from(&canonical).unwrap();

        assert!(ctx.db.is_connected());
        assert_eq!(ctx.db.products().list().len(), 1);
    }
}
