#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use nutridesk::db::db::Db;
    use nutridesk::libs::client::Client;
    use nutridesk::libs::form_field::FormSchema;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ClientTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for ClientTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("db.sqlite"), FormSchema::default());
            ClientTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn anna() -> Client {
        Client::new("Tomich", "Anna", "Petrovna", NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(), 'f', 34, "+7 900 123-45-67")
    }

    fn oleg() -> Client {
        Client::new("Sidorov", "Oleg", "Ivanovich", NaiveDate::from_ymd_opt(1978, 11, 2).unwrap(), 'm', 46, "")
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_client_round_trip(ctx: &mut ClientTestContext) {
        let client = anna();
        let id = ctx.db.clients().insert(&client).unwrap();

        let fetched = ctx.db.clients().get(id).unwrap().unwrap();
        assert!(fetched.is_init());
        assert_eq!(fetched, Client { id: Some(id), ..client });
        assert_eq!(fetched.full_name(), "Tomich Anna Petrovna");
        assert!(ctx.db.clients().get(id + 1).unwrap().is_none());
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_search_by_name_tokens(ctx: &mut ClientTestContext) {
        ctx.db.clients().insert(&anna()).unwrap();
        ctx.db.clients().insert(&oleg()).unwrap();

        let found = ctx.db.clients().search("Tom");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].surname, "Tomich");

        // each token is matched separately
        let found = ctx.db.clients().search("Tom om");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], found[1]);

        let found = ctx.db.clients().search("oleg, petrovna.");
        let surnames: Vec<&str> = found.iter().map(|c| c.surname.as_str()).collect();
        assert_eq!(surnames, vec!["Sidorov", "Tomich"]);

        assert!(ctx.db.clients().search("  ").is_empty());
        assert!(ctx.db.clients().search("100%").is_empty());
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_update_overwrites_existing_client(ctx: &mut ClientTestContext) {
        let id = ctx.db.clients().insert(&anna()).unwrap();
        let mut client = ctx.db.clients().get(id).unwrap().unwrap();

        client.surname = "Tomich-Lee".to_string();
        client.age = 35;
        client.tel_number = "+7 900 000-00-00".to_string();
        assert!(ctx.db.clients().update(&client).unwrap());

        assert_eq!(ctx.db.clients().get(id).unwrap().unwrap(), client);
        assert_eq!(ctx.db.clients().list().len(), 1);
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_update_unknown_client_is_rejected(ctx: &mut ClientTestContext) {
        // never inserted
        assert!(!ctx.db.clients().update(&oleg()).unwrap());

        let mut ghost = oleg();
        ghost.id = Some(42);
        assert!(!ctx.db.clients().update(&ghost).unwrap());

        assert!(ctx.db.clients().list().is_empty());
        assert!(!ctx.db.has_unwatched_error());
    }
}
