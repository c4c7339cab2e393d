#[cfg(test)]
mod tests {
    use nutridesk::db::db::Db;
    use nutridesk::libs::form_field::FormSchema;
    use nutridesk::libs::product::{Product, Units};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ProductTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for ProductTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("db.sqlite"), FormSchema::default());
            ProductTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn seed(db: &mut Db) -> Vec<i64> {
        let products = [
            Product::new("Buckwheat", "Whole groats", 12.6, 3.3, 62.1, 313.0, Units::Grams),
            Product::new("Kefir", "1% fat", 3.0, 1.0, 4.0, 40.0, Units::Milliliters),
            Product::new("Egg", "Chicken, large", 6.3, 5.3, 0.4, 78.0, Units::Pieces),
            Product::new("Cottage cheese", "Low fat", 18.0, 1.8, 3.3, 101.0, Units::Grams),
        ];
        products.iter().map(|p| db.products().insert(p).unwrap()).collect()
    }

    #[test_context(ProductTestContext)]
    #[test]
    fn test_product_round_trip(ctx: &mut ProductTestContext) {
        let product = Product::new("Oats", "Rolled", 13.0, 6.5, 60.0, 370.0, Units::Grams);
        let id = ctx.db.products().insert(&product).unwrap();
        assert!(id > 0);

        let fetched = ctx.db.products().get(id).unwrap().unwrap();
        assert_eq!(fetched, Product { id: Some(id), ..product });
        assert!(!ctx.db.has_unwatched_error());
    }

    #[test_context(ProductTestContext)]
    #[test]
    fn test_list_returns_every_product(ctx: &mut ProductTestContext) {
        assert!(ctx.db.products().list().is_empty());

        let ids = seed(&mut ctx.db);
        let listed: Vec<i64> = ctx.db.products().list().iter().filter_map(|p| p.id).collect();
        assert_eq!(listed, ids);
    }

    #[test_context(ProductTestContext)]
    #[test]
    fn test_search_matches_name_and_description(ctx: &mut ProductTestContext) {
        seed(&mut ctx.db);

        let found = ctx.db.products().search(&["cheese"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Cottage cheese");

        // "fat" hits two descriptions, "egg" one name
        let found = ctx.db.products().search(&["fat", "egg"]);
        assert_eq!(found.len(), 3);

        // one row matching two terms comes back twice
        let found = ctx.db.products().search(&["Kef", "fir"]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], found[1]);

        assert!(ctx.db.products().search(&["quinoa"]).is_empty());
        assert!(ctx.db.products().search::<&str>(&[]).is_empty());
    }

    #[test_context(ProductTestContext)]
    #[test]
    fn test_search_treats_wildcards_literally(ctx: &mut ProductTestContext) {
        ctx.db.products().insert(&Product::new("Juice 100%", "", 0.5, 0.1, 10.0, 45.0, Units::Milliliters)).unwrap();
        ctx.db.products().insert(&Product::new("Juice 1000", "", 0.5, 0.1, 10.0, 45.0, Units::Milliliters)).unwrap();
        ctx.db.products().insert(&Product::new("Tea_bag", "", 0.0, 0.0, 0.2, 1.0, Units::Pieces)).unwrap();
        ctx.db.products().insert(&Product::new("Teabag", "", 0.0, 0.0, 0.2, 1.0, Units::Pieces)).unwrap();

        let found = ctx.db.products().search(&["100%"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Juice 100%");

        let found = ctx.db.products().search(&["a_b"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Tea_bag");

        assert!(ctx.db.products().search(&["'; DROP TABLE Products; --"]).is_empty());
        assert_eq!(ctx.db.products().list().len(), 4);
    }

    #[test_context(ProductTestContext)]
    #[test]
    fn test_filter_range_by_nutrient(ctx: &mut ProductTestContext) {
        seed(&mut ctx.db);

        let names = |products: Vec<Product>| products.into_iter().map(|p| p.name).collect::<Vec<_>>();

        assert_eq!(names(ctx.db.products().filter_range(10.0, 20.0, 'p')), vec!["Buckwheat", "Cottage cheese"]);
        assert_eq!(names(ctx.db.products().filter_range(0.0, 1.0, 'c')), vec!["Egg"]);
        assert_eq!(names(ctx.db.products().filter_range(1.0, 1.8, 'f')), vec!["Kefir", "Cottage cheese"]);
        // bounds are inclusive
        assert_eq!(names(ctx.db.products().filter_range(78.0, 101.0, 'k')), vec!["Egg", "Cottage cheese"]);
        assert!(ctx.db.products().filter_range(500.0, 900.0, 'k').is_empty());
    }

    #[test_context(ProductTestContext)]
    #[test]
    fn test_unknown_selector_applies_no_filter(ctx: &mut ProductTestContext) {
        seed(&mut ctx.db);

        let all = ctx.db.products().list();
        assert_eq!(ctx.db.products().filter_range(0.0, 1.0, 'x'), all);
        assert!(!ctx.db.has_unwatched_error());
    }

    #[test_context(ProductTestContext)]
    #[test]
    fn test_update_is_accepted_and_ignored(ctx: &mut ProductTestContext) {
        let id = seed(&mut ctx.db)[0];
        let mut product = ctx.db.products().get(id).unwrap().unwrap();
        let original = product.clone();

        product.name = "Renamed".to_string();
        product.kilocalories = 1.0;
        ctx.db.products().update(&product).unwrap();

        assert_eq!(ctx.db.products().get(id).unwrap().unwrap(), original);
    }
}
