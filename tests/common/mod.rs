use flexfilter::EntitySchema;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

// Companies exist only as a plain table: relation-scoped conditions are resolved
// through `EntitySchema`, not through a Sea-ORM entity.
pub mod product {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "products")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub title: String,
        pub status: String,
        pub price: i32,
        pub company_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Schema used by every test: products with a belongs-to `company` relation.
pub fn product_schema() -> EntitySchema {
    EntitySchema::new("products").relation("company", "companies", "company_id", "id")
}

/// Capture translator trace output in test runs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// In-memory SQLite database seeded with a small product/company fixture.
pub async fn connect_with_fixtures() -> DatabaseConnection {
    init_tracing();
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("sqlite in-memory connection");

    let statements = [
        "CREATE TABLE companies (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            country TEXT NOT NULL
        )",
        "CREATE TABLE products (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            status TEXT NOT NULL,
            price INTEGER NOT NULL,
            company_id INTEGER NOT NULL
        )",
        "INSERT INTO companies (id, name, country) VALUES
            (1, 'Acme Motors', 'US'),
            (2, 'Bolt Cars', 'DE')",
        "INSERT INTO products (id, title, status, price, company_id) VALUES
            (1, 'red car', 'active', 150, 1),
            (2, 'blue car', 'active', 90, 2),
            (3, 'red bike', 'inactive', 120, 1),
            (4, 'green truck', 'active', 200, 2)",
    ];
    for sql in statements {
        db.execute_unprepared(sql).await.expect("fixture setup");
    }

    db
}
