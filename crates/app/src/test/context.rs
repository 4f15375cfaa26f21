//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{customers::PgCustomersService, products::PgProductsService},
};

use super::db::TestDb;

pub(crate) struct TestContext {
    /// Held so the database outlives the services using it.
    _db: TestDb,
    pub(crate) products: PgProductsService,
    pub(crate) customers: PgCustomersService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            products: PgProductsService::new(db.clone()),
            customers: PgCustomersService::new(db),
            _db: test_db,
        }
    }
}
