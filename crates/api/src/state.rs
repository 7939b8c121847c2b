use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    currency: String,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        // Single-currency store; every price is stored and served in this unit.
        let currency = std::env::var("DEFAULT_CURRENCY").unwrap_or_else(|_| "USD".into());

        Self { db, currency }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}
