use mongodb::{Client, Database, bson::doc};
use tracing::info;

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub database_url: String,
    pub database_name: String,
}

#[derive(Debug, Clone)]
pub struct Mongo {
    db: Database,
}

impl Mongo {
    pub async fn new(config: MongoConfig) -> Result<Self, anyhow::Error> {
        let client = Client::with_uri_str(&config.database_url).await?;
        let db = client.database(&config.database_name);

        // Fail fast on unreachable servers instead of at the first query.
        db.run_command(doc! { "ping": 1 }).await?;
        info!(database = %config.database_name, "Connected to MongoDB");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> Database {
        self.db.clone()
    }
}
