use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_DATABASE: &str = "solarDB";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Builds the pooled client. The driver connects lazily, so this only
    /// fails on an invalid URI; use [`MongoDB::ping`] to check reachability.
    pub async fn new(uri: &str) -> mongodb::error::Result<Self> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.max_pool_size = Some(20);
        client_options.connect_timeout.get_or_insert(Duration::from_secs(5));
        client_options
            .server_selection_timeout
            .get_or_insert(Duration::from_secs(5));

        let db_name = client_options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        Ok(Self { db })
    }

    pub async fn ping(&self) -> mongodb::error::Result<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Pings in the background and logs the outcome, so an unreachable
    /// server never delays startup. Resolves to whether the ping succeeded.
    pub fn spawn_ping(&self) -> JoinHandle<bool> {
        let db = self.clone();
        tokio::spawn(async move {
            match db.ping().await {
                Ok(()) => {
                    log::info!("✅ MongoDB connected: {}", db.database().name());
                    true
                }
                Err(e) => {
                    log::error!("❌ MongoDB connection error: {}", e);
                    false
                }
            }
        })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
