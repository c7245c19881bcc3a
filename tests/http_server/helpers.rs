use std::{net::SocketAddr, sync::Arc};

use carelog::{
    config::{AppConfig, ServerConfig},
    http_server,
    persistence::{sqlite::SqliteBlobStore, traits::BlobStore},
    secrets::SecretStore,
    test_helpers::StaticSecretStore,
};
use reqwest::Client;
use tokio::task;

pub async fn create_test_store() -> Arc<SqliteBlobStore> {
    let store = SqliteBlobStore::new("sqlite::memory:")
        .await
        .expect("Failed to create in-memory store");
    store.run_migrations().await.expect("Failed to run migrations");
    Arc::new(store)
}

pub struct TestServer {
    pub address: SocketAddr,
    pub server_handle: task::JoinHandle<()>,
    pub client: Client,
}

impl TestServer {
    pub async fn new() -> Self {
        let store = create_test_store().await;
        Self::with_collaborators(store, Arc::new(StaticSecretStore::empty())).await
    }

    pub async fn with_collaborators(
        store: Arc<dyn BlobStore>,
        secrets: Arc<dyn SecretStore>,
    ) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get address");
        drop(listener); // Release port for the app to use

        let config = Arc::new(AppConfig {
            server: ServerConfig { listen_address: addr.to_string() },
            ..AppConfig::default()
        });

        // Spawn the actual app server
        let server_handle = task::spawn(async move {
            http_server::run_server_from_config(config, store, secrets).await;
        });

        // Wait for server to start
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;

        Self { address: addr, server_handle, client: Client::new() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.expect("Failed to send request")
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path))
    }

    pub fn cleanup(&self) {
        self.server_handle.abort();
    }
}
