//! Secret store abstraction used to resolve operator-provided values such as
//! the administrator phone number.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Name of the secret holding the administrator phone number.
pub const ADMIN_PHONE_SECRET: &str = "ADMIN_PHONE_NUMBER";

/// A read-only store of named secrets.
///
/// Absence of a secret is a normal, non-error condition; lookup failures are
/// absorbed into `None` so callers never need to distinguish "missing" from
/// "unreadable".
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Retrieves the secret stored under `name`, if any.
    async fn get(&self, name: &str) -> Option<String>;
}

/// A secret store backed by process environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore;

#[async_trait]
impl SecretStore for EnvSecretStore {
    async fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.trim().is_empty())
    }
}
