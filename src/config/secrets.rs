use crate::config::ConfigError;
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where secret references in settings resolve from. Selected once at
/// startup by configuration, never sniffed from the environment at use
/// sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SecretBackend {
    #[default]
    #[serde(rename = "env")]
    Env,
    #[serde(rename = "registry")]
    Registry,
}

pub trait SecretResolver {
    fn resolve(&self, key: &str) -> Result<String, ConfigError>;
}

/// Resolves secrets from process environment variables.
pub struct EnvSecretResolver;

impl SecretResolver for EnvSecretResolver {
    fn resolve(&self, key: &str) -> Result<String, ConfigError> {
        std::env::var(key).map_err(|_| ConfigError::SecretNotFound(key.to_string()))
    }
}

/// Resolves secrets from a pre-loaded connection registry, e.g. a
/// credentials file handed to the process by an orchestrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySecretResolver {
    entries: BTreeMap<String, String>,
}

impl RegistrySecretResolver {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        RegistrySecretResolver { entries }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let entries: BTreeMap<String, String> = toml::from_str(contents)?;
        Ok(RegistrySecretResolver { entries })
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl SecretResolver for RegistrySecretResolver {
    fn resolve(&self, key: &str) -> Result<String, ConfigError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::SecretNotFound(key.to_string()))
    }
}

/// Resolves a settings value that is either a literal or a `${NAME}`
/// reference into the secret it denotes.
pub fn resolve_secret(value: &str, resolver: &dyn SecretResolver) -> Result<String, ConfigError> {
    match value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) {
        Some(key) => resolver.resolve(key),
        None => Ok(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_pass_through() {
        let resolver = RegistrySecretResolver::default();
        assert_eq!(
            resolve_secret("plain-password", &resolver).unwrap(),
            "plain-password"
        );
    }

    #[test]
    fn references_resolve_through_the_registry() {
        let mut resolver = RegistrySecretResolver::default();
        resolver.insert("meta_db_conn", "s3cret");
        assert_eq!(
            resolve_secret("${meta_db_conn}", &resolver).unwrap(),
            "s3cret"
        );
        assert!(matches!(
            resolve_secret("${missing}", &resolver),
            Err(ConfigError::SecretNotFound(key)) if key == "missing"
        ));
    }

    #[test]
    fn references_resolve_through_the_environment() {
        std::env::set_var("REFDATA_TEST_SECRET", "from-env");
        assert_eq!(
            resolve_secret("${REFDATA_TEST_SECRET}", &EnvSecretResolver).unwrap(),
            "from-env"
        );
        std::env::remove_var("REFDATA_TEST_SECRET");
    }

    #[test]
    fn registry_loads_from_toml() {
        let resolver = RegistrySecretResolver::from_toml_str(
            r#"
            meta_db_conn = "abc"
            mktdata_01_conn = "def"
            "#,
        )
        .unwrap();
        assert_eq!(resolver.resolve("mktdata_01_conn").unwrap(), "def");
    }
}
