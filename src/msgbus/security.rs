//! Security mode and key resolution for transport configs.

use std::fmt;

use crate::config::schema::KeyStore;
use crate::error::{CfgError, CfgResult};

/// Wildcard accepted in `AllowedClients`; admits every client.
pub const ALLOW_ALL: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityMode {
    /// No key material, plain sockets.
    Dev,
    /// CURVE-style key pairs from the key store.
    Prod,
}

impl SecurityMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SecurityMode::Dev => "dev",
            SecurityMode::Prod => "prod",
        }
    }
}

impl fmt::Display for SecurityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application-wide security settings resolved against one document snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SecurityContext<'d> {
    pub mode: SecurityMode,
    pub app_name: &'d str,
    pub keys: &'d KeyStore,
}

impl<'d> SecurityContext<'d> {
    /// Fails with `ConfigUnavailable` when production mode has no app name
    /// to select key material with.
    pub fn new(dev_mode: bool, app_name: &'d str, keys: &'d KeyStore) -> CfgResult<Self> {
        let mode = if dev_mode { SecurityMode::Dev } else { SecurityMode::Prod };
        if mode == SecurityMode::Prod && app_name.is_empty() {
            return Err(CfgError::ConfigUnavailable(
                "AppName is required in production mode".into(),
            ));
        }
        Ok(Self { mode, app_name, keys })
    }

    pub fn is_dev(&self) -> bool {
        self.mode == SecurityMode::Dev
    }

    /// Private key of this application.
    pub fn own_private_key(&self) -> CfgResult<&'d str> {
        self.keys
            .private
            .get(self.app_name)
            .map(String::as_str)
            .ok_or_else(|| CfgError::ConfigUnavailable(format!("private key of '{}'", self.app_name)))
    }

    /// Public key of any application, this one included.
    pub fn public_key(&self, app: &str) -> CfgResult<&'d str> {
        self.keys
            .public
            .get(app)
            .map(String::as_str)
            .ok_or_else(|| CfgError::ConfigUnavailable(format!("public key of '{}'", app)))
    }

    /// Map allowed client names to their public keys; `*` passes through.
    pub fn client_keys(&self, clients: &[String]) -> CfgResult<Vec<String>> {
        clients
            .iter()
            .map(|client| {
                if client == ALLOW_ALL {
                    Ok(ALLOW_ALL.to_string())
                } else {
                    self.public_key(client).map(str::to_string)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> KeyStore {
        let mut keys = KeyStore::default();
        keys.public.insert("Visualizer".into(), "VIS-PUB".into());
        keys.public.insert("VideoIngestion".into(), "VI-PUB".into());
        keys.private.insert("VideoIngestion".into(), "VI-PRIV".into());
        keys
    }

    #[test]
    fn test_prod_requires_app_name() {
        let keys = keys();
        assert!(matches!(
            SecurityContext::new(false, "", &keys),
            Err(CfgError::ConfigUnavailable(_))
        ));
        assert!(SecurityContext::new(true, "", &keys).unwrap().is_dev());
    }

    #[test]
    fn test_key_lookup() {
        let keys = keys();
        let ctx = SecurityContext::new(false, "VideoIngestion", &keys).unwrap();
        assert_eq!(ctx.own_private_key().unwrap(), "VI-PRIV");
        assert_eq!(ctx.public_key("Visualizer").unwrap(), "VIS-PUB");
        assert!(ctx.public_key("Unknown").is_err());

        let allowed = ctx
            .client_keys(&["Visualizer".to_string(), "*".to_string()])
            .unwrap();
        assert_eq!(allowed, vec!["VIS-PUB", "*"]);
        assert!(ctx.client_keys(&["Unknown".to_string()]).is_err());
    }
}
