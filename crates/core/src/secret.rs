//! Device shared-secret validation.
//!
//! Devices authenticate each submission with a pre-shared secret. Where the
//! authorized secrets come from is up to the caller; the evaluator only asks
//! [`SecretValidator::validate_device_secret`].

use std::collections::HashSet;

use crate::hashing::sha256_hex;

/// Answers whether a presented device secret is currently authorized.
///
/// Implementations must be read-only and safe to call concurrently. Missing,
/// empty or unknown secrets return `false`; they are never an error.
pub trait SecretValidator: Send + Sync {
    fn validate_device_secret(&self, secret: Option<&str>) -> bool;
}

/// Validator backed by a fixed set of pre-shared secrets.
///
/// Only SHA-256 digests are kept; presented secrets are hashed and looked up
/// by digest.
#[derive(Debug, Clone, Default)]
pub struct SharedSecretValidator {
    digests: HashSet<String>,
}

impl SharedSecretValidator {
    /// Build a validator from plaintext secrets. Blank entries are skipped.
    pub fn new<I, S>(secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let digests = secrets
            .into_iter()
            .filter(|s| !s.as_ref().is_empty())
            .map(|s| hash_device_secret(s.as_ref()))
            .collect();
        Self { digests }
    }

    /// Number of distinct authorized secrets.
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
}

impl SecretValidator for SharedSecretValidator {
    fn validate_device_secret(&self, secret: Option<&str>) -> bool {
        match secret {
            Some(s) if !s.is_empty() => self.digests.contains(&hash_device_secret(s)),
            _ => false,
        }
    }
}

/// Compute the digest under which a device secret is stored.
pub fn hash_device_secret(secret: &str) -> String {
    sha256_hex(secret.as_bytes())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn validator() -> SharedSecretValidator {
        SharedSecretValidator::new(["device-alpha", "device-beta"])
    }

    #[test]
    fn accepts_configured_secret() {
        let v = validator();
        assert!(v.validate_device_secret(Some("device-alpha")));
        assert!(v.validate_device_secret(Some("device-beta")));
    }

    #[test]
    fn rejects_unknown_secret() {
        assert!(!validator().validate_device_secret(Some("device-gamma")));
    }

    #[test]
    fn rejects_missing_and_empty_secret() {
        let v = validator();
        assert!(!v.validate_device_secret(None));
        assert!(!v.validate_device_secret(Some("")));
    }

    #[test]
    fn comparison_is_exact() {
        let v = validator();
        assert!(!v.validate_device_secret(Some("Device-Alpha")));
        assert!(!v.validate_device_secret(Some(" device-alpha")));
    }

    #[test]
    fn blank_entries_are_ignored() {
        let v = SharedSecretValidator::new(["", "only-one", "only-one"]);
        assert_eq!(v.len(), 1);
        assert!(!v.validate_device_secret(Some("")));
    }

    #[test]
    fn empty_validator_rejects_everything() {
        let v = SharedSecretValidator::default();
        assert!(v.is_empty());
        assert!(!v.validate_device_secret(Some("anything")));
    }

    #[test]
    fn repeated_calls_agree() {
        let v = validator();
        let first = v.validate_device_secret(Some("device-alpha"));
        for _ in 0..10 {
            assert_eq!(v.validate_device_secret(Some("device-alpha")), first);
        }
    }

    #[test]
    fn shared_through_arc() {
        let v: Arc<dyn SecretValidator> = Arc::new(validator());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let v = Arc::clone(&v);
                std::thread::spawn(move || v.validate_device_secret(Some("device-beta")))
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
    }
}
