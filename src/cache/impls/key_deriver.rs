use crate::cache::structs::key_deriver::KeyDeriver;
use sha1::{Digest, Sha1};

impl KeyDeriver {
    /// Length of the hex SHA-1 between prefix and suffix.
    pub const HASH_HEX_LEN: usize = 40;

    pub fn new(prefix: &str) -> KeyDeriver {
        KeyDeriver { prefix: prefix.to_string() }
    }

    /// `prefix + hex(sha1(identifier)) + suffix`. The hash keeps arbitrary
    /// identifiers inside backend key constraints; the suffix separates
    /// facets of one identifier (e.g. "html" and "pdf" renderings).
    pub fn derive(&self, identifier: &str, suffix: Option<&str>) -> String {
        let mut hasher = Sha1::new();
        hasher.update(identifier.as_bytes());
        let hash = hex::encode(hasher.finalize().as_slice());
        format!("{}{}{}", self.prefix, hash, suffix.unwrap_or(""))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
