//! Cache fingerprints for remote plugins

use sha2::{Digest, Sha256};

use super::location::GitReference;

/// Derive the cache key for a remote plugin.
///
/// Hex SHA-256 of `"{url}-{reference}"`: stable across runs and platforms,
/// and safe to use as a directory name. Equal `(url, reference)` pairs
/// always yield equal fingerprints.
pub fn fingerprint(url: &str, reference: &GitReference) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.update(b"-");
    hasher.update(reference.as_str().as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_inputs_yield_equal_fingerprints() {
        let a = fingerprint(
            "https://url/to/repo.git",
            &GitReference::Tag("1.0.0".to_string()),
        );
        let b = fingerprint(
            "https://url/to/repo.git",
            &GitReference::Tag("1.0.0".to_string()),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_inputs_yield_distinct_fingerprints() {
        let by_url = fingerprint(
            "https://url/to/repo/a.git",
            &GitReference::Tag("1.0.0".to_string()),
        );
        let by_other_url = fingerprint(
            "https://url/to/repo/b.git",
            &GitReference::Tag("1.0.0".to_string()),
        );
        let by_reference = fingerprint(
            "https://url/to/repo/a.git",
            &GitReference::Tag("2.0.0".to_string()),
        );
        assert_ne!(by_url, by_other_url);
        assert_ne!(by_url, by_reference);
    }

    #[test]
    fn fingerprint_is_hex_and_path_safe() {
        let fp = fingerprint(
            "https://url/to/repo.git",
            &GitReference::Sha("abc".to_string()),
        );
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn fingerprint_depends_on_the_revision_string_only() {
        // Tag "abc" and SHA "abc" key the same cache entry: the cache
        // identity is the (url, revision-string) pair.
        let tag = fingerprint(
            "https://url/to/repo.git",
            &GitReference::Tag("abc".to_string()),
        );
        let sha = fingerprint(
            "https://url/to/repo.git",
            &GitReference::Sha("abc".to_string()),
        );
        assert_eq!(tag, sha);
    }
}
