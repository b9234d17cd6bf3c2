use xxhash_rust::xxh3::xxh3_128;

use crate::base64::to_url_safe_base64;

/// Digests `input` into a short url-safe string, stable across builds and os.
pub fn xxhash_base64_url(input: &[u8]) -> String {
  to_url_safe_base64(xxh3_128(input).to_le_bytes())
}

#[test]
fn test_xxhash_base64_url() {
  let digest = xxhash_base64_url(b"console.log(1)");
  // 128 bits encode to 22 url-safe characters without padding.
  assert_eq!(digest.len(), 22);
  assert!(digest.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
  assert_eq!(digest, xxhash_base64_url(b"console.log(1)"));
  assert_ne!(digest, xxhash_base64_url(b"console.log(2)"));
}
