#[derive(Debug, PartialEq, Eq)]
pub struct ExtractedHashPattern {
  pub pattern: String,
  pub len: Option<usize>,
}

/// Extracts the first `[hash]` or `[hash:len]` placeholder from a filename
/// template, if any.
pub fn extract_hash_pattern(template: &str) -> Option<ExtractedHashPattern> {
  let start = memchr::memmem::find(template.as_bytes(), b"[hash")?;
  let followed = &template[start + "[hash".len()..];

  let (len, followed) = match followed.strip_prefix(':') {
    Some(followed) => {
      let digits_end = followed.find(']')?;
      let len = followed[..digits_end].parse::<usize>().ok()?;
      (Some(len), &followed[digits_end..])
    }
    None => (None, followed),
  };

  if !followed.starts_with(']') {
    return None;
  }

  let end = template.len() - followed.len() + 1;
  Some(ExtractedHashPattern { pattern: template[start..end].to_string(), len })
}

#[test]
fn test_extract_hash_pattern() {
  assert_eq!(
    extract_hash_pattern("[name]-[hash].js"),
    Some(ExtractedHashPattern { pattern: "[hash]".to_string(), len: None })
  );
  assert_eq!(
    extract_hash_pattern("assets/[name]-[hash:8][extname]"),
    Some(ExtractedHashPattern { pattern: "[hash:8]".to_string(), len: Some(8) })
  );
  assert_eq!(extract_hash_pattern("asset/[name].js"), None);
  // A stray `[hash` that never closes is not a placeholder.
  assert_eq!(extract_hash_pattern("[hashes].js"), None);
  assert_eq!(extract_hash_pattern("[hash:].js"), None);
}
