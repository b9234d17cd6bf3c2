pub fn to_url_safe_base64(input: impl AsRef<[u8]>) -> String {
  base64_simd::URL_SAFE_NO_PAD.encode_to_string(input)
}

#[test]
fn test_to_url_safe_base64() {
  assert_eq!(to_url_safe_base64("hello world"), "aGVsbG8gd29ybGQ");
  // No `+`, `/` or `=` may ever show up in a filename-safe digest.
  let encoded = to_url_safe_base64([0xfb, 0xff, 0xbf, 0x3e]);
  assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}
