/// Replaces every character that is unsafe in a file name with `_`.
///
/// Dots are kept so multi-part stems like `app.worker` survive, except at the
/// start of the name where they would produce a hidden file.
pub fn sanitize_file_name(name: &str) -> String {
  let mut sanitized = String::with_capacity(name.len());
  for (index, char) in name.chars().enumerate() {
    let keep =
      char.is_ascii_alphanumeric() || matches!(char, '-' | '_') || (char == '.' && index > 0);
    sanitized.push(if keep { char } else { '_' });
  }
  sanitized
}

#[test]
fn test_sanitize_file_name() {
  assert_eq!(sanitize_file_name("app.worker"), "app.worker");
  assert_eq!(sanitize_file_name(".env"), "_env");
  assert_eq!(sanitize_file_name("logo@2x"), "logo_2x");
  assert_eq!(sanitize_file_name("a\0b/c"), "a_b_c");
}
