/// Concatenates any mix of `&str`-convertible values into a fresh `String`
/// without going through `format!`.
#[macro_export]
macro_rules! concat_string {
  () => { String::new() };
  ($($item:expr),+ $(,)?) => {{
    let mut buf = String::new();
    $( buf.push_str(AsRef::<str>::as_ref(&$item)); )+
    buf
  }};
}

#[test]
fn test_concat_string() {
  assert_eq!(concat_string!(), String::new());
  assert_eq!(concat_string!("chunk", "-", "2"), "chunk-2");
  let owned = String::from("main");
  assert_eq!(concat_string!(owned, ".js"), "main.js");
}
