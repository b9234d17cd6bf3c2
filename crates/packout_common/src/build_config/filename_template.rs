use packout_utils::{concat_string, extract_hash_pattern::extract_hash_pattern};

/// A filename pattern such as `asset/[name].js` or
/// `assets/[name]-[hash:8][extname]`.
///
/// Supported placeholders:
/// - `[name]`: the product's base name.
/// - `[hash]` / `[hash:len]`: a content digest, optionally truncated.
/// - `[ext]`: the original extension without the leading dot.
/// - `[extname]`: the original extension with the leading dot, or nothing for
///   extensionless files.
#[derive(Debug, Clone)]
pub struct FilenameTemplate {
  template: String,
}

impl FilenameTemplate {
  pub fn new(template: String) -> Self {
    Self { template }
  }

  pub fn template(&self) -> &str {
    &self.template
  }

  /// Whether rendering this template needs a content digest at all.
  pub fn has_hash_pattern(&self) -> bool {
    extract_hash_pattern(&self.template).is_some()
  }
}

#[derive(Debug, Default)]
pub struct FileNameRenderOptions<'me> {
  pub name: Option<&'me str>,
  pub hash: Option<&'me str>,
  pub ext: Option<&'me str>,
}

impl FilenameTemplate {
  pub fn render(&self, options: &FileNameRenderOptions) -> String {
    let mut output = self.template.clone();
    if let Some(name) = options.name {
      output = output.replace("[name]", name);
    }
    if let Some(hash) = options.hash {
      while let Some(extracted) = extract_hash_pattern(&output) {
        let len = extracted.len.map_or(hash.len(), |len| len.min(hash.len()));
        output = output.replace(&extracted.pattern, &hash[..len]);
      }
    }
    if let Some(ext) = options.ext {
      let extname = if ext.is_empty() { String::new() } else { concat_string!(".", ext) };
      output = output.replace("[extname]", &extname);
      output = output.replace("[ext]", ext);
    }
    output
  }
}

#[test]
fn test_render_fixed_names() {
  let template = FilenameTemplate::new("asset/[name].js".to_string());
  assert!(!template.has_hash_pattern());
  let rendered =
    template.render(&FileNameRenderOptions { name: Some("main"), ..Default::default() });
  assert_eq!(rendered, "asset/main.js");
}

#[test]
fn test_render_hash_and_extension() {
  let template = FilenameTemplate::new("assets/[name]-[hash:8][extname]".to_string());
  assert!(template.has_hash_pattern());
  let rendered = template.render(&FileNameRenderOptions {
    name: Some("logo"),
    hash: Some("0123456789abcdefghijkl"),
    ext: Some("svg"),
  });
  assert_eq!(rendered, "assets/logo-01234567.svg");
}

#[test]
fn test_render_full_hash_when_no_len_is_given() {
  let template = FilenameTemplate::new("[name]-[hash].js".to_string());
  let rendered = template.render(&FileNameRenderOptions {
    name: Some("vendor"),
    hash: Some("abcd1234"),
    ext: None,
  });
  assert_eq!(rendered, "vendor-abcd1234.js");
}

#[test]
fn test_render_extensionless_asset() {
  let template = FilenameTemplate::new("[name][extname]".to_string());
  let rendered =
    template.render(&FileNameRenderOptions { name: Some("LICENSE"), hash: None, ext: Some("") });
  assert_eq!(rendered, "LICENSE");
}
