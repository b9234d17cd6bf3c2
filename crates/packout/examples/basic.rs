use std::path::PathBuf;
use sugar_path::SugarPath;

use packout::{BuildConfig, BuildProduct, Emitter, OutputOptions, ProductKind};

#[tokio::main]
async fn main() {
  let root = PathBuf::from(env!("WORKSPACE_DIR"));
  let root = root.join("crates/packout/examples/basic");

  let mut emitter = Emitter::new(BuildConfig {
    root: Some(root.normalize()),
    output: Some(OutputOptions {
      entry_file_names: Some("asset/[name].js".to_string()),
      chunk_file_names: Some("asset/[name].js".to_string()),
      asset_file_names: Some("asset/[name].[ext]".to_string()),
      ..Default::default()
    }),
    ..Default::default()
  });

  let products = vec![
    BuildProduct::new(ProductKind::Entry, "console.log(\"main\");\n").with_name("main"),
    BuildProduct::new(ProductKind::Asset, "body { margin: 0 }\n").with_origin("src/app.css"),
  ];

  let _ = emitter.write(products).await;
}
