use std::path::Path;

use packout::{
  BuildConfig, BuildProduct, Emitter, FrameworkPlugin, Output, OutputOptions, ProductKind,
};
use packout_fs::{FileSystem, MemoryFileSystem};

fn vite_like_config() -> BuildConfig {
  BuildConfig {
    root: Some("/app/front_ui".into()),
    plugins: Some(vec![FrameworkPlugin::Vue]),
    output: Some(OutputOptions {
      dir: Some("./../static/".to_string()),
      entry_file_names: Some("asset/[name].js".to_string()),
      chunk_file_names: Some("asset/[name].js".to_string()),
      asset_file_names: Some("asset/[name].[ext]".to_string()),
      empty_out_dir: None,
    }),
  }
}

fn sample_products() -> Vec<BuildProduct> {
  vec![
    BuildProduct::new(ProductKind::Entry, "console.log(\"main\");\n").with_name("main"),
    BuildProduct::new(ProductKind::Chunk, "export const widgets = [];\n")
      .with_origin("/app/front_ui/src/widgets/index.js"),
    BuildProduct::new(ProductKind::Asset, "body { margin: 0 }\n")
      .with_origin("/app/front_ui/src/app.css"),
    BuildProduct::new(ProductKind::Asset, "<svg></svg>\n")
      .with_origin("/app/front_ui/src/logo.svg"),
  ]
}

#[tokio::test]
async fn emits_the_fixed_asset_layout() {
  let fs = MemoryFileSystem::default();
  let mut emitter = Emitter::with_file_system(vite_like_config(), fs.clone());

  let output = emitter.write(sample_products()).await.unwrap();

  // Entries first, then secondary chunks, then assets by filename.
  let filenames = output.assets.iter().map(Output::filename).collect::<Vec<_>>();
  assert_eq!(
    filenames,
    vec!["asset/main.js", "asset/widgets.js", "asset/app.css", "asset/logo.svg"]
  );

  assert_eq!(
    fs.read_to_string(Path::new("/app/static/asset/main.js")).unwrap(),
    "console.log(\"main\");\n"
  );
  assert_eq!(
    fs.read_to_string(Path::new("/app/static/asset/widgets.js")).unwrap(),
    "export const widgets = [];\n"
  );
  assert_eq!(
    fs.read_to_string(Path::new("/app/static/asset/app.css")).unwrap(),
    "body { margin: 0 }\n"
  );
  assert_eq!(fs.read_to_string(Path::new("/app/static/asset/logo.svg")).unwrap(), "<svg></svg>\n");

  let Output::Chunk(main) = &output.assets[0] else { panic!("entry should be a chunk") };
  assert!(main.is_entry);
  assert_eq!(main.name, "main");
}

#[tokio::test]
async fn plan_is_write_without_the_disk() {
  let fs = MemoryFileSystem::default();
  let emitter = Emitter::with_file_system(vite_like_config(), fs.clone());

  let plan = emitter.plan(&sample_products()).await.unwrap();

  assert_eq!(plan.files[0].filename, "asset/main.js");
  assert_eq!(plan.files[0].absolute_path, Path::new("/app/static/asset/main.js"));
  assert_eq!(plan.files[1].filename, "asset/widgets.js");
  assert!(!fs.exists(Path::new("/app/static")));
}

#[tokio::test]
async fn default_filenames_follow_rollup_conventions() {
  let fs = MemoryFileSystem::default();
  let config = BuildConfig { root: Some("/app".into()), ..Default::default() };
  let emitter = Emitter::with_file_system(config, fs);

  let products = vec![
    BuildProduct::new(ProductKind::Entry, "export {}\n").with_origin("/app/src/main.ts"),
    BuildProduct::new(ProductKind::Chunk, "export const shared = 1;\n")
      .with_origin("/app/src/widgets/index.js"),
    BuildProduct::new(ProductKind::Asset, "<svg></svg>\n").with_origin("/app/src/logo.svg"),
  ];
  let plan = emitter.plan(&products).await.unwrap();

  assert_eq!(plan.files[0].filename, "main.js");

  // A bare `[hash]` renders the full 22 character digest.
  let chunk = plan.files[1].filename.as_str();
  assert!(chunk.starts_with("widgets-") && chunk.ends_with(".js"));
  assert_eq!(chunk.len(), "widgets-".len() + 22 + ".js".len());

  let asset = plan.files[2].filename.as_str();
  assert!(asset.starts_with("assets/logo-") && asset.ends_with(".svg"));

  // Same content, same config, same names on every run.
  let replanned = emitter.plan(&products).await.unwrap();
  assert_eq!(plan.files[1].filename, replanned.files[1].filename);
  assert_eq!(plan.files[2].filename, replanned.files[2].filename);
}

#[tokio::test]
async fn hashed_filenames_track_content() {
  let fs = MemoryFileSystem::default();
  let config = BuildConfig { root: Some("/app".into()), ..Default::default() };
  let emitter = Emitter::with_file_system(config, fs);

  let before = emitter
    .plan(&[BuildProduct::new(ProductKind::Chunk, "a").with_name("shared")])
    .await
    .unwrap();
  let after = emitter
    .plan(&[BuildProduct::new(ProductKind::Chunk, "b").with_name("shared")])
    .await
    .unwrap();
  assert_ne!(before.files[0].filename, after.files[0].filename);
}

#[tokio::test]
async fn duplicate_names_count_up_within_their_pool() {
  let fs = MemoryFileSystem::default();
  let mut emitter = Emitter::with_file_system(vite_like_config(), fs);

  let products = vec![
    BuildProduct::new(ProductKind::Entry, "1\n").with_name("main"),
    BuildProduct::new(ProductKind::Entry, "2\n").with_name("main"),
    BuildProduct::new(ProductKind::Asset, "main {}\n").with_name("main.css"),
  ];
  let output = emitter.write(products).await.unwrap();

  let filenames = output.assets.iter().map(Output::filename).collect::<Vec<_>>();
  // The asset pool is untouched by the script pool.
  assert_eq!(filenames, vec!["asset/main.js", "asset/main2.js", "asset/main.css"]);
}

#[tokio::test]
async fn colliding_filenames_are_rejected() {
  let fs = MemoryFileSystem::default();
  let emitter = Emitter::with_file_system(vite_like_config(), fs);

  // `main.js` the asset renders to `asset/main.js`, exactly where the entry
  // goes through `asset/[name].[ext]`.
  let products = vec![
    BuildProduct::new(ProductKind::Entry, "console.log(1)\n").with_name("main"),
    BuildProduct::new(ProductKind::Asset, "not a script\n").with_name("main.js"),
  ];
  let errors = emitter.plan(&products).await.unwrap_err();

  assert_eq!(errors.len(), 1);
  assert!(errors[0].to_string().contains("overwrites a previously emitted file"));
}

#[tokio::test]
async fn collisions_are_detected_on_the_normalized_path() {
  let fs = MemoryFileSystem::default();
  let mut config = vite_like_config();
  if let Some(output) = config.output.as_mut() {
    output.entry_file_names = Some("asset/./[name].js".to_string());
  }
  let emitter = Emitter::with_file_system(config, fs);

  // `asset/./main.js` and `asset/main.js` are the same file on disk, the
  // rendered strings differing must not hide that.
  let products = vec![
    BuildProduct::new(ProductKind::Entry, "console.log(1)\n").with_name("main"),
    BuildProduct::new(ProductKind::Asset, "not a script\n").with_name("main.js"),
  ];
  let errors = emitter.plan(&products).await.unwrap_err();

  assert_eq!(errors.len(), 1);
  assert!(errors[0].to_string().contains("/app/static/asset/main.js"));
}

#[tokio::test]
async fn out_dir_outside_the_root_is_not_emptied() {
  let fs = MemoryFileSystem::new(&[("/app/static/stale.js", "stale")]);
  let mut emitter = Emitter::with_file_system(vite_like_config(), fs.clone());

  let output = emitter.write(sample_products()).await.unwrap();

  assert!(fs.exists(Path::new("/app/static/stale.js")));
  assert_eq!(output.warnings.len(), 1);
  assert!(output.warnings[0].to_string().contains("will not be emptied"));
}

#[tokio::test]
async fn out_dir_inside_the_root_is_emptied_automatically() {
  let fs = MemoryFileSystem::new(&[("/app/dist/stale.js", "stale")]);
  let config = BuildConfig { root: Some("/app".into()), ..Default::default() };
  let mut emitter = Emitter::with_file_system(config, fs.clone());

  let products = vec![BuildProduct::new(ProductKind::Entry, "export {}\n").with_name("main")];
  let output = emitter.write(products).await.unwrap();

  assert!(!fs.exists(Path::new("/app/dist/stale.js")));
  assert!(fs.exists(Path::new("/app/dist/main.js")));
  assert!(output.warnings.is_empty());
}

#[tokio::test]
async fn empty_out_dir_can_be_forced_outside_the_root() {
  let fs = MemoryFileSystem::new(&[("/app/static/stale.js", "stale")]);
  let mut config = vite_like_config();
  if let Some(output) = config.output.as_mut() {
    output.empty_out_dir = Some(true);
  }
  let mut emitter = Emitter::with_file_system(config, fs.clone());

  let output = emitter.write(sample_products()).await.unwrap();

  assert!(!fs.exists(Path::new("/app/static/stale.js")));
  assert!(fs.exists(Path::new("/app/static/asset/main.js")));
  assert!(output.warnings.is_empty());
}

#[tokio::test]
async fn empty_out_dir_never_deletes_the_root() {
  let fs = MemoryFileSystem::new(&[("/app/src/main.ts", "source")]);
  let config = BuildConfig {
    root: Some("/app".into()),
    output: Some(OutputOptions {
      dir: Some(".".to_string()),
      empty_out_dir: Some(true),
      ..Default::default()
    }),
    ..Default::default()
  };
  let mut emitter = Emitter::with_file_system(config, fs.clone());

  let errors = emitter
    .write(vec![BuildProduct::new(ProductKind::Entry, "export {}\n").with_name("main")])
    .await
    .unwrap_err();

  assert!(errors[0].to_string().contains("Refusing to empty"));
  assert!(fs.exists(Path::new("/app/src/main.ts")));
}

#[tokio::test]
async fn empty_out_dir_false_keeps_previous_builds() {
  let fs = MemoryFileSystem::new(&[("/app/dist/stale.js", "stale")]);
  let config = BuildConfig {
    root: Some("/app".into()),
    output: Some(OutputOptions { empty_out_dir: Some(false), ..Default::default() }),
    ..Default::default()
  };
  let mut emitter = Emitter::with_file_system(config, fs.clone());

  emitter
    .write(vec![BuildProduct::new(ProductKind::Entry, "export {}\n").with_name("main")])
    .await
    .unwrap();

  assert!(fs.exists(Path::new("/app/dist/stale.js")));
  assert!(fs.exists(Path::new("/app/dist/main.js")));
}

#[tokio::test]
async fn invalid_patterns_fail_before_anything_is_written() {
  let fs = MemoryFileSystem::default();
  let config = BuildConfig {
    root: Some("/app".into()),
    output: Some(OutputOptions {
      dir: Some(String::new()),
      entry_file_names: Some("/abs/[name].js".to_string()),
      ..Default::default()
    }),
    ..Default::default()
  };
  let mut emitter = Emitter::with_file_system(config, fs.clone());

  let errors = emitter
    .write(vec![BuildProduct::new(ProductKind::Entry, "export {}\n").with_name("main")])
    .await
    .unwrap_err();

  assert_eq!(errors.len(), 2);
  assert!(!fs.exists(Path::new("/app/dist")));
}

#[tokio::test]
async fn binary_assets_round_trip_untouched() {
  let fs = MemoryFileSystem::default();
  let config = BuildConfig { root: Some("/app".into()), ..Default::default() };
  let mut emitter = Emitter::with_file_system(config, fs.clone());

  let png_header = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
  let products = vec![
    BuildProduct::new(ProductKind::Asset, png_header.clone()).with_origin("/app/src/icon.png"),
  ];
  let output = emitter.write(products).await.unwrap();

  let filename = output.assets[0].filename();
  assert!(filename.starts_with("assets/icon-") && filename.ends_with(".png"));
  let written = fs.read(&Path::new("/app/dist").join(filename)).unwrap();
  assert_eq!(written, png_header);
}

#[tokio::test]
async fn duplicate_plugins_are_reported_once() {
  let fs = MemoryFileSystem::default();
  let config = BuildConfig {
    root: Some("/app".into()),
    plugins: Some(vec![FrameworkPlugin::Vue, FrameworkPlugin::React, FrameworkPlugin::Vue]),
    ..Default::default()
  };
  let mut emitter = Emitter::with_file_system(config, fs);
  assert_eq!(emitter.warnings().len(), 1);

  let output = emitter
    .write(vec![BuildProduct::new(ProductKind::Entry, "export {}\n").with_name("main")])
    .await
    .unwrap();

  assert_eq!(output.warnings.len(), 1);
  assert!(output.warnings[0].to_string().contains("\"vue\""));
  assert!(output.warnings[0].to_string().contains("declared more than once"));
}

#[tokio::test]
async fn scripts_with_non_utf8_content_are_rejected() {
  let fs = MemoryFileSystem::default();
  let config = BuildConfig { root: Some("/app".into()), ..Default::default() };
  let mut emitter = Emitter::with_file_system(config, fs);

  let errors = emitter
    .write(vec![BuildProduct::new(ProductKind::Entry, vec![0xff, 0xfe]).with_name("main")])
    .await
    .unwrap_err();

  assert!(errors[0].to_string().contains("must be utf8"));
}
