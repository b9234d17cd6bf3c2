mod args;
mod types;

use std::{process::ExitCode, time::Instant};

use ansi_term::Colour;
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;

use packout::{
  BuildConfig, BuildError, BuildProduct, EmitPlan, Emitter, Output, OutputOptions, ProductKind,
  StrOrBytes,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

fn load_config(args: &InputArgs) -> anyhow::Result<BuildConfig> {
  if let Some(path) = &args.config {
    return BuildConfig::from_json_file(path);
  }

  let root = match &args.root {
    Some(root) => root.clone(),
    None => std::env::current_dir()?,
  };

  let default = root.join(BuildConfig::DEFAULT_FILE_NAME);
  if default.exists() { BuildConfig::from_json_file(default) } else { Ok(BuildConfig::default()) }
}

fn apply_overrides(config: &mut BuildConfig, args: &Commands) {
  if args.input.root.is_some() {
    config.root = args.input.root.clone();
  }

  if let Some(plugins) = &args.enhance.plugin {
    config.plugins = Some(plugins.iter().map(|plugin| plugin.clone().into()).collect());
  }

  let overrides = &args.output;
  let output = config.output.get_or_insert_with(OutputOptions::default);

  if overrides.dir.is_some() {
    output.dir = overrides.dir.clone();
  }

  if overrides.entry_file_names.is_some() {
    output.entry_file_names = overrides.entry_file_names.clone();
  }

  if overrides.chunk_file_names.is_some() {
    output.chunk_file_names = overrides.chunk_file_names.clone();
  }

  if overrides.asset_file_names.is_some() {
    output.asset_file_names = overrides.asset_file_names.clone();
  }

  if overrides.empty_out_dir.is_some() {
    output.empty_out_dir = overrides.empty_out_dir;
  }
}

fn read_product(kind: ProductKind, spec: &str) -> anyhow::Result<BuildProduct> {
  let (name, path) = match spec.split_once('=') {
    Some((name, path)) => (Some(name), path),
    None => (None, spec),
  };

  let bytes = std::fs::read(path)
    .map_err(|error| anyhow::anyhow!("Failed to read {kind} file {path}: {error}"))?;

  let source = match String::from_utf8(bytes) {
    Ok(code) => StrOrBytes::from(code),
    Err(error) => StrOrBytes::from(error.into_bytes()),
  };

  let mut product = BuildProduct::new(kind, source).with_origin(path);
  if let Some(name) = name {
    product = product.with_name(name);
  }

  Ok(product)
}

fn collect_products(args: &InputArgs) -> anyhow::Result<Vec<BuildProduct>> {
  let mut products = Vec::new();

  for (kind, specs) in [
    (ProductKind::Entry, &args.input),
    (ProductKind::Chunk, &args.chunk),
    (ProductKind::Asset, &args.asset),
  ] {
    for spec in specs.iter().flatten() {
      products.push(read_product(kind, spec)?);
    }
  }

  Ok(products)
}

fn print_planned_files(plan: &EmitPlan) {
  let dim = Colour::White.dimmed();

  for file in &plan.files {
    println!(
      "{}{} {}",
      dim.paint("<DIR>/"),
      Colour::Cyan.paint(file.filename.as_str()),
      dim.paint(format!("({})", file.kind)),
    );
  }
}

fn print_outputs(outputs: Vec<Output>) {
  let mut left = 0;
  let mut right = 0;

  let mut rows = Vec::with_capacity(outputs.len());

  for output in outputs {
    let size = format!("{:.2}", output.content_as_bytes().len() as f64 / 1024.0);

    let (filename, kind) = match output {
      Output::Chunk(chunk) if chunk.is_entry => (chunk.filename, "entry"),
      Output::Chunk(chunk) => (chunk.filename, "chunk"),
      Output::Asset(asset) => (asset.filename, "asset"),
    };

    if size.len() > right {
      right = size.len();
    }

    if filename.len() > left {
      left = filename.len()
    }

    rows.push((filename, size, kind));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (filename, size, kind) in rows {
    let filename_len = filename.len();

    println!(
      "{}{}{:left$} {}{}{:right$}{} kB",
      dim.paint("<DIR>/"),
      color.paint(filename.as_str()),
      "",
      dim.paint(kind),
      dim.paint(" │ size: "),
      "",
      size,
      left = left - filename_len,
      right = right - size.len()
    )
  }
}

fn print_errors(errors: &BuildError) -> ExitCode {
  for error in &**errors {
    println!("{} {}", Colour::Red.paint("Error:"), error);
  }

  ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
  let args = Commands::parse();

  let mut config = match load_config(&args.input) {
    Ok(config) => config,
    Err(error) => {
      println!("{} {}", Colour::Red.paint("Error:"), error);
      return ExitCode::FAILURE;
    }
  };

  apply_overrides(&mut config, &args);

  let products = match collect_products(&args.input) {
    Ok(products) => products,
    Err(error) => {
      println!("{} {}", Colour::Red.paint("Error:"), error);
      return ExitCode::FAILURE;
    }
  };

  let mut emitter = Emitter::new(config);

  if args.enhance.print_config {
    println!("{:#?}", emitter.options());
    return ExitCode::SUCCESS;
  }

  let start = Instant::now();

  if args.enhance.dry_run {
    match emitter.plan(&products).await {
      Ok(plan) => {
        if !args.enhance.silent {
          for warning in emitter.warnings() {
            println!("{} {}", Colour::Yellow.paint("Warning:"), warning);
          }

          print_planned_files(&plan);
        }
      }
      Err(errors) => return print_errors(&errors),
    }
  } else {
    match emitter.write(products).await {
      Ok(output) => {
        if !args.enhance.silent {
          // Print warnings
          for warning in output.warnings {
            println!("{} {}", Colour::Yellow.paint("Warning:"), warning);
          }

          // Print emitted files
          if !output.assets.is_empty() {
            print_outputs(output.assets);
          }
        }
      }
      Err(errors) => return print_errors(&errors),
    }
  }

  let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
  println!("\n{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));

  ExitCode::SUCCESS
}
