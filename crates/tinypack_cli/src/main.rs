mod args;
mod manifest;

use std::{path::Path, process::ExitCode, time::Instant};

use ansi_term::Colour;
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use manifest::Manifest;
use tinypack::{format_diagnostics, BundleOutput, Bundler, BundlerOptions, OutputAsset};

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

fn print_output_assets(dir: &str, outputs: &[OutputAsset]) {
  let mut left = 0;
  let mut right = 0;

  let mut assets = Vec::with_capacity(outputs.len());

  for output in outputs {
    let size = format!("{:.2}", output.size_in_kb());

    if size.len() > right {
      right = size.len();
    }

    if output.filename.len() > left {
      left = output.filename.len();
    }

    assets.push((output.filename.as_str(), size));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (filename, size) in assets {
    println!(
      "{}{}{:left$} {}{}{:right$}{} kB",
      dim.paint(format!("{dir}/")),
      color.paint(filename),
      "",
      dim.paint("bundle"),
      dim.paint(" │ size: "),
      "",
      size,
      left = left - filename.len(),
      right = right - size.len()
    );
  }
}

fn print_output(dir: &str, output: &BundleOutput) {
  for warning in &output.warnings {
    println!("{} {}", Colour::Yellow.paint("Warning:"), warning);
  }

  if !output.diagnostics.is_empty() {
    println!("{}", format_diagnostics(&output.diagnostics));
  }

  if !output.artifact.pruned_dependencies.is_empty() {
    let pruned = output.artifact.pruned_dependencies.iter().map(ToString::to_string).collect::<Vec<_>>();
    println!("{} {}", Colour::White.dimmed().paint("Pruned:"), pruned.join(", "));
  }

  print_output_assets(dir, &output.assets);
}

fn bundler_options(args: &Commands, manifest: &mut Manifest) -> BundlerOptions {
  BundlerOptions {
    entry: args.input.entry.clone().or_else(|| manifest.entry.take()),
    used_exports: args.input.used_exports.clone().or_else(|| manifest.used_exports.take()),
    tree_shake: Some(!args.enhance.no_tree_shake),
    minify: Some(args.enhance.minify),
    lint: Some(args.enhance.lint),
    lint_rules: None,
    name: args.output.name.clone().or_else(|| manifest.name.take()),
    dir: args.output.dir.clone(),
    file: args.output.file.clone(),
  }
}

fn main() -> ExitCode {
  let filter = EnvFilter::try_from_env("TINYPACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  let args = Commands::parse();

  let mut manifest = match Manifest::load(&args.input.manifest) {
    Ok(manifest) => manifest,
    Err(err) => {
      println!("{} {:#}", Colour::Red.paint("Error:"), err);
      return ExitCode::FAILURE;
    }
  };
  let options = bundler_options(&args, &mut manifest);
  let base = args.input.manifest.parent().unwrap_or_else(|| Path::new("."));
  let modules = match manifest.into_descriptors(base) {
    Ok(modules) => modules,
    Err(err) => {
      println!("{} {:#}", Colour::Red.paint("Error:"), err);
      return ExitCode::FAILURE;
    }
  };

  tracing::debug!("loaded {} modules from {}", modules.len(), args.input.manifest.display());

  let mut bundler = Bundler::new(options);
  let start = Instant::now();
  match bundler.write(modules) {
    Ok(output) => {
      if !args.enhance.silent {
        print_output(&bundler.options().dir, &output);
      }

      let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
      println!("\n{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));
      ExitCode::SUCCESS
    }
    Err(err) => {
      println!("{} {:#}", Colour::Red.paint("Error:"), err);
      ExitCode::FAILURE
    }
  }
}
