//! Batch command: convert a directory of skins in parallel

use glob::glob;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{resolve_settings, RenderArgs, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::error::TotemError;
use crate::output::{generate_output_path, save_png};
use crate::pipeline::TotemGenerator;

/// Find all PNG files under `dir` (recursively), skipping anything inside `exclude`.
pub fn find_skin_files(dir: &Path, exclude: &Path) -> Vec<PathBuf> {
    let pattern = format!("{}/**/*.png", dir.display());
    let mut files: Vec<PathBuf> = match glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).filter(|p| !is_within(p, exclude)).collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}

/// Whether `path` lies inside `dir`, ignoring a leading `./` on either side.
fn is_within(path: &Path, dir: &Path) -> bool {
    let path = path.strip_prefix(".").unwrap_or(path);
    let dir = dir.strip_prefix(".").unwrap_or(dir);
    path.starts_with(dir)
}

/// Output path for `input` found under `root`.
///
/// The input's subdirectory below `root` is mirrored under `out_dir`, so skins
/// sharing a file name in different folders never overwrite each other.
fn batch_output_path(input: &Path, root: &Path, out_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let target_dir = match input.parent().and_then(|p| p.strip_prefix(root).ok()) {
        Some(rel) if !rel.as_os_str().is_empty() => out_dir.join(rel),
        _ => out_dir.to_path_buf(),
    };
    generate_output_path(&stem, Some(&target_dir), None)
}

fn convert_file(
    generator: &TotemGenerator,
    input: &Path,
    root: &Path,
    out_dir: &Path,
) -> Result<PathBuf, TotemError> {
    let bytes = std::fs::read(input).map_err(|e| TotemError::io(input, e))?;
    let totem = generator.generate_from_bytes(&bytes)?;

    let output = batch_output_path(input, root, out_dir);
    save_png(&totem, &output)?;
    Ok(output)
}

/// Execute the batch command
pub fn run_batch(dir: &Path, output: &Path, render: &RenderArgs) -> ExitCode {
    if !dir.is_dir() {
        eprintln!("Error: '{}' is not a directory", dir.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let settings = match resolve_settings(render) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let files = find_skin_files(dir, output);
    if files.is_empty() {
        eprintln!("Error: No PNG files found in '{}'", dir.display());
        return ExitCode::from(EXIT_ERROR);
    }

    // Each skin gets its own pipeline run; the generator itself is read-only
    let generator = &settings.generator;
    let results: Vec<(PathBuf, Result<PathBuf, TotemError>)> = files
        .par_iter()
        .map(|input| (input.clone(), convert_file(generator, input, dir, output)))
        .collect();

    let mut failures = 0;
    for (input, result) in &results {
        match result {
            Ok(path) => println!("Saved: {}", path.display()),
            Err(e) => {
                failures += 1;
                eprintln!("Error: {}: {}", input.display(), e);
            }
        }
    }

    println!("Converted {}/{} skins", results.len() - failures, results.len());
    if failures > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
