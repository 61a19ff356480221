//! Render and pack command implementations

use std::path::Path;
use std::process::ExitCode;

use image::RgbaImage;

use super::{
    input_dir, resolve_settings, select_source, RenderArgs, Selected, Settings, SourceArgs,
    EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS,
};
use crate::error::TotemError;
use crate::output::{generate_output_path, save_png, scaled_output_path};
use crate::pack::{
    write_pack, write_pack_archive, PackLayout, ICON_PATH, META_PATH, TEXTURE_PATH,
};
use crate::pipeline::export_variant;

/// Shared front half of render and pack: settings, skin, totem.
fn convert(selected: &Selected<'_>, render: &RenderArgs) -> Result<(Settings, RgbaImage), TotemError> {
    let settings = resolve_settings(render)?;
    let bytes = selected.load()?;
    let totem = settings.generator.generate_from_bytes(&bytes)?;
    Ok((settings, totem))
}

/// Execute the render command
pub fn run_render(source: &SourceArgs, output: Option<&Path>, render: &RenderArgs) -> ExitCode {
    let selected = match select_source(source) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let (_, totem) = match convert(&selected, render) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let output_path = generate_output_path(&selected.stem(), input_dir(source), output);
    if let Err(e) = save_png(&totem, &output_path) {
        eprintln!("Error: Failed to save '{}': {}", output_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Saved: {}", output_path.display());

    // The enlarged copy is only written on request
    if let Some(scale) = render.scale.filter(|s| *s > 1) {
        let large_path = scaled_output_path(&output_path, scale);
        if let Err(e) = save_png(&export_variant(&totem, scale), &large_path) {
            eprintln!("Error: Failed to save '{}': {}", large_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
        println!("Saved: {}", large_path.display());
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the pack command
pub fn run_pack(source: &SourceArgs, output: &Path, render: &RenderArgs) -> ExitCode {
    let selected = match select_source(source) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let (settings, totem) = match convert(&selected, render) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let scale = settings.scale(render);
    let pack = &settings.config.pack;
    let written = match PackLayout::for_path(output) {
        PackLayout::Archive => write_pack_archive(output, &totem, scale, pack).map(|()| {
            println!("Pack: {}", output.display());
            for entry in [ICON_PATH, META_PATH, TEXTURE_PATH] {
                println!("  {}", entry);
            }
        }),
        PackLayout::Directory => write_pack(output, &totem, scale, pack).map(|files| {
            println!("Pack: {}", output.display());
            println!("  {}", files.icon.display());
            println!("  {}", files.meta.display());
            println!("  {}", files.texture.display());
        }),
    };

    match written {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: Failed to write pack '{}': {}", output.display(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
