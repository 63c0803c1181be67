//! Swap command implementation.
//!
//! Loads the source image and palette table, swaps palettes, and writes the
//! result.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::bitmap::ColourBitmap;
use crate::codec::{load_colour_bitmap, load_palettes, save_colour_bitmap};
use crate::error::{PalswapError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::swap::palette_swap;

use super::{Cli, SwapArgs};

pub fn run(cli: Cli) -> Result<()> {
    let args = SwapArgs::parse(&cli.tokens)?;

    let cwd = std::env::current_dir().map_err(|e| PalswapError::Io {
        path: ".".into(),
        message: format!("Failed to read current directory: {}", e),
    })?;
    let manifest = Manifest::resolve(cli.config.as_deref(), &cwd)?;

    let printer = if cli.quiet || manifest.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    execute(&args, &manifest, cli.check, &printer)?;
    Ok(())
}

/// Run one swap. Returns the rendered bitmap; DEST is only written when
/// `check` is false.
pub fn execute(
    args: &SwapArgs,
    manifest: &Manifest,
    check: bool,
    printer: &Printer,
) -> Result<ColourBitmap> {
    let destination = &args.destination;

    // Refuse before doing any work so nothing is half-written
    if !check && !manifest.overwrite && destination.exists() {
        return Err(PalswapError::DestinationExists {
            path: destination.clone(),
        });
    }

    let source = load_colour_bitmap(&args.source)?;
    printer.status(
        "Loading",
        &format!(
            "{} ({}x{})",
            display_path(&args.source),
            source.width(),
            source.height()
        ),
    );

    let palettes: Vec<Rc<_>> = load_palettes(&args.palette_table)?
        .into_iter()
        .map(Rc::new)
        .collect();
    printer.status(
        "Loading",
        &format!(
            "{} ({}, {} each)",
            display_path(&args.palette_table),
            plural(palettes.len(), "palette", "palettes"),
            plural(
                palettes.first().map_or(0, |p| p.len()),
                "colour",
                "colours"
            )
        ),
    );

    if args.source_palette == args.target_palette {
        printer.warning(
            "Warning",
            &format!(
                "source and target are both palette {}; output will match the source",
                args.source_palette
            ),
        );
    }

    let output = palette_swap(
        &source,
        &palettes,
        args.source_palette,
        args.target_palette,
    )?;
    printer.status(
        "Swapped",
        &format!("palette {} -> {}", args.source_palette, args.target_palette),
    );

    if check {
        printer.info("Checked", &format!("{} not written", display_path(destination)));
        return Ok(output);
    }

    if manifest.create_dirs {
        create_parent(destination)?;
    }

    save_colour_bitmap(&output, destination)?;
    printer.status("Finished", &display_path(destination));

    Ok(output)
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| PalswapError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })
        }
        _ => Ok(()),
    }
}
