//! Batch-Treiber: beschriftet einen oder mehrere 7DTD-Welt-Ordner.
//!
//! Ohne Argumente wird jeder Unterordner des Arbeitsverzeichnisses
//! verarbeitet. Diagnosen landen in `mapping.log`; Fehler in einem
//! Ordner brechen nur diesen Ordner ab, nicht den Lauf.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};

use sdtd_map_markers::{annotate_world, timed, MapperOptions, NameTable};

#[derive(Parser, Debug)]
#[command(name = "sdtd-mapper")]
#[command(version)]
#[command(about = "Beschriftet 7DTD-Weltkarten mit POI-Markern und Legende")]
struct Args {
    /// Welt-Ordner; ohne Angabe: alle Unterordner des Arbeitsverzeichnisses
    folders: Vec<PathBuf>,

    /// Pfad zur Prefab-Namenstabelle
    #[arg(long, default_value = "prefab_lookup.csv")]
    lookup: PathBuf,

    /// Pfad zur Log-Datei (wird pro Lauf überschrieben)
    #[arg(long, default_value = "mapping.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(&args.log_file)?;

    log::info!("sdtd-mapper v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = MapperOptions::load_from_file(&MapperOptions::config_path());
    // Die Tabelle wird einmal geladen und von allen Ordnern geteilt;
    // ohne sie ist der gesamte Lauf sinnlos
    let table = NameTable::load_from_file(&args.lookup)?;

    let folders = if args.folders.is_empty() {
        scan_current_dir()?
    } else {
        args.folders
            .into_iter()
            .filter(|f| {
                if f.is_dir() {
                    true
                } else {
                    log::warn!("Kein Ordner, übersprungen: {}", f.display());
                    false
                }
            })
            .collect()
    };

    for folder in folders {
        println!("Processing {}", folder.display());
        log::info!("Processing {}", folder.display());

        let result = timed(&folder.display().to_string(), || {
            annotate_world(&folder, &table, &options)
        });
        if let Err(e) = result {
            log::error!("{}: {:#}", folder.display(), e);
        }
    }

    Ok(())
}

/// Initialisiert env_logger mit Ausgabe in die Log-Datei.
fn init_logger(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Log-Datei nicht schreibbar: {}", path.display()))?;
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Sammelt alle Unterordner des Arbeitsverzeichnisses.
fn scan_current_dir() -> Result<Vec<PathBuf>> {
    let mut folders = Vec::new();
    for entry in std::fs::read_dir(".").context("Arbeitsverzeichnis nicht lesbar")? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            folders.push(entry.path());
        }
    }
    folders.sort();
    Ok(folders)
}
