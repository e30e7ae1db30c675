//! glyphmap: render roguelike token maps
//!
//! Loads a token grid, places every tile (resolving wall junctions) and
//! prints the result.

mod display;

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::tty::IsTty;
use gm_core::{GameMap, GlyphMode, MapOptions};
use log::{debug, error};

/// Render a roguelike token map with box-drawing walls
#[derive(Parser, Debug)]
#[command(name = "glyphmap")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Token-grid map file
    map: PathBuf,

    /// Options file (OPTIONS=color,strict,graphics:fancy)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Glyph set
    #[arg(short = 'g', long = "graphics")]
    graphics: Option<GlyphMode>,

    /// Disable colors
    #[arg(long = "no-color")]
    no_color: bool,

    /// Fail on tokens with no tile kind
    #[arg(long = "strict")]
    strict: bool,

    /// Dump placed tiles as JSON instead of drawing the map
    #[arg(long = "json")]
    json: bool,

    /// Save the effective options (file plus flags) to this path
    #[arg(long = "write-config")]
    write_config: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// Options file values with command-line overrides on top
    fn options(&self) -> Result<MapOptions, Box<dyn Error>> {
        let mut options = match &self.config {
            Some(path) => MapOptions::load_from_file(path)?,
            None => MapOptions::default(),
        };
        if let Some(graphics) = self.graphics {
            options.graphics = graphics;
        }
        if self.no_color {
            options.color = false;
        }
        if self.strict {
            options.strict = true;
        }
        Ok(options)
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let options = args.options()?;
    debug!("options: {:?}", options);
    if let Some(path) = &args.write_config {
        options.save_to_file(path)?;
        debug!("options written to {}", path.display());
    }

    let map = GameMap::load_from_file(&args.map, &options)?;

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &map.tiles_sorted())?;
        writeln!(stdout)?;
        return Ok(());
    }

    let color = options.color && io::stdout().is_tty();
    let mode = display::effective_mode(options.graphics);
    display::write_map(&mut stdout, &map, mode, color)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
