//! SPROUT_PAD desktop simulator.
//!
//! Drives the shell without a display: commands arrive one per line on
//! stdin, the scene is rendered as text. Useful for demos, smoke runs, and
//! exercising the full event loop on machines with no attached frontend.
//!
//!   tap <object>    click the named scene object's center
//!   back            hardware back button
//!   type <text>     feed text input to the active screen
//!   erase           backspace
//!   show            print the scene in draw order
//!   tick [n]        advance n frames (default: one second)
//!   quit            exit

mod driver;
mod render;

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};

use sprout_core::{PadConfig, Shell, Signal};
use sprout_platform::DesktopPlatform;
use sprout_prefs::{FileStorage, PrefStore};
use sprout_scene::SceneRegistry;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "pad.toml".to_string());
    let config = PadConfig::load_or_default(Path::new(&config_path))
        .with_context(|| format!("loading {config_path}"))?;
    log::info!(
        "Starting SPROUT_PAD ({}x{}, data dir {})",
        config.screen_width,
        config.screen_height,
        config.data_dir.display(),
    );

    let store = PrefStore::new(FileStorage::new(&config.data_dir));
    let platform = DesktopPlatform::new();
    let fps = config.fps;
    let mut shell = Shell::new(config, store, platform);
    let mut scene = SceneRegistry::new();
    shell.sync_scene(&mut scene);

    println!("SPROUT_PAD simulator -- type 'show' to see the scene, 'quit' to exit.");
    render::print_scene(&scene);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        match driver::run_command(command, &mut shell, &mut scene, fps) {
            Ok(Signal::Continue) => {},
            Ok(Signal::Quit) => break,
            Err(e) => eprintln!("error: {e}"),
        }
    }

    log::info!("SPROUT_PAD session ended");
    Ok(())
}
