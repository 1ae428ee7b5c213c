//! Command-to-event translation for the simulator.

use anyhow::{Result, bail};

use sprout_core::{Shell, Signal};
use sprout_platform::Platform;
use sprout_prefs::PrefStorage;
use sprout_scene::SceneRegistry;
use sprout_types::input::{Button, InputEvent};

use crate::render;

/// Execute one simulator command against the shell.
pub fn run_command<S: PrefStorage, P: Platform>(
    command: &str,
    shell: &mut Shell<S, P>,
    scene: &mut SceneRegistry,
    fps: u32,
) -> Result<Signal> {
    let (verb, rest) = match command.split_once(' ') {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (command, ""),
    };

    let signal = match verb {
        "tap" => {
            if rest.is_empty() {
                bail!("usage: tap <object>");
            }
            let rect = scene
                .get(rest)
                .map_err(|_| anyhow::anyhow!("no such object: {rest} (try 'show')"))?
                .rect();
            let (x, y) = rect.center();
            shell.handle_event(&InputEvent::PointerClick { x, y })
        },
        "back" => shell.handle_event(&InputEvent::ButtonPress(Button::Back)),
        "type" => {
            let mut signal = Signal::Continue;
            for c in rest.chars() {
                signal = shell.handle_event(&InputEvent::TextInput(c));
            }
            signal
        },
        "erase" => shell.handle_event(&InputEvent::Backspace),
        "tick" => {
            let frames: u32 = if rest.is_empty() {
                fps
            } else {
                rest.parse().map_err(|_| anyhow::anyhow!("bad frame count: {rest}"))?
            };
            for _ in 0..frames {
                shell.tick();
            }
            Signal::Continue
        },
        "show" => {
            shell.sync_scene(scene);
            render::print_scene(scene);
            Signal::Continue
        },
        "quit" | "exit" => Signal::Quit,
        other => bail!("unknown command: {other}"),
    };

    shell.sync_scene(scene);
    if verb == "tap" || verb == "back" {
        println!(
            "-> {:?} (depth {})",
            shell.current_view(),
            shell.nav_depth()
        );
    }
    Ok(signal)
}
