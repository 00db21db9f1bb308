//! Headless driver: replays a pointer-event script through the editor and
//! reports the resulting polygons and areas.
//!
//! Usage: `planimeter [script.json]` — the script is a JSON array of pointer
//! events; with no argument it is read from stdin.

use std::fs;
use std::io::Read;
use std::process::ExitCode;

use planimeter_core::{Editor, PointerEvent};
use planimeter_render::RenderContext;
use thiserror::Error;

/// Errors while loading an event script.
#[derive(Debug, Error)]
enum ScriptError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),
}

fn load_script(path: Option<&str>) -> Result<Vec<PointerEvent>, ScriptError> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&text)?)
}

fn run(path: Option<&str>) -> Result<(), ScriptError> {
    let events = load_script(path)?;
    log::info!("replaying {} pointer events", events.len());

    let mut editor = Editor::new();
    for event in events {
        editor.handle_pointer_event(event);
    }

    let frame = RenderContext::new(&editor).build_frame();
    println!("{} polygon(s)", editor.store().len());
    for (polygon, drawable) in editor.store().iter().zip(&frame.polygons) {
        println!(
            "  {} vertices, area {} at ({:.1}, {:.1})",
            polygon.len(),
            drawable.label.text,
            drawable.label.anchor.x,
            drawable.label.anchor.y
        );
    }
    if !editor.chain().is_empty() {
        println!("open chain with {} vertices", editor.chain().len());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args().nth(1);
    match run(path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
