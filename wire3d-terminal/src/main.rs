/// wire3d Terminal Demo - Rotating wireframe scene
///
/// Renders a scene script (or the built-in demo scene) with backface culling.
/// Controls:
///   - WASD / Arrow Keys: Rotate the scene
///   - E/R: Roll rotation
///   - Space: Toggle auto-rotation
///   - 0: Reset rotation
///   - Q/ESC: Quit
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use wire3d_terminal::{parse_scene, AppConfig, Scene, TerminalApp, DEMO_SCENE};

#[derive(Parser, Debug)]
#[command(name = "wire3d-terminal", version, about = "Render wireframe scenes in the terminal")]
struct Args {
    /// Scene script to render; the built-in demo scene is used when omitted
    scene: Option<PathBuf>,

    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Start without auto-rotation
    #[arg(long)]
    no_spin: bool,

    /// Edge length of the square scene area shown on screen
    #[arg(long, default_value_t = 500.0)]
    world: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("wire3d Terminal Renderer - Loading...");

    let scene = match &args.scene {
        Some(path) => Scene::load(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => Scene::from_commands(&parse_scene(DEMO_SCENE)?),
    };
    log::info!(
        "scene ready: {} triangles, {} edges",
        scene.triangle_count(),
        scene.edge_count()
    );

    let config = AppConfig {
        fps: args.fps,
        spin: !args.no_spin,
        world_size: args.world,
    };

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(scene, config)?;
    app.run()?;

    println!("Thank you for using wire3d Terminal Renderer!");
    Ok(())
}
