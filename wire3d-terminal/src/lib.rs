/// Terminal front end: renders a wire3d scene into character cells
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal,
};
use nalgebra::{Matrix4, Point3};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wire3d_core::{Renderer, RotationState, Transform};

pub mod canvas;
pub mod scene;

pub use canvas::AsciiCanvas;
pub use scene::{parse_scene, Command, Scene, SceneError, DEMO_SCENE};

/// Runtime options for [`TerminalApp`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Target frames per second
    pub fps: u32,
    /// Keep the scene slowly rotating
    pub spin: bool,
    /// Edge length of the square scene area mapped onto the terminal
    pub world_size: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            spin: true,
            world_size: 500.0,
        }
    }
}

/// Matrix taking scene coordinates to canvas cells: rotate about the middle
/// of the scene area, then scale that area onto the canvas.
pub fn model_matrix(
    rotation: &RotationState,
    world_size: f64,
    width: usize,
    height: usize,
) -> Matrix4<f64> {
    let half = world_size / 2.0;
    let spin = Transform::about(
        &Point3::new(half, half, 0.0),
        &Transform::rotation_matrix(rotation),
    );
    let fit = Transform::scale_matrix(width as f64 / world_size, height as f64 / world_size, 1.0);
    fit * spin
}

/// Main application struct for terminal rendering
pub struct TerminalApp {
    scene: Scene,
    rotation: RotationState,
    renderer: Renderer,
    canvas: AsciiCanvas,
    config: AppConfig,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
    visible: usize,
}

impl TerminalApp {
    pub fn new(scene: Scene, config: AppConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            scene,
            rotation: RotationState::default(),
            renderer: Renderer::default(),
            canvas: AsciiCanvas::new(width as usize, height as usize),
            config,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            visible: 0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / u64::from(self.config.fps.max(1)));

        while self.running {
            let frame_start = Instant::now();

            if event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            if self.config.spin {
                self.rotation.rotate(0.01, 0.015, 0.0);
            }

            self.render()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                KeyCode::Char('w') | KeyCode::Up => self.rotation.rotate(0.1, 0.0, 0.0),
                KeyCode::Char('s') | KeyCode::Down => self.rotation.rotate(-0.1, 0.0, 0.0),
                KeyCode::Char('a') | KeyCode::Left => self.rotation.rotate(0.0, -0.1, 0.0),
                KeyCode::Char('d') | KeyCode::Right => self.rotation.rotate(0.0, 0.1, 0.0),
                KeyCode::Char('e') => self.rotation.rotate(0.0, 0.0, 0.1),
                KeyCode::Char('r') => self.rotation.rotate(0.0, 0.0, -0.1),
                KeyCode::Char(' ') => self.config.spin = !self.config.spin,
                KeyCode::Char('0') => self.rotation = RotationState::default(),
                _ => {}
            },
            Event::Resize(width, height) => {
                log::debug!("terminal resized to {}x{}", width, height);
                self.canvas.resize(width as usize, height as usize);
            }
            _ => {}
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let model = model_matrix(
            &self.rotation,
            self.config.world_size,
            self.canvas.width(),
            self.canvas.height(),
        );

        self.canvas.clear();
        self.visible = self.scene.draw(&self.renderer, &model, &mut self.canvas);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.canvas.draw(&mut stdout)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(TermColor::Yellow),
            Print(format!(
                "wire3d | FPS: {:.1} | faces: {}/{} | WASD/Arrows=Rotate E/R=Roll Space=Spin 0=Reset Q=Quit",
                self.fps,
                self.visible,
                self.scene.triangle_count()
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
