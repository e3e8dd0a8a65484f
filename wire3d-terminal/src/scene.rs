/// Scene scripts: one drawing command per line
use std::fs;
use std::path::Path;

use nalgebra::{Matrix4, Point2, Point3};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{space0, space1, u64 as parse_u64, u8 as parse_u8},
    combinator::{all_consuming, map, map_res},
    number::complete::double,
    sequence::{preceded, terminated, tuple},
    Finish, IResult,
};
use thiserror::Error;
use wire3d_core::{
    add_box, add_circle, add_curve, add_sphere, add_torus, Color, CurveKind, PixelSink,
    PointBuffer, Renderer,
};

/// Scene shown when no script is given
pub const DEMO_SCENE: &str = "\
# wire3d demo scene, drawn on a 500 x 500 canvas
color 0 255 255
box 60 440 50 100 100 100
color 255 255 0
sphere 350 340 0 90 20
color 255 0 255
torus 250 130 0 25 100 20
color 200 200 200
circle 250 250 0 240 60
bezier 20 20 150 220 350 -120 480 20 40
hermite 30 480 470 480 300 -300 300 300 40
";

/// Errors raised while loading a scene script
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// A single scene script command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Line {
        p0: Point3<f64>,
        p1: Point3<f64>,
    },
    Circle {
        center: Point3<f64>,
        r: f64,
        steps: usize,
    },
    Curve {
        kind: CurveKind,
        points: [Point2<f64>; 4],
        steps: usize,
    },
    Box {
        corner: Point3<f64>,
        width: f64,
        height: f64,
        depth: f64,
    },
    Sphere {
        center: Point3<f64>,
        r: f64,
        steps: usize,
    },
    Torus {
        center: Point3<f64>,
        r1: f64,
        r2: f64,
        steps: usize,
    },
    Color(Color),
}

fn number(input: &str) -> IResult<&str, f64> {
    preceded(space1, double)(input)
}

fn steps(input: &str) -> IResult<&str, usize> {
    map_res(preceded(space1, parse_u64), usize::try_from)(input)
}

fn point3(input: &str) -> IResult<&str, Point3<f64>> {
    map(tuple((number, number, number)), |(x, y, z)| Point3::new(x, y, z))(input)
}

fn point2(input: &str) -> IResult<&str, Point2<f64>> {
    map(tuple((number, number)), |(x, y)| Point2::new(x, y))(input)
}

fn curve<'a>(
    keyword: &'static str,
    kind: CurveKind,
) -> impl FnMut(&'a str) -> IResult<&'a str, Command> {
    move |input: &'a str| {
        map(
            preceded(tag(keyword), tuple((point2, point2, point2, point2, steps))),
            |(p0, p1, p2, p3, steps)| Command::Curve {
                kind,
                points: [p0, p1, p2, p3],
                steps,
            },
        )(input)
    }
}

fn command(input: &str) -> IResult<&str, Command> {
    alt((
        map(preceded(tag("line"), tuple((point3, point3))), |(p0, p1)| {
            Command::Line { p0, p1 }
        }),
        map(
            preceded(tag("circle"), tuple((point3, number, steps))),
            |(center, r, steps)| Command::Circle { center, r, steps },
        ),
        curve("hermite", CurveKind::Hermite),
        curve("bezier", CurveKind::Bezier),
        map(
            preceded(tag("box"), tuple((point3, number, number, number))),
            |(corner, width, height, depth)| Command::Box {
                corner,
                width,
                height,
                depth,
            },
        ),
        map(
            preceded(tag("sphere"), tuple((point3, number, steps))),
            |(center, r, steps)| Command::Sphere { center, r, steps },
        ),
        map(
            preceded(tag("torus"), tuple((point3, number, number, steps))),
            |(center, r1, r2, steps)| Command::Torus {
                center,
                r1,
                r2,
                steps,
            },
        ),
        map(
            preceded(
                tag("color"),
                tuple((
                    preceded(space1, parse_u8),
                    preceded(space1, parse_u8),
                    preceded(space1, parse_u8),
                )),
            ),
            |(r, g, b)| Command::Color(Color::new(r, g, b)),
        ),
    ))(input)
}

/// Parse a whole scene script. Blank lines and lines starting with `#` are
/// skipped.
pub fn parse_scene(input: &str) -> Result<Vec<Command>, SceneError> {
    let mut commands = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (_, parsed) = all_consuming(terminated(command, space0))(line)
            .finish()
            .map_err(|e| SceneError::Parse {
                line: index + 1,
                message: format!("cannot parse `{}`", e.input),
            })?;
        commands.push(parsed);
    }

    Ok(commands)
}

/// Geometry drawn in a single color
#[derive(Debug, Clone)]
pub struct Layer {
    pub color: Color,
    pub polygons: PointBuffer,
    pub edges: PointBuffer,
}

impl Layer {
    fn new(color: Color) -> Self {
        Self {
            color,
            polygons: PointBuffer::new(PointBuffer::GROWTH_STEP),
            edges: PointBuffer::new(PointBuffer::GROWTH_STEP),
        }
    }
}

/// Polygon and edge buffers built from scene commands
#[derive(Debug, Clone)]
pub struct Scene {
    /// Never empty: starts with one white layer and only ever grows
    layers: Vec<Layer>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            layers: vec![Layer::new(Color::WHITE)],
        }
    }

    pub fn from_commands(commands: &[Command]) -> Self {
        let mut scene = Self::new();
        for command in commands {
            scene.apply(command);
        }
        scene
    }

    /// Read and build a scene script from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_commands(&parse_scene(&text)?))
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Total number of triangles over all layers
    pub fn triangle_count(&self) -> usize {
        self.layers.iter().map(|l| l.polygons.len() / 3).sum()
    }

    /// Total number of edges over all layers
    pub fn edge_count(&self) -> usize {
        self.layers.iter().map(|l| l.edges.len() / 2).sum()
    }

    pub fn apply(&mut self, command: &Command) {
        if let Command::Color(color) = command {
            self.layers.push(Layer::new(*color));
            return;
        }

        let layer = self.current();
        match *command {
            Command::Line { p0, p1 } => layer.edges.add_edge(p0, p1),
            Command::Circle { center, r, steps } => add_circle(&mut layer.edges, center, r, steps),
            Command::Curve {
                kind,
                points: [p0, p1, p2, p3],
                steps,
            } => add_curve(&mut layer.edges, p0, p1, p2, p3, steps, kind),
            Command::Box {
                corner,
                width,
                height,
                depth,
            } => add_box(&mut layer.polygons, corner, width, height, depth),
            Command::Sphere { center, r, steps } => {
                add_sphere(&mut layer.polygons, center, r, steps)
            }
            Command::Torus {
                center,
                r1,
                r2,
                steps,
            } => add_torus(&mut layer.polygons, center, r1, r2, steps),
            Command::Color(_) => {}
        }
    }

    /// Draw every layer after applying `model` to a copy of its buffers
    pub fn draw<S: PixelSink + ?Sized>(
        &self,
        renderer: &Renderer,
        model: &Matrix4<f64>,
        sink: &mut S,
    ) -> usize {
        let mut drawn = 0;

        for layer in &self.layers {
            if !layer.polygons.is_empty() {
                let mut polygons = layer.polygons.clone();
                polygons.transform(model);
                drawn += renderer.draw_polygons(&polygons, sink, layer.color);
            }

            if !layer.edges.is_empty() {
                let mut edges = layer.edges.clone();
                edges.transform(model);
                if let Err(e) = renderer.draw_lines(&edges, sink, layer.color) {
                    log::warn!("skipping edges: {}", e);
                }
            }
        }

        drawn
    }

    fn current(&mut self) -> &mut Layer {
        self.layers
            .last_mut()
            .expect("scene always holds at least one layer")
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
