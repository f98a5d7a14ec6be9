use thiserror::Error;

use crate::color::{lerp_color, Rgb};
use crate::config::Config;
use crate::connection::{resolve_arrow, Arrow, Connection};
use crate::geometry::Point;

/// Handle to a node in a [`Scene`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Raw attributes of a storyboard node, before resolution.
#[derive(Debug, Clone, Default)]
pub struct PlotPoint {
    /// Horizontal position as a proportion of the canvas width.
    pub percent_time: f32,
    /// Vertical position as a proportion of the canvas height.
    pub vertical: f32,
    /// Real-valued index into the configured palette. Fractional values
    /// blend between the two adjacent entries; both the floor and ceil of
    /// this value must be valid palette indices.
    pub plot_line: f32,
    /// Label drawn at the top of the node ("Climax", "Pinch Point 1", ...).
    pub point_type: String,
    /// Bullet lines drawn inside the node.
    pub content: Vec<String>,
    /// Outgoing arrows. Each target must have been added to the scene
    /// before the node that owns the connection.
    pub connections: Vec<Connection>,
    pub override_width: Option<f32>,
    pub override_height: Option<f32>,
    pub override_color: Option<Rgb>,
}

/// Axis-aligned bounding rectangle with `x2 = x1 + width`, `y2 = y1 + height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Rect {
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Edge midpoints in anchor order: top, right, bottom, left.
    pub fn anchors(&self) -> [Point; 4] {
        [
            Point::new((self.x1 + self.x2) / 2.0, self.y1),
            Point::new(self.x2, (self.y1 + self.y2) / 2.0),
            Point::new((self.x1 + self.x2) / 2.0, self.y2),
            Point::new(self.x1, (self.y1 + self.y2) / 2.0),
        ]
    }
}

/// Resolved placement of a node: origin, fill color, bounding rectangle.
#[derive(Debug, Clone)]
pub struct Shape {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
    pub rect: Rect,
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("plot line {value} is outside the palette range 0..={max}")]
    PlotLineOutOfRange { value: f32, max: usize },
    #[error("node {source_node} connects to node {target}, which is not resolved yet")]
    UnresolvedTarget { source_node: usize, target: usize },
}

/// A node with its derived geometry, ready for rendering.
#[derive(Debug, Clone)]
pub struct ResolvedNode {
    pub point_type: String,
    pub content: Vec<String>,
    pub shape: Shape,
    pub arrows: Vec<Arrow>,
}

/// All nodes resolved in arena order.
#[derive(Debug, Clone)]
pub struct ResolvedScene {
    pub nodes: Vec<ResolvedNode>,
}

/// Node arena. Nodes carry raw attributes until [`Scene::resolve`] derives
/// every shape and arrow in one ordered pass; connections may only target
/// nodes added earlier, so the pass never revisits a node.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<PlotPoint>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, point: PlotPoint) -> NodeId {
        self.nodes.push(point);
        NodeId(self.nodes.len() - 1)
    }

    /// Attach an outgoing connection to an existing node.
    pub fn connect(&mut self, source: NodeId, connection: Connection) {
        self.nodes[source.0].connections.push(connection);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve every node's shape and outgoing arrows.
    ///
    /// Nodes are processed in arena order; a connection whose target has a
    /// higher index than its source is a construction-order violation and
    /// fails the whole pass.
    pub fn resolve(&self, config: &Config) -> Result<ResolvedScene, SceneError> {
        let mut nodes: Vec<ResolvedNode> = Vec::with_capacity(self.nodes.len());
        for (index, point) in self.nodes.iter().enumerate() {
            let shape = resolve_shape(point, config)?;
            let mut arrows = Vec::with_capacity(point.connections.len());
            for connection in &point.connections {
                let target = connection.target.0;
                if target >= index {
                    return Err(SceneError::UnresolvedTarget {
                        source_node: index,
                        target,
                    });
                }
                arrows.push(resolve_arrow(
                    &shape,
                    &nodes[target].shape,
                    connection,
                    &config.arrow,
                ));
            }
            nodes.push(ResolvedNode {
                point_type: point.point_type.clone(),
                content: point.content.clone(),
                shape,
                arrows,
            });
        }
        Ok(ResolvedScene { nodes })
    }
}

fn resolve_shape(point: &PlotPoint, config: &Config) -> Result<Shape, SceneError> {
    let max = config.colors.len().saturating_sub(1);
    if config.colors.is_empty()
        || !point.plot_line.is_finite()
        || point.plot_line < 0.0
        || point.plot_line > max as f32
    {
        return Err(SceneError::PlotLineOutOfRange {
            value: point.plot_line,
            max,
        });
    }

    let color = match point.override_color {
        Some(color) => color,
        None => {
            let start = point.plot_line.floor() as usize;
            let end = point.plot_line.ceil() as usize;
            lerp_color(
                config.colors[start],
                config.colors[end],
                point.plot_line - start as f32,
            )
        }
    };

    let width = point.override_width.unwrap_or(config.node.width);
    let height = point.override_height.unwrap_or(config.node.height);
    let x = config.canvas.width * point.percent_time;
    let y = config.canvas.height * point.vertical;

    Ok(Shape {
        x,
        y,
        color,
        rect: Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        },
    })
}
