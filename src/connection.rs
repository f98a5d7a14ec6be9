use std::f32::consts::{FRAC_PI_2, PI};

use crate::color::Rgb;
use crate::config::ArrowConfig;
use crate::geometry::{nearest_pair, offset, Point};
use crate::scene::{NodeId, Shape};

/// A side of a node rectangle. The midpoint of each side is the only legal
/// place an arrow can attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Right,
    Bottom,
    Left,
}

impl Anchor {
    /// Matches the order of [`crate::scene::Rect::anchors`].
    pub const ALL: [Anchor; 4] = [Anchor::Top, Anchor::Right, Anchor::Bottom, Anchor::Left];

    pub fn index(self) -> usize {
        match self {
            Anchor::Top => 0,
            Anchor::Right => 1,
            Anchor::Bottom => 2,
            Anchor::Left => 3,
        }
    }
}

/// Declarative description of an arrow from one node to another.
#[derive(Debug, Clone)]
pub struct Connection {
    /// Node the arrow points to; must already be in the scene.
    pub target: NodeId,
    /// Fixes the arrow's start side instead of the nearest-pair choice.
    pub start_anchor: Option<Anchor>,
    /// Fixes the arrow's end side instead of the nearest-pair choice.
    pub end_anchor: Option<Anchor>,
    /// Arrowhead opening angle in degrees; defaults to the configured angle.
    pub head_angle: Option<f32>,
    /// Extra arrowhead rotation in degrees.
    pub rotate_head: f32,
}

impl Connection {
    /// A plain connection with every override left to the resolver.
    pub fn to(target: NodeId) -> Self {
        Self {
            target,
            start_anchor: None,
            end_anchor: None,
            head_angle: None,
            rotate_head: 0.0,
        }
    }
}

/// A fully determined arrow between two resolved shapes.
#[derive(Debug, Clone)]
pub struct Arrow {
    /// Cubic Bezier control points: start anchor, two interior controls,
    /// end anchor.
    pub controls: [Point; 4],
    pub color_start: Rgb,
    pub color_end: Rgb,
    /// Ray angles in radians for the two slanted sides of the arrowhead.
    pub head_angles: (f32, f32),
}

/// Compute the arrow between `source` and `target`.
///
/// Anchors default to the globally closest midpoint pair; an override on
/// either side replaces that side's choice without affecting the other.
/// Control points push straight out from the chosen side so the curve
/// always meets a rectangle perpendicular to its edge.
pub(crate) fn resolve_arrow(
    source: &Shape,
    target: &Shape,
    connection: &Connection,
    config: &ArrowConfig,
) -> Arrow {
    let src = source.rect.anchors();
    let dst = target.rect.anchors();

    let (mut start, mut end, mut i, mut j) =
        nearest_pair(&src, &dst).unwrap_or((src[0], dst[0], 0, 0));
    if let Some(anchor) = connection.start_anchor {
        i = anchor.index();
        start = src[i];
    }
    if let Some(anchor) = connection.end_anchor {
        j = anchor.index();
        end = dst[j];
    }

    let opening = connection.head_angle.unwrap_or(config.head_angle);
    let mut head_left = (opening + connection.rotate_head).to_radians();
    let mut head_right = -(opening - connection.rotate_head).to_radians();

    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();

    let control_start = match Anchor::ALL[i] {
        Anchor::Top => offset(start, Point::new(0.0, -dy)),
        Anchor::Right => offset(start, Point::new(dx, 0.0)),
        Anchor::Bottom => offset(start, Point::new(0.0, dy)),
        Anchor::Left => offset(start, Point::new(-dx, 0.0)),
    };

    // The head rays track the incoming direction at the target side.
    let control_end = match Anchor::ALL[j] {
        Anchor::Top => {
            head_left -= FRAC_PI_2;
            head_right -= FRAC_PI_2;
            offset(end, Point::new(0.0, -dy))
        }
        Anchor::Right => offset(end, Point::new(dx, 0.0)),
        Anchor::Bottom => {
            head_left += FRAC_PI_2;
            head_right += FRAC_PI_2;
            offset(end, Point::new(0.0, dy))
        }
        Anchor::Left => {
            head_left += PI;
            head_right += PI;
            offset(end, Point::new(-dx, 0.0))
        }
    };

    Arrow {
        controls: [start, control_start, control_end, end],
        color_start: source.color,
        color_end: target.color,
        head_angles: (head_left, head_right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Rect;

    fn shape(x: f32, y: f32, width: f32, height: f32, color: Rgb) -> Shape {
        Shape {
            x,
            y,
            color,
            rect: Rect {
                x1: x,
                y1: y,
                x2: x + width,
                y2: y + height,
            },
        }
    }

    fn default_connection() -> Connection {
        Connection::to(NodeId(0))
    }

    #[test]
    fn anchor_indices_cover_all_sides() {
        for (index, anchor) in Anchor::ALL.iter().enumerate() {
            assert_eq!(anchor.index(), index);
        }
    }

    #[test]
    fn nearest_sides_are_chosen_for_horizontal_neighbors() {
        let config = ArrowConfig::default();
        let source = shape(0.0, 0.0, 100.0, 100.0, Rgb(255, 0, 0));
        let target = shape(500.0, 0.0, 100.0, 100.0, Rgb(0, 0, 255));
        let arrow = resolve_arrow(&source, &target, &default_connection(), &config);
        // Source right midpoint to target left midpoint.
        assert_eq!(arrow.controls[0], Point::new(100.0, 50.0));
        assert_eq!(arrow.controls[3], Point::new(500.0, 50.0));
    }

    #[test]
    fn overrides_replace_both_anchor_choices() {
        let config = ArrowConfig::default();
        let source = shape(0.0, 0.0, 100.0, 100.0, Rgb(255, 0, 0));
        let target = shape(500.0, 0.0, 100.0, 100.0, Rgb(0, 0, 255));
        let connection = Connection {
            start_anchor: Some(Anchor::Bottom),
            end_anchor: Some(Anchor::Top),
            ..default_connection()
        };
        let arrow = resolve_arrow(&source, &target, &connection, &config);
        assert_eq!(arrow.controls[0], Point::new(50.0, 100.0));
        assert_eq!(arrow.controls[3], Point::new(550.0, 0.0));
        // Control points push out from the overridden sides: straight down
        // from the source bottom, straight up from the target top.
        let dy = (arrow.controls[3].y - arrow.controls[0].y).abs();
        assert_eq!(arrow.controls[1], Point::new(50.0, 100.0 + dy));
        assert_eq!(arrow.controls[2], Point::new(550.0, 0.0 - dy));
    }

    #[test]
    fn single_override_leaves_other_side_to_nearest_pair() {
        let config = ArrowConfig::default();
        let source = shape(0.0, 0.0, 100.0, 100.0, Rgb(255, 0, 0));
        let target = shape(500.0, 0.0, 100.0, 100.0, Rgb(0, 0, 255));
        let connection = Connection {
            end_anchor: Some(Anchor::Bottom),
            ..default_connection()
        };
        let arrow = resolve_arrow(&source, &target, &connection, &config);
        // Start still picked by the search, end forced to the bottom midpoint.
        assert_eq!(arrow.controls[0], Point::new(100.0, 50.0));
        assert_eq!(arrow.controls[3], Point::new(550.0, 100.0));
    }

    #[test]
    fn head_angles_default_to_symmetric_opening() {
        let config = ArrowConfig::default();
        let source = shape(0.0, 0.0, 100.0, 100.0, Rgb(255, 0, 0));
        let target = shape(500.0, 0.0, 100.0, 100.0, Rgb(0, 0, 255));
        let connection = Connection {
            end_anchor: Some(Anchor::Right),
            ..default_connection()
        };
        let arrow = resolve_arrow(&source, &target, &connection, &config);
        let opening = config.head_angle.to_radians();
        assert!((arrow.head_angles.0 - opening).abs() < 1e-6);
        assert!((arrow.head_angles.1 + opening).abs() < 1e-6);
    }

    #[test]
    fn head_angles_rotate_with_the_target_side() {
        let config = ArrowConfig::default();
        let source = shape(0.0, 0.0, 100.0, 100.0, Rgb(255, 0, 0));
        let target = shape(500.0, 0.0, 100.0, 100.0, Rgb(0, 0, 255));
        let opening = config.head_angle.to_radians();

        let cases = [
            (Anchor::Top, -FRAC_PI_2),
            (Anchor::Right, 0.0),
            (Anchor::Bottom, FRAC_PI_2),
            (Anchor::Left, PI),
        ];
        for (anchor, shift) in cases {
            let connection = Connection {
                end_anchor: Some(anchor),
                ..default_connection()
            };
            let arrow = resolve_arrow(&source, &target, &connection, &config);
            assert!(
                (arrow.head_angles.0 - (opening + shift)).abs() < 1e-6,
                "left ray for {anchor:?}"
            );
            assert!(
                (arrow.head_angles.1 - (-opening + shift)).abs() < 1e-6,
                "right ray for {anchor:?}"
            );
        }
    }

    #[test]
    fn rotate_head_shifts_both_rays() {
        let config = ArrowConfig::default();
        let source = shape(0.0, 0.0, 100.0, 100.0, Rgb(255, 0, 0));
        let target = shape(500.0, 0.0, 100.0, 100.0, Rgb(0, 0, 255));
        let connection = Connection {
            end_anchor: Some(Anchor::Right),
            rotate_head: 40.0,
            ..default_connection()
        };
        let arrow = resolve_arrow(&source, &target, &connection, &config);
        let expected_left = (config.head_angle + 40.0).to_radians();
        let expected_right = -(config.head_angle - 40.0).to_radians();
        assert!((arrow.head_angles.0 - expected_left).abs() < 1e-6);
        assert!((arrow.head_angles.1 - expected_right).abs() < 1e-6);
    }

    #[test]
    fn coincident_anchors_produce_finite_geometry() {
        let config = ArrowConfig::default();
        let source = shape(0.0, 0.0, 100.0, 100.0, Rgb(255, 0, 0));
        // Same rectangle: every candidate pair is zero-length.
        let target = shape(0.0, 0.0, 100.0, 100.0, Rgb(0, 0, 255));
        let arrow = resolve_arrow(&source, &target, &default_connection(), &config);
        assert_eq!(arrow.controls[0], arrow.controls[3]);
        assert_eq!(arrow.controls[0], arrow.controls[1]);
        for point in arrow.controls {
            assert!(point.x.is_finite() && point.y.is_finite());
        }
        assert!(arrow.head_angles.0.is_finite() && arrow.head_angles.1.is_finite());
    }
}
