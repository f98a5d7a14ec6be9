/// A position in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A straight line segment between two sampled points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

pub fn distance(p: Point, q: Point) -> f32 {
    ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt()
}

pub fn offset(p: Point, d: Point) -> Point {
    Point::new(p.x + d.x, p.y + d.y)
}

/// Offset `p` by `radius` along `angle` (radians).
pub fn offset_on_angle(p: Point, angle: f32, radius: f32) -> Point {
    Point::new(p.x + angle.cos() * radius, p.y + angle.sin() * radius)
}

/// Globally closest pair across two point sets, with the indices of both ends.
///
/// Exhaustive scan over every combination. Ties resolve to the earliest index
/// in `a`, then the earliest in `b`. Returns `None` when either set is empty.
pub fn nearest_pair(a: &[Point], b: &[Point]) -> Option<(Point, Point, usize, usize)> {
    let mut best = None;
    let mut best_dist = f32::INFINITY;
    for (i, &p) in a.iter().enumerate() {
        for (j, &q) in b.iter().enumerate() {
            let d = distance(p, q);
            if d < best_dist {
                best_dist = d;
                best = Some((p, q, i, j));
            }
        }
    }
    best
}

fn bezier_point(c0: Point, c1: Point, c2: Point, c3: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;
    Point::new(
        w0 * c0.x + w1 * c1.x + w2 * c2.x + w3 * c3.x,
        w0 * c0.y + w1 * c1.y + w2 * c2.y + w3 * c3.y,
    )
}

/// Sample a cubic Bezier curve into exactly `steps` line segments.
///
/// Segment 0 runs from `c0` to the sample at 1/steps. Every later segment k
/// bridges the samples at (k-1)/steps and (k+1)/steps, so neighboring
/// segments overlap by one step; the overlap smooths the drawn polyline.
pub fn cubic_bezier(c0: Point, c1: Point, c2: Point, c3: Point, steps: usize) -> Vec<Segment> {
    if steps == 0 {
        return Vec::new();
    }
    let n = steps as f32;
    let at = |t: f32| bezier_point(c0, c1, c2, c3, t);

    let mut segments = Vec::with_capacity(steps);
    segments.push(Segment {
        from: c0,
        to: at(1.0 / n),
    });
    for k in 1..steps {
        segments.push(Segment {
            from: at((k as f32 - 1.0) / n),
            to: at((k as f32 + 1.0) / n),
        });
    }
    segments
}
