//! Pure geometry helpers: distances, polygon areas, centroids.

use kurbo::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Signed area of a polygon via the shoelace formula.
///
/// Positive for counter-clockwise winding in a y-up coordinate space,
/// negative for the opposite winding. Returns 0.0 for fewer than 3 points
/// (a degenerate polygon, not an error).
pub fn signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        sum += points[i].x * points[j].y;
        sum -= points[j].x * points[i].y;
    }
    sum / 2.0
}

/// Unsigned polygon area. Winding-independent.
pub fn polygon_area(points: &[Point]) -> f64 {
    signed_area(points).abs()
}

/// Area-weighted centroid of a polygon.
///
/// Falls back to the vertex mean when the signed area is (near) zero, so
/// degenerate or collinear input still yields a usable label anchor.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ZERO;
    }

    let a = signed_area(points);
    if a.abs() > f64::EPSILON && points.len() >= 3 {
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..points.len() {
            let j = (i + 1) % points.len();
            let cross = points[i].x * points[j].y - points[j].x * points[i].y;
            cx += (points[i].x + points[j].x) * cross;
            cy += (points[i].y + points[j].y) * cross;
        }
        return Point::new(cx / (6.0 * a), cy / (6.0 * a));
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    Point::new(sum_x / n, sum_y / n)
}
