use crate::outline::OutlinePoints;

/// Checks that all cross products between consecutive edges have the same sign.
///
/// Collinear and zero-length edges are ignored. Outlines with fewer than 3 points are convex.
///
/// The mesh pipeline never calls this, it is for callers that want to check their own outlines.
pub fn is_convex<T: OutlinePoints + ?Sized>(outline: &T) -> bool {
    let n = outline.point_count();
    if n < 3 {
        return true;
    }

    let mut sign = 0;

    for i in 0..n {
        let p1 = outline.point_at(i);
        let p2 = outline.point_at((i + 1) % n);
        let p3 = outline.point_at((i + 2) % n);

        let v1 = p2 - p1;
        let v2 = p3 - p2;

        // Cross product in 2D
        let cross = v1.x * v2.y - v1.y * v2.x;
        if cross == 0.0 {
            continue;
        }

        if sign == 0 {
            sign = if cross > 0.0 { 1 } else { -1 };
        } else if (cross > 0.0 && sign < 0) || (cross < 0.0 && sign > 0) {
            return false;
        }
    }

    true
}
