//! Exact collinear-vertex removal for closed integer loops.

use super::geometry::GridVertex;

/// Cross product of `b - a` and `c - b`, widened to `i64`.
#[inline]
pub fn turn_cross(a: GridVertex, b: GridVertex, c: GridVertex) -> i64 {
    let (ux, uy) = (b.x as i64 - a.x as i64, b.y as i64 - a.y as i64);
    let (vx, vy) = (c.x as i64 - b.x as i64, c.y as i64 - b.y as i64);
    ux * vy - uy * vx
}

/// Remove every vertex that lies on the straight line through its neighbours.
///
/// The loop is treated as closed (the last vertex precedes the first). A
/// removal exposes a new neighbour pair which is re-tested immediately, so
/// runs of any length collapse to their two end corners. Stops once nothing
/// is removable or fewer than three vertices remain.
pub fn reduce_collinear(vertices: &mut Vec<GridVertex>) {
    if vertices.len() < 3 {
        return;
    }

    // Forward pass: the kept list acts as the cursor; popping its top
    // re-tests the new pair.
    let mut kept: Vec<GridVertex> = Vec::with_capacity(vertices.len());
    for &vertex in vertices.iter() {
        while kept.len() >= 2
            && turn_cross(kept[kept.len() - 2], kept[kept.len() - 1], vertex) == 0
        {
            kept.pop();
        }
        kept.push(vertex);
    }

    // Wrap-around: the tail and head were never tested against each other.
    let mut head = 0;
    loop {
        let len = kept.len() - head;
        if len < 3 {
            break;
        }
        let last = kept.len() - 1;
        if turn_cross(kept[last - 1], kept[last], kept[head]) == 0 {
            kept.pop();
        } else if turn_cross(kept[last], kept[head], kept[head + 1]) == 0 {
            head += 1;
        } else {
            break;
        }
    }

    kept.drain(..head);
    *vertices = kept;
}
