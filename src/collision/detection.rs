//! Narrow-phase overlap tests between collider shapes.
//!
//! Every routine returns a [`Manifold`] whose normal points from the first shape towards
//! the second. Only the lower half of the shape-pair table has a real routine; the mirrored
//! pairs swap their arguments and flip the normal.

use crate::math::Vec2;
use crate::shapes::{AxisAlignedBox, Disc, OrientedBox, RoundedBox, Shape};

use super::manifold::Manifold;

/// Distances below this are treated as coincident features.
const DEGENERATE_DISTANCE: f64 = 1e-10;
/// Closest-pair candidates within this of the minimum are averaged together.
const TIE_TOLERANCE: f64 = 1e-9;

/// Tests two world-space shapes for overlap.
pub fn check_collision(a: &Shape, b: &Shape) -> Option<Manifold> {
    match (a, b) {
        (Shape::AxisAlignedBox(a), Shape::AxisAlignedBox(b)) => check_aabb_aabb(a, b),
        (Shape::Disc(a), Shape::AxisAlignedBox(b)) => check_disc_aabb(a, b),
        (Shape::Disc(a), Shape::Disc(b)) => check_disc_disc(a, b),
        (Shape::RoundedBox(a), Shape::AxisAlignedBox(b)) => {
            check_rounded_box_rounded_box(a, &b.to_rounded_box())
        }
        (Shape::RoundedBox(a), Shape::Disc(b)) => {
            check_rounded_box_rounded_box(a, &b.to_rounded_box())
        }
        (Shape::RoundedBox(a), Shape::RoundedBox(b)) => check_rounded_box_rounded_box(a, b),
        (Shape::AxisAlignedBox(_), Shape::Disc(_))
        | (Shape::AxisAlignedBox(_), Shape::RoundedBox(_))
        | (Shape::Disc(_), Shape::RoundedBox(_)) => check_collision(b, a).map(Manifold::flipped),
    }
}

pub fn check_aabb_aabb(a: &AxisAlignedBox, b: &AxisAlignedBox) -> Option<Manifold> {
    check_rounded_box_rounded_box(&a.to_rounded_box(), &b.to_rounded_box())
}

/// Centre distance against the sum of radii.
pub fn check_disc_disc(a: &Disc, b: &Disc) -> Option<Manifold> {
    let offset = b.center - a.center;
    let dist_sq = offset.magnitude_squared();
    let radii_sum = a.radius + b.radius;

    if dist_sq >= radii_sum * radii_sum {
        return None;
    }

    let distance = dist_sq.sqrt();
    let normal = if distance > DEGENERATE_DISTANCE {
        offset / distance
    } else {
        Vec2::random_unit()
    };

    Some(Manifold {
        normal,
        point: a.center + normal * a.radius,
        depth: radii_sum - distance,
    })
}

/// Clamps the disc centre into the box. A centre that is already inside the box leaves
/// through the nearest face.
pub fn check_disc_aabb(a: &Disc, b: &AxisAlignedBox) -> Option<Manifold> {
    let closest = b.closest_point(a.center);
    let offset = closest - a.center;
    let dist_sq = offset.magnitude_squared();

    if dist_sq > DEGENERATE_DISTANCE * DEGENERATE_DISTANCE {
        if dist_sq >= a.radius * a.radius {
            return None;
        }
        let distance = dist_sq.sqrt();
        let normal = offset / distance;
        return Some(Manifold {
            normal,
            point: a.center + normal * a.radius,
            depth: a.radius - distance,
        });
    }

    let local = a.center - b.center;
    let gap_x = b.half_extents.x - local.x.abs();
    let gap_y = b.half_extents.y - local.y.abs();
    let (normal, gap) = if gap_x < gap_y {
        (Vec2::new(-local.x.signum(), 0.0), gap_x)
    } else {
        (Vec2::new(0.0, -local.y.signum()), gap_y)
    };

    Some(Manifold {
        normal,
        point: a.center + normal * a.radius,
        depth: gap + a.radius,
    })
}

/// General rounded-box test.
///
/// The inner boxes are first checked with the separating axis theorem. If they intersect,
/// the minimum-overlap axis gives the normal. Otherwise the closest pair of features is
/// compared against the sum of the corner radii.
pub fn check_rounded_box_rounded_box(a: &RoundedBox, b: &RoundedBox) -> Option<Manifold> {
    let radii_sum = a.radius + b.radius;

    match minimum_overlap_axis(&a.inner, &b.inner) {
        Some((normal, push)) => {
            let point = inner_contact_point(&a.inner, &b.inner) + normal * a.radius;
            Some(Manifold {
                normal,
                point,
                depth: push + radii_sum,
            })
        }
        None => closest_feature_manifold(a, b),
    }
}

/// SAT over both boxes' right and up axes. Returns the axis of least push-out, oriented
/// from A towards B, and the push-out distance; `None` when some axis separates them.
fn minimum_overlap_axis(a: &OrientedBox, b: &OrientedBox) -> Option<(Vec2, f64)> {
    let axes = [a.right, a.up(), b.right, b.up()];
    let mut best: Option<(Vec2, f64)> = None;

    for axis in axes {
        let (a_min, a_max) = a.project(axis);
        let (b_min, b_max) = b.project(axis);

        let overlap = a_max.min(b_max) - a_min.max(b_min);
        if overlap <= 0.0 {
            return None;
        }

        // Pushing B forward along the axis or backward, whichever is shorter.
        let forward = a_max - b_min;
        let backward = b_max - a_min;
        let (direction, push) = if forward <= backward {
            (axis, forward)
        } else {
            (-axis, backward)
        };

        if best.map_or(true, |(_, best_push)| push < best_push) {
            best = Some((direction, push));
        }
    }

    best
}

/// Mean of the corners of each box that lie inside the other one.
fn inner_contact_point(a: &OrientedBox, b: &OrientedBox) -> Vec2 {
    let inside = a
        .corners()
        .into_iter()
        .filter(|corner| b.contains_point(*corner))
        .chain(
            b.corners()
                .into_iter()
                .filter(|corner| a.contains_point(*corner)),
        );

    let (sum, count) = inside.fold((Vec2::ZERO, 0usize), |(sum, count), corner| {
        (sum + corner, count + 1)
    });

    if count == 0 {
        // Crossing boxes with no corner inside each other.
        (a.center + b.center) * 0.5
    } else {
        sum / count as f64
    }
}

/// Closest pair among the eight corner-to-box candidates.
fn closest_feature_manifold(a: &RoundedBox, b: &RoundedBox) -> Option<Manifold> {
    let mut candidates = [(Vec2::ZERO, Vec2::ZERO); 8];
    for (slot, corner) in candidates.iter_mut().zip(b.inner.corners()) {
        *slot = (a.inner.closest_point(corner), corner);
    }
    for (slot, corner) in candidates[4..].iter_mut().zip(a.inner.corners()) {
        *slot = (corner, b.inner.closest_point(corner));
    }

    let min_dist_sq = candidates
        .iter()
        .map(|(on_a, on_b)| on_a.distance_squared(*on_b))
        .fold(f64::INFINITY, f64::min);

    let (sum_a, sum_b, count) = candidates
        .iter()
        .filter(|(on_a, on_b)| on_a.distance_squared(*on_b) <= min_dist_sq + TIE_TOLERANCE)
        .fold((Vec2::ZERO, Vec2::ZERO, 0usize), |(sa, sb, n), (on_a, on_b)| {
            (sa + *on_a, sb + *on_b, n + 1)
        });
    let anchor_a = sum_a / count as f64;
    let anchor_b = sum_b / count as f64;

    let distance = min_dist_sq.sqrt();
    let radii_sum = a.radius + b.radius;
    if distance >= radii_sum {
        return None;
    }

    let displacement = anchor_b - anchor_a;
    let normal = if displacement.magnitude() > DEGENERATE_DISTANCE {
        displacement.normalize()
    } else {
        Vec2::random_unit()
    };

    Some(Manifold {
        normal,
        point: anchor_a + normal * a.radius,
        depth: radii_sum - distance,
    })
}
