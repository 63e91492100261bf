use bevy::prelude::*;

/// Ray-AABB intersection test (slab method)
/// Returns Some(distance) to the entry point if the ray hits the box, None otherwise.
/// A ray starting inside the box hits at distance 0.
pub fn ray_aabb_intersection(
    ray_origin: Vec3,
    ray_direction: Vec3,
    box_min: Vec3,
    box_max: Vec3,
) -> Option<f32> {
    if box_min.cmpgt(box_max).any() {
        return None;
    }

    let mut t_enter = 0.0_f32;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let direction = ray_direction[axis];
        let (lo, hi) = (box_min[axis], box_max[axis]);

        if direction.abs() < f32::EPSILON {
            // Parallel to this slab: the origin must already lie within it
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let mut t0 = (lo - origin) * inv;
        let mut t1 = (hi - origin) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    Some(t_enter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX_MIN: Vec3 = Vec3::new(-1.0, 0.0, -1.0);
    const BOX_MAX: Vec3 = Vec3::new(1.0, 2.0, 1.0);

    #[test]
    fn downward_ray_hits_box_top() {
        let hit = ray_aabb_intersection(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, BOX_MIN, BOX_MAX);
        assert_eq!(hit, Some(8.0));
    }

    #[test]
    fn ray_beside_box_misses() {
        let hit = ray_aabb_intersection(Vec3::new(3.0, 10.0, 0.0), Vec3::NEG_Y, BOX_MIN, BOX_MAX);
        assert_eq!(hit, None);
    }

    #[test]
    fn oblique_ray_hits_box_side() {
        let direction = Vec3::new(1.0, -1.0, 0.0).normalize();
        let hit = ray_aabb_intersection(Vec3::new(-3.0, 3.0, 0.0), direction, BOX_MIN, BOX_MAX)
            .expect("oblique ray should hit");
        let point = Vec3::new(-3.0, 3.0, 0.0) + direction * hit;
        assert!((point.x - -1.0).abs() < 1e-4, "entered through -X face, got {point:?}");
        assert!((point.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn origin_inside_box_hits_at_zero() {
        let hit = ray_aabb_intersection(Vec3::new(0.0, 1.0, 0.0), Vec3::X, BOX_MIN, BOX_MAX);
        assert_eq!(hit, Some(0.0));
    }

    #[test]
    fn box_behind_ray_is_ignored() {
        let hit = ray_aabb_intersection(Vec3::new(0.0, 10.0, 0.0), Vec3::Y, BOX_MIN, BOX_MAX);
        assert_eq!(hit, None);
    }

    #[test]
    fn axis_parallel_ray_depends_on_slab() {
        let inside = ray_aabb_intersection(Vec3::new(-5.0, 1.0, 0.5), Vec3::X, BOX_MIN, BOX_MAX);
        assert_eq!(inside, Some(4.0));

        let outside = ray_aabb_intersection(Vec3::new(-5.0, 3.0, 0.5), Vec3::X, BOX_MIN, BOX_MAX);
        assert_eq!(outside, None);
    }

    #[test]
    fn inverted_box_never_hits() {
        let hit = ray_aabb_intersection(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, BOX_MAX, BOX_MIN);
        assert_eq!(hit, None);
    }
}
