//! Ray hit tests for gizmo handle picking
//!
//! Translation arrows are picked as thin finite cylinders around their axis
//! segment, rotation rings as an annular band in the ring's plane. Both
//! tests return the ray parameter of the nearest hit.

use glam::Vec3;
use mg_core::Ray;

/// Test a ray against a finite cylinder around the segment
/// `start..end` with the given radius.
///
/// Projects the ray into the plane perpendicular to the segment and solves
/// the resulting quadratic, then rejects hits outside the segment bounds.
/// Returns the ray parameter of the closest forward intersection.
pub fn ray_segment_cylinder(ray: &Ray, start: Vec3, end: Vec3, radius: f32) -> Option<f32> {
    let axis = end - start;
    let length = axis.length();
    if length < 1e-6 {
        return None;
    }
    let axis = axis / length;

    // Components of the ray perpendicular to the cylinder axis
    let d = ray.direction - axis * ray.direction.dot(axis);
    let offset = ray.origin - start;
    let o = offset - axis * offset.dot(axis);

    // at² + bt + c = 0
    let a = d.dot(d);
    let b = 2.0 * d.dot(o);
    let c = o.dot(o) - radius * radius;

    if a < 1e-12 {
        // Ray parallel to the axis: either always inside or always outside
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t < 0.0 {
        return None;
    }

    // Reject hits beyond the segment ends
    let along = (ray.point_at(t) - start).dot(axis);
    if along < 0.0 || along > length {
        return None;
    }

    Some(t)
}

/// Test a ray against a ring of the given radius lying in the plane
/// through `center` perpendicular to `normal`.
///
/// Intersects the ray with the ring's plane, then accepts the hit when the
/// in-plane distance to the ring circle is within `tolerance`.
pub fn ray_ring(
    ray: &Ray,
    center: Vec3,
    normal: Vec3,
    radius: f32,
    tolerance: f32,
) -> Option<f32> {
    let denom = ray.direction.dot(normal);

    // Nearly parallel to the ring plane
    if denom.abs() < 1e-6 {
        return None;
    }

    let t = (center - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }

    let in_plane = ray.point_at(t) - center;
    let distance_from_ring = (in_plane.length() - radius).abs();

    (distance_from_ring <= tolerance).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hits_cylinder() {
        let ray = Ray::new(Vec3::new(0.5, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = ray_segment_cylinder(&ray, Vec3::ZERO, Vec3::X, 0.1);
        assert!(hit.is_some());
        let t = hit.unwrap();
        assert!((t - 0.9).abs() < 1e-4);
    }

    #[test]
    fn test_ray_misses_cylinder() {
        // Pointing away
        let ray = Ray::new(Vec3::new(0.5, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(ray_segment_cylinder(&ray, Vec3::ZERO, Vec3::X, 0.1).is_none());
    }

    #[test]
    fn test_ray_outside_segment_bounds() {
        // Hits the infinite cylinder beyond the segment end
        let ray = Ray::new(Vec3::new(2.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(ray_segment_cylinder(&ray, Vec3::ZERO, Vec3::X, 0.1).is_none());
    }

    #[test]
    fn test_ray_parallel_to_cylinder() {
        let ray = Ray::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::X);
        assert!(ray_segment_cylinder(&ray, Vec3::ZERO, Vec3::X, 0.1).is_none());
    }

    #[test]
    fn test_ray_hits_ring() {
        // Ring of radius 0.8 in the XY plane, ray straight down onto it
        let ray = Ray::new(Vec3::new(0.8, 0.0, 2.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = ray_ring(&ray, Vec3::ZERO, Vec3::Z, 0.8, 0.05);
        assert!(hit.is_some());
        assert!((hit.unwrap() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_ray_misses_ring_center() {
        // Through the middle of the ring, outside the annular band
        let ray = Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(ray_ring(&ray, Vec3::ZERO, Vec3::Z, 0.8, 0.05).is_none());
    }

    #[test]
    fn test_ray_parallel_to_ring_plane() {
        let ray = Ray::new(Vec3::new(-2.0, 0.0, 0.0), Vec3::X);
        assert!(ray_ring(&ray, Vec3::ZERO, Vec3::Z, 0.8, 0.05).is_none());
    }

    #[test]
    fn test_ring_behind_ray() {
        let ray = Ray::new(Vec3::new(0.8, 0.0, -2.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(ray_ring(&ray, Vec3::ZERO, Vec3::Z, 0.8, 0.05).is_none());
    }
}
