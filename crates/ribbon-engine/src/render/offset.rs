//! CPU mirror of the vertex shader's ribbon offset.
//!
//! Used for tests and for callers that need the expanded outline on the CPU
//! (hit testing, bounds). Must stay in sync with `shaders/ribbon.wgsl`.

use glam::{Vec2, Vec3, Vec4};

use super::Camera;

/// Sideways offset of a vertex in view space.
///
/// The direction towards the neighbor is rotated a quarter turn
/// (`(x, y) -> (-y, x)`) and scaled by `-miter * width / 2`. Coincident points
/// produce no offset.
pub fn miter_offset(position: Vec2, neighbor: Vec2, miter: f32, width: f32) -> Vec2 {
    let delta = neighbor - position;
    let len = delta.length();
    if len <= 1e-12 {
        return Vec2::ZERO;
    }
    let dir = delta / len;
    Vec2::new(-dir.y, dir.x) * (-miter * width * 0.5)
}

/// Clip-space position of one expanded vertex.
pub fn clip_position(camera: &Camera, position: [f32; 3], neighbor: [f32; 3], miter: f32, width: f32) -> Vec4 {
    let pos = camera.view * Vec3::from(position).extend(1.0);
    let other = camera.view * Vec3::from(neighbor).extend(1.0);
    let offset = miter_offset(pos.truncate().truncate(), other.truncate().truncate(), miter, width);
    camera.projection * Vec4::new(pos.x + offset.x, pos.y + offset.y, pos.z, pos.w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ribbon::{expand, PointSequence};

    fn approx(a: Vec4, b: Vec4) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn coincident_points_have_no_offset() {
        assert_eq!(miter_offset(Vec2::ONE, Vec2::ONE, 1.0, 3.0), Vec2::ZERO);
    }

    #[test]
    fn horizontal_segment_becomes_quad() {
        let seq = PointSequence::from_points([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
        let out = expand(&seq);
        let cam = Camera::identity();
        let clip: Vec<Vec4> = (0..out.len())
            .map(|i| clip_position(&cam, out.positions[i], out.neighbors[i], out.miters[i], 0.2))
            .collect();

        assert!(approx(clip[0], Vec4::new(0.0, 0.1, 0.0, 1.0)));
        assert!(approx(clip[1], Vec4::new(0.0, -0.1, 0.0, 1.0)));
        assert!(approx(clip[2], Vec4::new(1.0, 0.1, 0.0, 1.0)));
        assert!(approx(clip[3], Vec4::new(1.0, -0.1, 0.0, 1.0)));
    }

    #[test]
    fn strip_pairs_straddle_the_line() {
        // Zigzag in the XY plane; every pair of consecutive slots (2k, 2k+1)
        // shares a position and sits on opposite sides of it.
        let seq = PointSequence::from_points([
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 1.0, 0.0],
        ]);
        let out = expand(&seq);
        let cam = Camera::identity();
        for k in 0..out.len() / 2 {
            let (a, b) = (2 * k, 2 * k + 1);
            assert_eq!(out.positions[a], out.positions[b]);
            let pa = clip_position(&cam, out.positions[a], out.neighbors[a], out.miters[a], 0.5);
            let pb = clip_position(&cam, out.positions[b], out.neighbors[b], out.miters[b], 0.5);
            let center = Vec3::from(out.positions[a]).truncate();
            let da = pa.truncate().truncate() - center;
            let db = pb.truncate().truncate() - center;
            assert!((da + db).length() < 1e-5);
            assert!((da.length() - 0.25).abs() < 1e-5);
        }
    }

    #[test]
    fn join_pairs_keep_the_same_side() {
        // At an interior point the closing pair and the opening pair put their
        // first vertex on the same side of the line.
        let seq = PointSequence::from_points([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
        let out = expand(&seq);
        let cam = Camera::identity();
        let y = |i: usize| clip_position(&cam, out.positions[i], out.neighbors[i], out.miters[i], 0.2).y;
        assert!(y(2) > 0.0 && y(4) > 0.0);
        assert!(y(3) < 0.0 && y(5) < 0.0);
    }

    #[test]
    fn width_is_applied_in_view_space() {
        let cam = Camera::new(glam::Mat4::from_translation(glam::Vec3::new(5.0, 0.0, 0.0)), glam::Mat4::IDENTITY);
        let p = clip_position(&cam, [0.0, 0.0, 0.0], [0.0, 2.0, 0.0], -1.0, 1.0);
        assert!(approx(p, Vec4::new(4.5, 0.0, 0.0, 1.0)));
    }
}
