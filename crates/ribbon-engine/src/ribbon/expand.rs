//! Point to vertex expansion.
//!
//! Every point becomes two or four vertices sharing its position. They differ
//! in the neighbor they point at and in the miter side (+1 / -1), which the
//! vertex shader turns into a perpendicular offset. For a line of `n` points:
//!
//! ```text
//! slot:     0    1  |  2    3    4    5  |  6    7
//! point:    p0   p0 |  p1   p1   p1   p1 |  p2   p2
//! neighbor: p1   p1 |  p0   p0   p2   p2 |  p1   p1
//! miter:    -1   +1 |  +1   -1   -1   +1 |  +1   -1
//! ```
//!
//! Point `i` owns slots starting at `4i - 2`. The first pair closes segment
//! `i-1 -> i` and only exists for `i > 0`; the second pair opens segment
//! `i -> i+1` and only exists for `i < n - 1`. End points therefore emit two
//! vertices and interior points four, `4n - 4` in total. Read as a triangle
//! strip, each segment becomes a quad and each interior point a small join quad.

use crate::coords::Vec3;
use crate::paint::Rgb;

use super::{LineColor, PointSequence};

/// Number of expanded vertices for a line of `points` points.
#[inline]
pub const fn vertex_count(points: usize) -> usize {
    if points < 2 { 0 } else { points * 4 - 4 }
}

/// Expanded attributes of a single line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpandedLine {
    pub positions: Vec<[f32; 3]>,
    pub neighbors: Vec<[f32; 3]>,
    pub miters: Vec<f32>,
    /// `None` when the line has no resolvable color.
    pub colors: Option<Vec<[f32; 3]>>,
}

impl ExpandedLine {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Expands one line into freshly allocated attribute arrays.
pub fn expand(sequence: &PointSequence) -> ExpandedLine {
    let n = vertex_count(sequence.points.len());
    let mut positions = vec![[0.0; 3]; n];
    let mut neighbors = vec![[0.0; 3]; n];
    let mut miters = vec![0.0; n];
    let mut colors = vec![[0.0; 3]; n];

    let colored = expand_into(
        sequence,
        AttributesMut {
            positions: &mut positions,
            neighbors: &mut neighbors,
            miters: &mut miters,
            colors: &mut colors,
        },
    );

    ExpandedLine {
        positions,
        neighbors,
        miters,
        colors: colored.then_some(colors),
    }
}

/// Mutable views into a line's slot range of the shared attribute arrays.
///
/// All four slices must have length `vertex_count(sequence.points.len())`.
pub(crate) struct AttributesMut<'a> {
    pub positions: &'a mut [[f32; 3]],
    pub neighbors: &'a mut [[f32; 3]],
    pub miters: &'a mut [f32],
    pub colors: &'a mut [[f32; 3]],
}

impl AttributesMut<'_> {
    #[inline]
    fn write(&mut self, slot: usize, position: Vec3, neighbor: Vec3, miter: f32) {
        self.positions[slot] = position.to_array();
        self.neighbors[slot] = neighbor.to_array();
        self.miters[slot] = miter;
    }
}

/// Expands `sequence` into `out`, which covers exactly this line's slots.
///
/// Returns true when colors were written. Color slots are left untouched for
/// uncolored lines.
pub(crate) fn expand_into(sequence: &PointSequence, mut out: AttributesMut<'_>) -> bool {
    let points = &sequence.points;
    let n = points.len();
    if n < 2 {
        return false;
    }
    debug_assert_eq!(out.positions.len(), vertex_count(n));

    for (i, &p) in points.iter().enumerate() {
        let base = 4 * i as isize - 2;

        if i > 0 {
            let slot = base as usize;
            let prev = points[i - 1];
            out.write(slot, p, prev, 1.0);
            out.write(slot + 1, p, prev, -1.0);
        }
        if i + 1 < n {
            let slot = (base + 2) as usize;
            let next = points[i + 1];
            out.write(slot, p, next, -1.0);
            out.write(slot + 1, p, next, 1.0);
        }
    }

    let Some(source) = ColorSource::resolve(&sequence.color, n) else {
        return false;
    };

    for i in 0..n {
        let c = source.at(i).to_array();
        let base = 4 * i as isize - 2;
        if i > 0 {
            let slot = base as usize;
            out.colors[slot] = c;
            out.colors[slot + 1] = c;
        }
        if i + 1 < n {
            let slot = (base + 2) as usize;
            out.colors[slot] = c;
            out.colors[slot + 1] = c;
        }
    }
    true
}

/// A `LineColor` that has been checked against the line's point count.
enum ColorSource<'a> {
    Uniform(Rgb),
    PerPoint(&'a [Rgb]),
}

impl<'a> ColorSource<'a> {
    fn resolve(color: &'a LineColor, points: usize) -> Option<Self> {
        match color {
            LineColor::None => None,
            LineColor::Uniform(c) => Some(ColorSource::Uniform(*c)),
            LineColor::PerPoint(cs) if cs.len() == points => Some(ColorSource::PerPoint(cs)),
            LineColor::PerPoint(cs) => {
                log::debug!(
                    "per-point color count {} does not match point count {points}; line left uncolored",
                    cs.len()
                );
                None
            }
        }
    }

    #[inline]
    fn at(&self, i: usize) -> Rgb {
        match self {
            ColorSource::Uniform(c) => *c,
            ColorSource::PerPoint(cs) => cs[i],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: &[[f32; 3]]) -> PointSequence {
        PointSequence::from_points(points.iter().copied())
    }

    fn corner() -> PointSequence {
        line(&[[0.0, 0.0, 0.0], [6.0, 0.0, 0.0], [6.0, 0.0, 6.0]])
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn vertex_count_formula() {
        assert_eq!(vertex_count(0), 0);
        assert_eq!(vertex_count(1), 0);
        assert_eq!(vertex_count(2), 4);
        assert_eq!(vertex_count(3), 8);
        assert_eq!(vertex_count(10), 36);
    }

    #[test]
    fn degenerate_lines_expand_to_nothing() {
        assert!(expand(&line(&[])).is_empty());
        assert!(expand(&line(&[[1.0, 2.0, 3.0]])).is_empty());
    }

    #[test]
    fn miter_signs_are_balanced() {
        for n in 2..12 {
            let pts: Vec<[f32; 3]> = (0..n).map(|i| [i as f32, (i * i) as f32, 0.0]).collect();
            let out = expand(&line(&pts));
            assert_eq!(out.len(), 4 * n - 4);
            let plus = out.miters.iter().filter(|&&m| m == 1.0).count();
            let minus = out.miters.iter().filter(|&&m| m == -1.0).count();
            assert_eq!(plus, 2 * n - 2);
            assert_eq!(minus, 2 * n - 2);
        }
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn corner_layout_matches_slot_table() {
        let p0 = [0.0, 0.0, 0.0];
        let p1 = [6.0, 0.0, 0.0];
        let p2 = [6.0, 0.0, 6.0];
        let out = expand(&corner());

        assert_eq!(out.positions, vec![p0, p0, p1, p1, p1, p1, p2, p2]);
        assert_eq!(out.neighbors, vec![p1, p1, p0, p0, p2, p2, p1, p1]);
        assert_eq!(out.miters, vec![-1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0]);
        assert_eq!(out.colors, None);
    }

    #[test]
    fn single_segment_is_one_quad() {
        let out = expand(&line(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]));
        assert_eq!(out.miters, vec![-1.0, 1.0, 1.0, -1.0]);
        assert_eq!(out.neighbors[0], [1.0, 0.0, 0.0]);
        assert_eq!(out.neighbors[3], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn every_neighbor_is_adjacent_input_point() {
        let pts: Vec<[f32; 3]> = (0..7).map(|i| [i as f32, 0.0, -(i as f32)]).collect();
        let out = expand(&line(&pts));
        for (pos, nb) in out.positions.iter().zip(&out.neighbors) {
            let i = pts.iter().position(|p| p == pos).unwrap();
            let j = pts.iter().position(|p| p == nb).unwrap();
            assert_eq!(i.abs_diff(j), 1);
        }
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn uniform_color_fills_every_slot() {
        let red = Rgb::new(1.0, 0.0, 0.0);
        let out = expand(&corner().with_color(red));
        let colors = out.colors.unwrap();
        assert_eq!(colors.len(), 8);
        assert!(colors.iter().all(|&c| c == [1.0, 0.0, 0.0]));
    }

    #[test]
    fn per_point_colors_follow_positions() {
        let cs = vec![
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.0, 1.0, 0.0),
            Rgb::new(0.0, 0.0, 1.0),
        ];
        let seq = corner().with_color(cs.clone());
        let out = expand(&seq);
        let colors = out.colors.unwrap();
        for (slot, pos) in out.positions.iter().enumerate() {
            let i = seq.points.iter().position(|p| p.to_array() == *pos).unwrap();
            assert_eq!(colors[slot], cs[i].to_array());
        }
    }

    #[test]
    fn mismatched_per_point_colors_are_dropped_entirely() {
        let seq = line(&[[0.0; 3], [1.0; 3], [2.0; 3], [3.0; 3]])
            .with_color(vec![Rgb::white(); 3]);
        let out = expand(&seq);
        assert_eq!(out.len(), 12);
        assert_eq!(out.colors, None);
    }
}
