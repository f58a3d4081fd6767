use crate::coords::Vec3;
use crate::paint::Rgb;

/// Color source for one polyline.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LineColor {
    /// No per-vertex color; the material's line color applies.
    #[default]
    None,
    /// One color for every vertex of the line.
    Uniform(Rgb),
    /// One color per point. Must have exactly as many entries as the line has
    /// points, otherwise the whole line is treated as uncolored.
    PerPoint(Vec<Rgb>),
}

impl From<Rgb> for LineColor {
    #[inline]
    fn from(c: Rgb) -> Self {
        LineColor::Uniform(c)
    }
}

impl From<Vec<Rgb>> for LineColor {
    #[inline]
    fn from(cs: Vec<Rgb>) -> Self {
        LineColor::PerPoint(cs)
    }
}

/// One polyline: ordered points plus an optional color.
///
/// Lines with fewer than two points are valid but draw nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSequence {
    pub points: Vec<Vec3>,
    pub color: LineColor,
}

impl PointSequence {
    #[inline]
    pub fn new(points: Vec<Vec3>) -> Self {
        Self {
            points,
            color: LineColor::None,
        }
    }

    /// Builds a sequence from `[x, y, z]` arrays.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = [f32; 3]>,
    {
        Self::new(points.into_iter().map(Vec3::from).collect())
    }

    #[inline]
    pub fn with_color(mut self, color: impl Into<LineColor>) -> Self {
        self.color = color.into();
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true when the line has at least one segment.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_keeps_order() {
        let a = PointSequence::from_points([[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]);
        assert_eq!(a.points, vec![Vec3::new(0.0, 1.0, 2.0), Vec3::new(3.0, 4.0, 5.0)]);
    }

    #[test]
    fn drawable_needs_two_points() {
        assert!(!PointSequence::default().is_drawable());
        assert!(!PointSequence::from_points([[0.0; 3]]).is_drawable());
        assert!(PointSequence::from_points([[0.0; 3], [1.0; 3]]).is_drawable());
    }

    #[test]
    fn with_color_converts_single_and_list() {
        let s = PointSequence::default().with_color(Rgb::white());
        assert_eq!(s.color, LineColor::Uniform(Rgb::white()));

        let s = PointSequence::default().with_color(vec![Rgb::black()]);
        assert_eq!(s.color, LineColor::PerPoint(vec![Rgb::black()]));
    }
}
