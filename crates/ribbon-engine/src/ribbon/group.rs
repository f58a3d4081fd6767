use core::ops::Range;

/// Contiguous draw range `[start, start + count)` in a `RibbonBuffer`.
///
/// One group per drawable polyline; each is drawn as its own triangle strip.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Group {
    pub start: usize,
    pub count: usize,
}

impl Group {
    #[inline]
    pub const fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    #[inline]
    pub const fn end(self) -> usize {
        self.start + self.count
    }

    /// Vertex range in the form `draw` calls take.
    ///
    /// `None` when the range does not fit GPU vertex indices (`u32`).
    #[inline]
    pub fn vertices(self) -> Option<Range<u32>> {
        let start = u32::try_from(self.start).ok()?;
        let end = u32::try_from(self.end()).ok()?;
        Some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_match_slot_range() {
        assert_eq!(Group::new(8, 4).vertices(), Some(8..12));
    }

    #[test]
    fn vertices_end_at_u32_max() {
        let g = Group::new(u32::MAX as usize - 4, 4);
        assert_eq!(g.vertices(), Some(u32::MAX - 4..u32::MAX));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn vertices_past_u32_are_rejected() {
        assert_eq!(Group::new(u32::MAX as usize - 2, 4).vertices(), None);
        assert_eq!(Group::new(u32::MAX as usize + 1, 4).vertices(), None);
    }
}
