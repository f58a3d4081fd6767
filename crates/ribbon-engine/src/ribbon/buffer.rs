use std::sync::atomic::{AtomicU64, Ordering};

use super::expand::{expand_into, vertex_count, AttributesMut};
use super::{Group, PointSequence};

/// Flat vertex attributes for a set of polylines.
///
/// Lines are held as an optional primary line followed by a collection, and
/// are expanded in that order into shared arrays. Each drawable line gets one
/// `Group` describing its slot range.
///
/// Update model:
/// - `set_sequences()` replaces the input and marks the buffer dirty
/// - `rebuild()` recomputes every array from scratch
///
/// Nothing is rebuilt implicitly; callers decide when to pay for it.
///
/// ```
/// use ribbon_engine::ribbon::{PointSequence, RibbonBuffer};
///
/// let mut buffer = RibbonBuffer::new();
/// buffer.set_sequences(None, vec![PointSequence::from_points([[0.0; 3], [1.0; 3]])]);
/// buffer.rebuild();
/// assert_eq!(buffer.len(), 4);
/// ```
#[derive(Debug)]
pub struct RibbonBuffer {
    /// Process-unique; distinguishes buffers whose generations coincide.
    id: u64,

    primary: Option<PointSequence>,
    collection: Vec<PointSequence>,

    positions: Vec<[f32; 3]>,
    neighbors: Vec<[f32; 3]>,
    miters: Vec<f32>,
    /// Always as long as `positions`; zero where no color resolved.
    colors: Vec<[f32; 3]>,

    groups: Vec<Group>,

    visible: bool,
    has_vertex_colors: bool,
    dirty: bool,
    generation: u64,
}

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

impl Default for RibbonBuffer {
    fn default() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            primary: None,
            collection: Vec::new(),
            positions: Vec::new(),
            neighbors: Vec::new(),
            miters: Vec::new(),
            colors: Vec::new(),
            groups: Vec::new(),
            visible: false,
            has_vertex_colors: false,
            dirty: false,
            generation: 0,
        }
    }
}

impl RibbonBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer from `primary` and `collection` and builds it immediately.
    pub fn from_sequences(primary: Option<PointSequence>, collection: Vec<PointSequence>) -> Self {
        let mut buffer = Self::new();
        buffer.set_sequences(primary, collection);
        buffer.rebuild();
        buffer
    }

    /// Replaces all input lines. The arrays keep their old contents until `rebuild()`.
    pub fn set_sequences(&mut self, primary: Option<PointSequence>, collection: Vec<PointSequence>) {
        self.primary = primary;
        self.collection = collection;
        self.dirty = true;
    }

    #[inline]
    pub fn primary(&self) -> Option<&PointSequence> {
        self.primary.as_ref()
    }

    #[inline]
    pub fn collection(&self) -> &[PointSequence] {
        &self.collection
    }

    /// Input lines in expansion order: primary first, then the collection.
    pub fn sequences(&self) -> impl Iterator<Item = &PointSequence> {
        self.primary.iter().chain(self.collection.iter())
    }

    /// True when the input changed since the last `rebuild()`.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recomputes all attribute arrays and the group table.
    ///
    /// Slot ranges are assigned from per-line counts before any line is
    /// expanded, so every line writes a disjoint range. The new arrays replace
    /// the old ones only once fully written.
    pub fn rebuild(&mut self) {
        let counts: Vec<usize> = self
            .sequences()
            .map(|s| vertex_count(s.points.len()))
            .collect();
        let total: usize = counts.iter().sum();

        let mut positions = vec![[0.0f32; 3]; total];
        let mut neighbors = vec![[0.0f32; 3]; total];
        let mut miters = vec![0.0f32; total];
        let mut colors = vec![[0.0f32; 3]; total];

        let mut groups = Vec::with_capacity(counts.iter().filter(|&&c| c > 0).count());
        let mut has_vertex_colors = false;
        let mut start = 0;

        for (sequence, &count) in self.sequences().zip(&counts) {
            if count == 0 {
                continue;
            }
            let range = start..start + count;
            has_vertex_colors |= expand_into(
                sequence,
                AttributesMut {
                    positions: &mut positions[range.clone()],
                    neighbors: &mut neighbors[range.clone()],
                    miters: &mut miters[range.clone()],
                    colors: &mut colors[range],
                },
            );
            groups.push(Group::new(start, count));
            start += count;
        }

        log::debug!(
            "ribbon rebuild: {} lines, {} groups, {} vertices",
            counts.len(),
            groups.len(),
            total
        );

        self.positions = positions;
        self.neighbors = neighbors;
        self.miters = miters;
        self.colors = colors;
        self.groups = groups;
        self.visible = total > 0;
        self.has_vertex_colors = has_vertex_colors;
        self.dirty = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Draw ranges in expansion order, one per drawable line.
    #[inline]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[inline]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    #[inline]
    pub fn neighbors(&self) -> &[[f32; 3]] {
        &self.neighbors
    }

    #[inline]
    pub fn miters(&self) -> &[f32] {
        &self.miters
    }

    /// Per-vertex colors. Present at full length even when no line is colored;
    /// check `has_vertex_colors()` before relying on them.
    #[inline]
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// Number of expanded vertices across all groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// False when the last rebuild produced no vertices; nothing should be drawn.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True when at least one line resolved a color in the last rebuild.
    #[inline]
    pub fn has_vertex_colors(&self) -> bool {
        self.has_vertex_colors
    }

    /// Incremented by every `rebuild()`. GPU consumers compare it to decide
    /// whether to re-upload.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Identifies this buffer among all buffers in the process.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// `(id, generation)`: equal keys mean identical contents.
    #[inline]
    pub fn upload_key(&self) -> (u64, u64) {
        (self.id, self.generation)
    }
}
