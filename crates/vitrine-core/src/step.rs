//! The [`Step`] snapshot record and its index-set and cursor companions.

use smallvec::SmallVec;

/// A set of array positions referenced by a [`Step`].
///
/// Uses `SmallVec<[usize; 2]>` because a step references at most two
/// positions in every case but one: a comparison touches two indices, a
/// swap touches two, a placement touches one. The single exception is
/// merge sort's range-completion step, whose `swapped` set covers the
/// whole merged range and spills to the heap transparently.
pub type IndexSet = SmallVec<[usize; 2]>;

/// Optional loop-cursor annotations attached to a [`Step`].
///
/// Each algorithm exposes its own cursors where they are meaningful:
/// bubble sort emits its outer and inner loop indices, selection sort
/// its pass position and scan index, quick sort its boundary pointer
/// and scan index. Merge sort emits no cursors at all. An absent cursor
/// means "not applicable at this step", never zero — consumers must not
/// default it.
///
/// # Examples
///
/// ```
/// use vitrine_core::StepCursors;
///
/// let both = StepCursors::both(0, 3);
/// assert_eq!(both.i, Some(0));
/// assert_eq!(both.j, Some(3));
///
/// let none = StepCursors::none();
/// assert_eq!(none.i, None);
/// assert_eq!(none.j, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StepCursors {
    /// Outer-loop index, pass position, or partition boundary.
    pub i: Option<usize>,
    /// Inner-loop index or scan position.
    pub j: Option<usize>,
}

impl StepCursors {
    /// No cursors apply at this step.
    pub fn none() -> Self {
        Self { i: None, j: None }
    }

    /// Only the outer cursor applies.
    pub fn outer(i: usize) -> Self {
        Self {
            i: Some(i),
            j: None,
        }
    }

    /// Only the inner cursor applies.
    pub fn inner(j: usize) -> Self {
        Self {
            i: None,
            j: Some(j),
        }
    }

    /// Both cursors apply.
    pub fn both(i: usize, j: usize) -> Self {
        Self {
            i: Some(i),
            j: Some(j),
        }
    }
}

/// One immutable snapshot of algorithm progress.
///
/// A `Step` captures the full contents of the working array at one
/// decision point, together with metadata describing what just happened:
/// which positions were compared, which were written, and a multi-line
/// human-readable explanation. The `array` field is a copy taken at
/// emission time — later mutations of the working array never
/// retroactively change an already-emitted step.
///
/// The `explanation` is purely descriptive. Consumers render it; they
/// must never parse it for logic.
///
/// # Examples
///
/// ```
/// use vitrine_core::{IndexSet, Step};
///
/// let step = Step {
///     array: vec![1, 5, 4, 2],
///     explanation: "• Comparing adjacent elements:\n• Position 1: 5\n• Position 2: 4".into(),
///     comparing: IndexSet::from_slice(&[1, 2]),
///     swapped: IndexSet::new(),
///     i: Some(0),
///     j: Some(1),
/// };
///
/// assert_eq!(step.array.len(), 4);
/// assert!(step.swapped.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    /// Full copy of the working array at this instant.
    pub array: Vec<i32>,
    /// Human-readable multi-line description of the operation.
    pub explanation: String,
    /// Positions currently being compared (0–2 indices).
    pub comparing: IndexSet,
    /// Positions just written, moved, or placed.
    pub swapped: IndexSet,
    /// Outer cursor, if meaningful at this step.
    pub i: Option<usize>,
    /// Inner cursor, if meaningful at this step.
    pub j: Option<usize>,
}

impl Step {
    /// Whether this step records neither a comparison nor a write.
    ///
    /// True for pass-boundary annotations ("starting partition",
    /// "splitting") only when both index sets are empty; always true
    /// for the final completion step.
    pub fn is_quiescent(&self) -> bool {
        self.comparing.is_empty() && self.swapped.is_empty()
    }
}
