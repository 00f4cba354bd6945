use crate::foundation::{
    error::{ScrollfxError, ScrollfxResult},
    math::clamp,
};

/// Ceiling applied to step progress so `floor(step_progress * count)` never reaches `count`.
pub const STEP_CEILING: f64 = 0.999;

/// Quantization of a progress sub-range into `count` discrete steps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StepSpec {
    /// Progress where step 0 begins.
    pub start: f64,
    /// Progress where the last step ends.
    pub end: f64,
    /// Number of steps (`N`).
    pub count: usize,
}

impl StepSpec {
    /// Steps over `[start, end]`.
    pub fn new(start: f64, end: f64, count: usize) -> Self {
        Self { start, end, count }
    }

    /// Steps over the whole unit interval.
    pub fn unit(count: usize) -> Self {
        Self::new(0.0, 1.0, count)
    }

    /// `count > 0` and a finite, non-empty range.
    pub fn validate(&self) -> ScrollfxResult<()> {
        if self.count == 0 {
            return Err(ScrollfxError::validation("step count must be > 0"));
        }
        if !(self.start.is_finite() && self.end.is_finite()) || self.start >= self.end {
            return Err(ScrollfxError::validation(
                "step range must be finite with start < end",
            ));
        }
        Ok(())
    }

    /// `clamp((p - start) / (end - start), 0, 0.999)`.
    pub fn step_progress(&self, p: f64) -> f64 {
        clamp((p - self.start) / (self.end - self.start), 0.0, STEP_CEILING)
    }

    /// `min(floor(step_progress * count), count - 1)`.
    pub fn index_at(&self, p: f64) -> usize {
        let last = self.count.saturating_sub(1);
        let raw = (self.step_progress(p) * self.count as f64).floor();
        (raw as usize).min(last)
    }
}

/// Active index transition reported by [`StepSelector::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StepChange {
    /// Previously recorded index (`None` on the first evaluation).
    pub previous: Option<usize>,
    /// New active index.
    pub current: usize,
}

/// Edge-triggered step selector: the active index is always derived from progress, and a
/// change is reported only when it differs from the recorded one.
#[derive(Clone, Debug)]
pub struct StepSelector {
    spec: StepSpec,
    active: Option<usize>,
}

impl StepSelector {
    /// Validated selector with no recorded index.
    pub fn new(spec: StepSpec) -> ScrollfxResult<Self> {
        spec.validate()?;
        Ok(Self { spec, active: None })
    }

    /// Quantization parameters.
    pub fn spec(&self) -> StepSpec {
        self.spec
    }

    /// Last recorded index.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Re-derive the index from progress.
    pub fn update(&mut self, p: f64) -> Option<StepChange> {
        let current = self.spec.index_at(p);
        if self.active == Some(current) {
            return None;
        }
        let change = StepChange {
            previous: self.active,
            current,
        };
        self.active = Some(current);
        tracing::trace!(previous = ?change.previous, current, "active step changed");
        Some(change)
    }

    /// Forget the recorded index (mount/unmount).
    pub fn reset(&mut self) {
        self.active = None;
    }
}

/// Highlight state of one item in a stepped list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ItemState {
    /// The active item.
    Active,
    /// Before the active item (progress dots render these as reached).
    Passed,
    /// After the active item.
    Upcoming,
}

impl ItemState {
    /// State of item `index` given the active index.
    pub fn of(index: usize, active: usize) -> Self {
        match index.cmp(&active) {
            std::cmp::Ordering::Less => Self::Passed,
            std::cmp::Ordering::Equal => Self::Active,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }

    /// Only the active item is shown.
    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    /// Progress dot fill: every item up to and including the active one.
    pub fn is_reached(self) -> bool {
        self != Self::Upcoming
    }
}

/// Items of a stepped list keyed by stable identity.
///
/// Highlight state is recomputed in one pass over "is this the active index" instead of
/// mutating individual entries.
#[derive(Clone, Debug, PartialEq)]
pub struct SteppedItems<K> {
    keys: Vec<K>,
}

impl<K> SteppedItems<K> {
    /// Items in display order.
    pub fn new(keys: Vec<K>) -> Self {
        Self { keys }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// `true` when empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key of the item at `index`.
    pub fn key(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    /// `(key, state)` for every item.
    pub fn states(&self, active: usize) -> impl Iterator<Item = (&K, ItemState)> + '_ {
        self.keys
            .iter()
            .enumerate()
            .map(move |(i, k)| (k, ItemState::of(i, active)))
    }
}

/// 1-based, zero-padded counter label (`0 -> "01"`).
pub fn step_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Horizontal track that follows the active item so its title sits at a fixed position.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackAlign {
    /// `offsetLeft` of each title inside the track, px.
    pub offsets: Vec<f64>,
}

impl TrackAlign {
    /// Track with known title offsets.
    pub fn new(offsets: Vec<f64>) -> Self {
        Self { offsets }
    }

    /// Translation that aligns title `active` to the track origin.
    pub fn shift_for(&self, active: usize) -> Option<f64> {
        self.offsets.get(active).map(|x| -x)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreo/step.rs"]
mod tests;
