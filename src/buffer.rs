//! Owned limb storage with an explicit growth and shrink policy.
//!
//! Every slot of the buffer is initialized, so the buffer length *is* the
//! capacity. Limbs above the most-significant nonzero limb are always zero,
//! which lets a carry ripple straight into the spare limbs without touching
//! the allocator.

use crate::lib::Vec;
use crate::limb::Limb;
use crate::magnitude;

/// Storage for the magnitude of a [`BigSigned`](crate::BigSigned).
#[derive(Clone)]
pub(crate) struct LimbBuffer {
    /// Little-endian limbs. `data.len()` is the capacity.
    data: Vec<Limb>,
}

impl LimbBuffer {
    /// Capacity floor. The buffer is never allocated or shrunk below this.
    pub const MIN_CAPACITY: usize = 16;

    /// Spare limbs added on top of every explicitly sized growth.
    pub const HEADROOM: usize = 2;

    /// Default growth adds `capacity >> GROWTH_SHIFT` limbs.
    pub const GROWTH_SHIFT: u32 = 2;

    /// Shrinking must free at least this many limbs.
    pub const SHRINK_THRESHOLD: usize = 8192;

    /// Create a zeroed buffer of the minimum capacity.
    pub fn new() -> Self {
        Self::zeroed(Self::MIN_CAPACITY)
    }

    /// Create a buffer holding a copy of `limbs`, with headroom on top.
    pub fn from_limbs(limbs: &[Limb]) -> Self {
        let capacity = (limbs.len() + Self::HEADROOM).max(Self::MIN_CAPACITY);
        let mut buffer = Self::zeroed(capacity);
        buffer.data[..limbs.len()].copy_from_slice(limbs);
        buffer
    }

    fn zeroed(capacity: usize) -> Self {
        let mut data = Vec::new();
        data.reserve_exact(capacity);
        data.resize(capacity, 0);
        LimbBuffer { data }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Limb] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Limb] {
        &mut self.data
    }

    /// Index of the most-significant nonzero limb, or `None` for zero.
    #[inline]
    pub fn most_significant_nonzero(&self) -> Option<usize> {
        magnitude::most_significant_nonzero(&self.data)
    }

    /// Number of limbs up to and including the most-significant nonzero one.
    #[inline]
    pub fn logical_len(&self) -> usize {
        self.most_significant_nonzero().map_or(0, |index| index + 1)
    }

    /// Number of zero limbs above the logical length.
    #[inline]
    pub fn spare(&self) -> usize {
        self.capacity() - self.logical_len()
    }

    /// Grow so that `required` limbs fit with [`HEADROOM`](Self::HEADROOM)
    /// spare limbs on top.
    ///
    /// A request that the current capacity already covers falls back to the
    /// default growth policy instead; this never shrinks the buffer.
    pub fn grow_to_fit(&mut self, required: usize) {
        let len = if required < self.capacity() {
            // Biased down so the headroom below lands on the default size.
            self.default_growth() - Self::HEADROOM
        } else {
            required
        };
        self.reallocate(len + Self::HEADROOM, "grow_to_fit");
    }

    /// Grow by a quarter of the current capacity.
    pub fn grow(&mut self) {
        let len = self.default_growth();
        self.reallocate(len, "grow");
    }

    /// Make sure at least `spare` zero limbs sit above the logical length.
    pub fn reserve_spare(&mut self, spare: usize) {
        if self.spare() >= spare {
            return;
        }
        let required = self.logical_len() + spare;
        if self.default_growth() >= required {
            self.grow();
        } else {
            self.grow_to_fit(required);
        }
    }

    /// Release trailing zero limbs when doing so frees a worthwhile amount.
    ///
    /// Shrinks only when the freed space is at least a quarter of the capacity
    /// and at least [`SHRINK_THRESHOLD`](Self::SHRINK_THRESHOLD) limbs; never
    /// shrinks below [`MIN_CAPACITY`](Self::MIN_CAPACITY). Returns true if the
    /// buffer was reallocated.
    pub fn shrink(&mut self) -> bool {
        let len = self.logical_len();
        let freed = self.capacity() - len;
        if freed < self.capacity() >> Self::GROWTH_SHIFT || freed < Self::SHRINK_THRESHOLD {
            return false;
        }
        let len = len.max(Self::MIN_CAPACITY);
        log::trace!("shrinking limb buffer from {} to {} limbs", self.capacity(), len);
        self.data.truncate(len);
        self.data.shrink_to_fit();
        true
    }

    /// Discard the contents and start over from a zeroed minimum-size buffer.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Zero every limb, keeping the allocation.
    pub fn clear(&mut self) {
        for limb in self.data.iter_mut() {
            *limb = 0;
        }
    }

    #[inline]
    fn default_growth(&self) -> usize {
        self.capacity() + (self.capacity() >> Self::GROWTH_SHIFT)
    }

    fn reallocate(&mut self, capacity: usize, reason: &'static str) {
        debug_assert!(capacity > self.capacity());
        log::trace!(
            "growing limb buffer from {} to {} limbs ({})",
            self.capacity(),
            capacity,
            reason
        );
        self.data.reserve_exact(capacity - self.capacity());
        self.data.resize(capacity, 0);
    }
}
