//! Size-class mapper: the two-way mapping between byte sizes and
//! `(fl, sl)` free-list indices.
//!
//! Two distinct directions are needed. Allocation rounds *up* to the
//! first class whose minimum size covers the request ([`map_ceil`]);
//! insertion rounds *down* to the class whose range contains a block's
//! size ([`map_floor`]).

use super::{FLLEN, GRANULARITY, GRANULARITY_LOG2, LINEAR_LIMIT, SLI, SLLEN};
use crate::bits::fls_size;

/// First-level translation. Every level whose sizes fit under
/// [`LINEAR_LIMIT`] collapses into `fl = 0`, so the raw `fls` levels
/// above it shift down by `fls(LINEAR_LIMIT) - 1`.
const FL_OFFSET: u32 = GRANULARITY_LOG2 + SLI - 1;

/// Finds the first class whose every member is at least `size` bytes.
///
/// `size` must be a non-zero multiple of [`GRANULARITY`]. Returns
/// `None` when the size is too large for the index.
#[inline]
pub(super) fn map_ceil(size: usize) -> Option<(usize, usize)> {
    debug_assert!(size >= GRANULARITY);
    debug_assert!(size % GRANULARITY == 0);

    if size <= LINEAR_LIMIT {
        // granule-rounded sizes hit a linear band exactly, so the
        // band's minimum equals the request
        return Some((0, size / GRANULARITY - 1));
    }

    let mut fl = fls_size(size);
    if fl > FLLEN as u32 + FL_OFFSET {
        return None;
    }
    let base = 1usize << fl;
    let seg = base >> SLI;

    // round up to the next sub-band boundary
    let mut sl = (size + (seg - 1) - base) / seg;
    if sl == 0 {
        // an exact power of two is the minimum of the previous level's
        // top band
        fl -= 1;
        sl = SLLEN - 1;
    } else {
        sl -= 1;
    }

    let fl = (fl - FL_OFFSET) as usize;
    if fl >= FLLEN {
        return None;
    }
    Some((fl, sl))
}

/// Finds the class whose range contains `size`, i.e. the one with the
/// largest minimum not exceeding it.
///
/// `size` must be a non-zero multiple of [`GRANULARITY`]. Returns
/// `None` when the size is too large for the index.
#[inline]
pub(super) fn map_floor(size: usize) -> Option<(usize, usize)> {
    debug_assert!(size >= GRANULARITY);
    debug_assert!(size % GRANULARITY == 0);

    if size <= LINEAR_LIMIT {
        return Some((0, size / GRANULARITY - 1));
    }

    let mut fl = fls_size(size);
    let base = 1usize << fl;
    let mut sl = (size - base) / (base >> SLI);
    if sl == 0 {
        // sizes within one sub-band of the power itself belong to the
        // previous level's top band, whose minimum is that power
        fl -= 1;
        sl = SLLEN - 1;
    } else {
        sl -= 1;
    }

    let fl = (fl - FL_OFFSET) as usize;
    if fl >= FLLEN {
        return None;
    }
    Some((fl, sl))
}

/// The minimum byte size served by class `(fl, sl)`.
#[inline]
pub(super) fn list_min_size(fl: usize, sl: usize) -> usize {
    debug_assert!(fl < FLLEN && sl < SLLEN);
    if fl == 0 {
        (sl + 1) * GRANULARITY
    } else {
        let base = 1usize << (fl as u32 + FL_OFFSET);
        base + (base >> SLI) * (sl + 1)
    }
}

/// [`map_ceil`] followed by the reverse mapping: the allocation quantum
/// a request of `size` bytes is actually served with.
#[inline]
pub(super) fn map_ceil_and_unmap(size: usize) -> Option<usize> {
    let (fl, sl) = map_ceil(size)?;
    Some(list_min_size(fl, sl))
}
