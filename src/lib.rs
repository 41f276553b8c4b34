//! This crate implements the TLSF (Two-Level Segregated Fit) dynamic
//! memory allocation algorithm¹ over application-provided memory pools.
//!
//!  - **Allocation, deallocation and reallocation complete in constant
//!    time.** The two-level bitmap index resolves a size class with two
//!    bit scans; splitting and coalescing touch a bounded number of
//!    neighbors. TLSF is suitable for real-time applications.
//!
//!  - **Memory pools are provided by the application.** A pool is any
//!    contiguous byte region, such as a `static` buffer, an arena
//!    carved out of another allocator, or a mapped page range. One
//!    allocator instance serves any number of pools, attached at any
//!    time.
//!
//!  - **Low overhead.** Every block costs a 16-byte header; the
//!    free-list links live inside the payload area of free blocks, so
//!    they cost nothing while a block is allocated.
//!
//!  - **This crate supports `#![no_std]`.** It can be used in
//!    bare-metal and RTOS-based applications.
//!
//! <sub>¹ M. Masmano, I. Ripoll, A. Crespo and J. Real, "TLSF: a new
//! dynamic memory allocator for real-time systems," *Proceedings. 16th
//! Euromicro Conference on Real-Time Systems*, 2004. ECRTS 2004.,
//! Catania, Italy, 2004, pp. 79-88, doi: 10.1109/EMRTS.2004.1311009.
//! </sub>
//!
//! # Examples
//!
//! ```rust
//! use core::mem::MaybeUninit;
//! use segfit::Tlsf;
//!
//! let mut arena = [MaybeUninit::<u8>::uninit(); 65536];
//!
//! let mut tlsf = Tlsf::new();
//! assert!(tlsf.add_pool(&mut arena));
//!
//! let ptr1 = tlsf.allocate(48).unwrap();
//! let ptr2 = tlsf.allocate(200).unwrap();
//! assert!(tlsf.contains(ptr1));
//! unsafe {
//!     ptr1.as_ptr().write_bytes(0xa5, 48);
//!     tlsf.deallocate(ptr1);
//!     tlsf.deallocate(ptr2);
//! }
//! ```
//!
//! # Details
//!
//! ## Sizes and alignment
//!
//! Requests are rounded up to the 16-byte granule ([`GRANULARITY`]) and
//! returned pointers are aligned to it; that granule is the only
//! alignment class served. A zero-sized request is valid and yields at
//! least one granule.
//!
//! ## `reallocate` does not copy
//!
//! Resizing either grows a block in place or moves it by releasing and
//! re-allocating, and in the latter case the payload bytes are **not**
//! carried over; the caller owns any copy. This keeps the core free of
//! `memcpy` policy, and a higher layer that wants C `realloc` semantics
//! can add the copy itself.
//!
//! ## Ownership
//!
//! The allocator borrows its pools for `'pool` and never returns memory
//! to the underlying provider; dropping the allocator simply forgets
//! the pools.
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod allocator;
mod bits;
mod pool;
mod tlsf;

pub use crate::{
    allocator::{MemoryAllocator, PoolAllocator},
    pool::Pool,
    tlsf::{HeapStats, Tlsf, GRANULARITY, HEADER_SIZE},
};
