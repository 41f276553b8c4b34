//! A thin generic facade over a concrete pool-based allocator.

use core::mem::MaybeUninit;
use core::ptr::NonNull;

use crate::tlsf::{HeapStats, Tlsf};

/// The contract a concrete pool-based allocator offers to
/// [`MemoryAllocator`].
pub trait PoolAllocator<'pool> {
    /// Attaches a memory region; returns whether it was accepted.
    fn add_pool(&mut self, region: &'pool mut [MaybeUninit<u8>]) -> bool;

    /// Attempts to allocate `size` bytes.
    fn allocate(&mut self, size: usize) -> Option<NonNull<u8>>;

    /// Releases an allocation.
    ///
    /// # Safety
    ///
    /// `ptr` must be a live allocation made by this allocator.
    unsafe fn deallocate(&mut self, ptr: NonNull<u8>);

    /// Resizes an allocation. Payload bytes are never copied; when the
    /// returned pointer differs from `ptr`, migrating the contents is
    /// the caller's responsibility.
    ///
    /// # Safety
    ///
    /// `ptr` must be a live allocation made by this allocator.
    unsafe fn reallocate(&mut self, ptr: NonNull<u8>, new_size: usize) -> Option<NonNull<u8>>;

    /// Whether `ptr` lies within memory owned by this allocator.
    fn contains(&self, ptr: NonNull<u8>) -> bool;

    /// Heap-walk totals.
    fn stats(&self) -> HeapStats;

    /// Logs a human-readable heap summary.
    fn dump(&self) {
        log::info!("{}", self.stats());
    }
}

impl<'pool> PoolAllocator<'pool> for Tlsf<'pool> {
    #[inline]
    fn add_pool(&mut self, region: &'pool mut [MaybeUninit<u8>]) -> bool {
        Tlsf::add_pool(self, region)
    }

    #[inline]
    fn allocate(&mut self, size: usize) -> Option<NonNull<u8>> {
        Tlsf::allocate(self, size)
    }

    #[inline]
    unsafe fn deallocate(&mut self, ptr: NonNull<u8>) {
        Tlsf::deallocate(self, ptr)
    }

    #[inline]
    unsafe fn reallocate(&mut self, ptr: NonNull<u8>, new_size: usize) -> Option<NonNull<u8>> {
        Tlsf::reallocate(self, ptr, new_size)
    }

    #[inline]
    fn contains(&self, ptr: NonNull<u8>) -> bool {
        Tlsf::contains(self, ptr)
    }

    #[inline]
    fn stats(&self) -> HeapStats {
        Tlsf::stats(self)
    }
}

/// Forwards every operation verbatim to the wrapped allocator.
///
/// Exists so code can be written against one concrete field while the
/// allocator implementation behind it stays swappable.
#[derive(Debug, Default)]
pub struct MemoryAllocator<A> {
    inner: A,
}

impl<A> MemoryAllocator<A> {
    /// Wraps `inner`.
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    /// Unwraps the concrete allocator.
    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<'pool, A: PoolAllocator<'pool>> MemoryAllocator<A> {
    /// See [`PoolAllocator::add_pool`].
    pub fn add_pool(&mut self, region: &'pool mut [MaybeUninit<u8>]) -> bool {
        self.inner.add_pool(region)
    }

    /// See [`PoolAllocator::allocate`].
    pub fn allocate(&mut self, size: usize) -> Option<NonNull<u8>> {
        self.inner.allocate(size)
    }

    /// See [`PoolAllocator::deallocate`].
    ///
    /// # Safety
    ///
    /// `ptr` must be a live allocation made through `self`.
    pub unsafe fn deallocate(&mut self, ptr: NonNull<u8>) {
        self.inner.deallocate(ptr)
    }

    /// See [`PoolAllocator::reallocate`].
    ///
    /// # Safety
    ///
    /// `ptr` must be a live allocation made through `self`.
    pub unsafe fn reallocate(&mut self, ptr: NonNull<u8>, new_size: usize) -> Option<NonNull<u8>> {
        self.inner.reallocate(ptr, new_size)
    }

    /// See [`PoolAllocator::contains`].
    pub fn contains(&self, ptr: NonNull<u8>) -> bool {
        self.inner.contains(ptr)
    }

    /// See [`PoolAllocator::stats`].
    pub fn stats(&self) -> HeapStats {
        self.inner.stats()
    }

    /// See [`PoolAllocator::dump`].
    pub fn dump(&self) {
        self.inner.dump()
    }
}
