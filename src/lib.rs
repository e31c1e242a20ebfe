//! # exalloc - An Explicit Free-List Memory Allocator
//!
//! This crate implements a general-purpose **explicit free-list allocator**
//! over a single contiguous, grow-only heap region.
//!
//! ## Overview
//!
//! ```text
//!   Explicit Free-List Concept:
//!
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                          HEAP REGION                                 │
//!   │                                                                      │
//!   │   ┌────┬────────┬────────┬────────┬────────┬────────┐               │
//!   │   │head│   A1   │  free  │   A2   │  free  │   A3   │  → break      │
//!   │   └─┬──┴────────┴───▲──┬─┴────────┴───▲────┴────────┘               │
//!   │     │               │  │              │                             │
//!   │     └───────────────┘  └──────────────┘                             │
//!   │        free blocks chained in address order                         │
//!   │                                                                      │
//!   └──────────────────────────────────────────────────────────────────────┘
//!
//!   Allocation searches the chain (best fit), splits oversized blocks,
//!   and extends the heap only when nothing fits. Freeing re-links the
//!   block in address order and merges it with touching neighbors, so
//!   adjacent free space always appears as one block.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   exalloc
//!   ├── align     - Alignment macros (align!, align_to!)
//!   ├── block     - Block layout and header encoding (internal)
//!   ├── list      - Address-ordered doubly-linked free list (internal)
//!   ├── heap      - Grow-only heap region over a private reservation
//!   └── freelist  - FreeListAllocator implementation
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use exalloc::FreeListAllocator;
//!
//! let mut allocator = FreeListAllocator::new().expect("reservation failed");
//!
//! unsafe {
//!     // Allocate memory for a u64
//!     let ptr = allocator.alloc(core::mem::size_of::<u64>()) as *mut u64;
//!
//!     // Use the memory
//!     *ptr = 42;
//!     assert_eq!(*ptr, 42);
//!
//!     // Grow it in place or move it, contents preserved
//!     let ptr = allocator.realloc(ptr as *mut u8, 64);
//!
//!     // Free the memory
//!     allocator.free(ptr);
//! }
//! assert!(allocator.check());
//! ```
//!
//! ## Properties
//!
//! - **Best-fit placement** (first-fit selectable): the tightest free
//!   block wins, keeping fragmentation low
//! - **High-end splitting**: the remainder of a split keeps its header
//!   address, so the free list needs no surgery on the common path
//! - **Bidirectional coalescing**: no two free blocks are ever adjacent
//! - **In-place realloc**: grows into a free right neighbor or fresh heap
//!   space before ever copying
//! - **Word-aligned payloads**: every returned pointer is a multiple of 8
//! - **Self-checking**: [`FreeListAllocator::check`] verifies the whole
//!   heap structure on demand
//!
//! ## Limitations
//!
//! - **Single-threaded only**: no synchronization primitives
//! - **Grow-only**: memory is returned to free blocks, never to the OS
//! - **Word alignment only**: requests for stricter alignment are not
//!   supported
//! - **Unix-only**: the heap region is reserved with `libc::mmap`
//!
//! ## Safety
//!
//! The allocation methods are inherently unsafe as they deal with raw
//! memory. The caller must uphold the usual malloc contracts: free only
//! what was allocated here, free it once, and never touch it afterwards.

pub mod align;
mod block;
mod freelist;
mod heap;
mod list;

pub use freelist::{FreeListAllocator, Placement};
pub use heap::{Heap, EXTEND_FAILED};
