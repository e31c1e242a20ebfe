use exalloc::FreeListAllocator;

/// Prints the heap bounds and the free list, and confirms the structure
/// still verifies.
fn show_state(
  label: &str,
  allocator: &FreeListAllocator,
) {
  println!(
    "\n[{}] heap = {:?}..{:?} ({} bytes in use)",
    label,
    allocator.heap().low(),
    allocator.heap().high(),
    allocator.heap().size(),
  );
  allocator.dump_free_list();
  println!("[{}] check() = {}", label, allocator.check());
}

fn main() {
  let mut allocator = FreeListAllocator::new().expect("could not reserve the heap region");

  unsafe {
    // --------------------------------------------------------------------
    // 1) Three allocations. The first call also installs the head cell,
    //    so the heap jumps from empty to head cell + block.
    // --------------------------------------------------------------------
    let a = allocator.alloc(64);
    let b = allocator.alloc(32);
    let c = allocator.alloc(64);
    println!("[1] a = {:?}, b = {:?}, c = {:?}", a, b, c);
    show_state("after three allocs", &allocator);

    // Write something into each block to show they are usable.
    a.write_bytes(0xAA, 64);
    b.write_bytes(0xBB, 32);
    c.write_bytes(0xCC, 64);

    // --------------------------------------------------------------------
    // 2) Free the outer two. They are separated by b, so the free list
    //    holds two nodes in address order.
    // --------------------------------------------------------------------
    allocator.free(a);
    allocator.free(c);
    show_state("after freeing a and c", &allocator);

    // --------------------------------------------------------------------
    // 3) Free b. Both neighbors are free, so all three blocks collapse
    //    into a single span.
    // --------------------------------------------------------------------
    allocator.free(b);
    show_state("after freeing b (coalesced)", &allocator);

    // --------------------------------------------------------------------
    // 4) A small allocation reuses part of that span; the remainder
    //    stays on the free list at the same header address.
    // --------------------------------------------------------------------
    let d = allocator.alloc(24);
    println!("\n[4] d = {:?} (carved from the free span)", d);
    show_state("after small alloc", &allocator);

    // --------------------------------------------------------------------
    // 5) Grow d in place. Its right neighbor is the free remainder, so
    //    no copy happens and the address stays put.
    // --------------------------------------------------------------------
    let grown = allocator.realloc(d, 96);
    println!(
      "\n[5] realloc(d, 96) = {:?} ({})",
      grown,
      if grown == d { "grew in place" } else { "moved" },
    );
    show_state("after realloc", &allocator);

    // --------------------------------------------------------------------
    // 6) Clean up. One free block spanning the whole region remains.
    // --------------------------------------------------------------------
    allocator.free(grown);
    show_state("after final free", &allocator);
  }
}
