use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use exalloc::FreeListAllocator;
use std::hint::black_box;

const OPS: u64 = 100_000;

/// exalloc alloc/free throughput.
fn exalloc_alloc_free(
  allocator: &mut FreeListAllocator,
  size: usize,
) {
  for _ in 0..OPS {
    unsafe {
      let ptr = allocator.alloc(size);
      black_box(ptr);
      allocator.free(ptr);
    }
  }
}

/// libc alloc/free throughput.
fn libc_malloc_free(size: usize) {
  for _ in 0..OPS {
    unsafe {
      let ptr = libc::malloc(size);
      black_box(ptr);
      libc::free(ptr);
    }
  }
}

fn benchmark_alloc_throughput(c: &mut Criterion) {
  let mut group = c.benchmark_group("alloc_throughput");

  for size in [16, 64, 256, 1024, 4096] {
    group.throughput(Throughput::Elements(OPS));

    group.bench_with_input(BenchmarkId::new("exalloc", size), &size, |b, &size| {
      let mut allocator = FreeListAllocator::new().expect("could not reserve the heap region");
      b.iter(|| exalloc_alloc_free(&mut allocator, size))
    });

    group.bench_with_input(BenchmarkId::new("libc", size), &size, |b, &size| {
      b.iter(|| libc_malloc_free(size))
    });
  }

  group.finish();
}

criterion_group!(benches, benchmark_alloc_throughput);
criterion_main!(benches);
