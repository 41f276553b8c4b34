use core::mem::MaybeUninit;
use core::ptr::NonNull;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use segfit::Tlsf;

const ARENA_LEN: usize = 1 << 20;
const MAX_LIVE: usize = 256;

struct Xorshift32(u32);

impl Xorshift32 {
    fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tlsf");

    for &(min_size, mask) in &[(16usize, 63usize), (16, 255), (96, 127), (96, 511), (96, 927)] {
        let size_range = min_size..min_size + mask + 1;

        let arena: &'static mut [MaybeUninit<u8>] =
            Box::leak(vec![MaybeUninit::uninit(); ARENA_LEN].into_boxed_slice());
        let mut tlsf = Tlsf::new();
        assert!(tlsf.add_pool(arena));

        let mut rng = Xorshift32(0x1234_5689);
        let mut next_size = || (min_size + (rng.next() as usize % (mask + 1)) + 15) & !15;

        // keep a fixed-size working set live so every iteration both
        // frees and allocates
        let num_live = (ARENA_LEN / size_range.end / 2).min(MAX_LIVE);
        let mut live: Vec<NonNull<u8>> = (0..num_live)
            .map(|_| tlsf.allocate(next_size()).unwrap())
            .collect();

        group.bench_function(
            BenchmarkId::from_parameter(format!("size {:?}", size_range)),
            |b| {
                let mut i = 0;
                b.iter(|| {
                    unsafe { tlsf.deallocate(live[i % num_live]) };
                    live[i % num_live] = tlsf.allocate(next_size()).unwrap();
                    i = i.wrapping_add(1);
                });
            },
        );

        for ptr in live {
            unsafe { tlsf.deallocate(ptr) };
        }
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
