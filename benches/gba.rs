use boytacean::test::{build_test, TestOptions};
use criterion::{criterion_group, criterion_main, Criterion};

fn benchmark_gba_clock(c: &mut Criterion) {
    let mut gb = build_test(TestOptions::default());
    gb.load_rom_empty().unwrap();

    c.bench_function("gba_cycles", |b| {
        b.iter(|| {
            gb.clocks_cycles(1_000_000);
        })
    });
}

criterion_group!(benches, benchmark_gba_clock);
criterion_main!(benches);
