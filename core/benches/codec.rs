use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzw_core::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn sample(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    (0..len).map(|_| b'a' + rng.gen_range(0..16u8)).collect()
}

fn bench_codec(c: &mut Criterion) {
    let data = sample(1 << 20);
    let mut group = c.benchmark_group("lzw");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for mode in [CodebookMode::None, CodebookMode::Reset] {
        let config = LzwConfig::with_mode(mode);
        let compressed = compress_bytes(&data, &config).expect("compress sample");

        group.bench_with_input(BenchmarkId::new("compress", mode), &data, |b, data| {
            b.iter(|| compress_bytes(black_box(data), &config).expect("compress"))
        });
        group.bench_with_input(BenchmarkId::new("expand", mode), &compressed, |b, compressed| {
            b.iter(|| expand_bytes(black_box(compressed), &config).expect("expand"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
