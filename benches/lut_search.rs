use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lut_search::{LutIndex, SortKey};

const INPUT_SIZES: &[(&str, usize)] = &[
    ("l1_4k", 4 * 1024),
    ("l2_64k", 64 * 1024),
    ("l3_1m", 1024 * 1024),
];

const LUT_BITS: &[u32] = &[8, 16, 24];

#[inline]
fn next_u64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

fn make_u32_values(len: usize, seed: u64) -> Vec<u32> {
    let mut state = seed;
    let mut out: Vec<u32> = (0..len).map(|_| (next_u64(&mut state) >> 32) as u32).collect();
    out.sort_unstable();
    out
}

fn make_i32_values(len: usize, seed: u64) -> Vec<i32> {
    let mut state = seed;
    let mut out: Vec<i32> = (0..len).map(|_| (next_u64(&mut state) >> 32) as i32).collect();
    out.sort_unstable();
    out
}

/// Uniform in `[-999, 999)`.
fn make_f32_values(len: usize, seed: u64) -> Vec<f32> {
    let mut state = seed;
    let mut out: Vec<f32> = (0..len)
        .map(|_| {
            let unit = (next_u64(&mut state) >> 40) as f32 / (1u64 << 24) as f32;
            unit * 1998.0 - 999.0
        })
        .collect();
    out.sort_by(f32::total_cmp);
    out
}

fn make_queries_hit<T: Copy>(values: &[T], seed: u64) -> Vec<T> {
    let mut state = seed;
    let mut out = Vec::with_capacity(values.len());
    for _ in 0..values.len() {
        let idx = (next_u64(&mut state) as usize) % values.len();
        out.push(values[idx]);
    }
    out
}

fn make_queries_miss<T: Copy>(values: &[T], seed: u64, bump: fn(T) -> T) -> Vec<T> {
    let mut state = seed;
    let mut out = Vec::with_capacity(values.len());
    for _ in 0..values.len() {
        let idx = (next_u64(&mut state) as usize) % values.len();
        out.push(bump(values[idx]));
    }
    out
}

fn next_f32(value: f32) -> f32 {
    f32::from_bits(value.to_bits().wrapping_add(1))
}

fn run_queries<T, F>(queries: &[T], func: F) -> usize
where
    T: Copy,
    F: Fn(T) -> Option<usize>,
{
    let mut acc = 0usize;
    for &q in queries {
        if let Some(idx) = func(black_box(q)) {
            acc ^= idx;
        }
    }
    acc
}

fn bench_domain<T: SortKey>(
    c: &mut Criterion,
    name: &str,
    make_values: fn(usize, u64) -> Vec<T>,
    bump: fn(T) -> T,
) {
    let mut group = c.benchmark_group(name);
    for &(label, len) in INPUT_SIZES {
        let values = make_values(len, 0x1234_5678_9ABC_DEF0u64 ^ len as u64);
        let queries_hit = make_queries_hit(&values, 0xC0FF_EE42_1234_5678u64 ^ len as u64);
        let queries_miss = make_queries_miss(&values, 0xBADC_0FFE_EE11_D00Du64 ^ len as u64, bump);
        group.throughput(Throughput::Elements(queries_hit.len() as u64));

        let Ok(index) = LutIndex::new(&values, LUT_BITS[0]) else {
            continue;
        };
        for (kind, queries) in [("hit", &queries_hit), ("miss", &queries_miss)] {
            let id = BenchmarkId::new(format!("baseline_{kind}"), label);
            group.bench_function(id, |bench| {
                bench.iter(|| black_box(run_queries(queries, |q| index.baseline_search(q))));
            });
            let id = BenchmarkId::new(format!("plain_{kind}"), label);
            group.bench_function(id, |bench| {
                bench.iter(|| black_box(run_queries(queries, |q| index.plain_search(q))));
            });
        }

        for &bits in LUT_BITS {
            let Ok(index) = LutIndex::new(&values, bits) else {
                continue;
            };
            for (kind, queries) in [("hit", &queries_hit), ("miss", &queries_miss)] {
                let id = BenchmarkId::new(format!("lut_{bits}_{kind}"), label);
                group.bench_function(id, |bench| {
                    bench.iter(|| black_box(run_queries(queries, |q| index.lut_search(q))));
                });
            }
        }
    }
    group.finish();
}

fn bench_lut_search(c: &mut Criterion) {
    bench_domain(c, "lut_search_u32", make_u32_values, |v: u32| v.wrapping_add(1));
    bench_domain(c, "lut_search_i32", make_i32_values, |v: i32| v.wrapping_add(1));
    bench_domain(c, "lut_search_f32", make_f32_values, next_f32);
}

fn bench_lut_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut_build_u32");
    for &(label, len) in INPUT_SIZES {
        let values = make_u32_values(len, 0xBADC_0FFE_EE11_D00Du64 ^ len as u64);
        group.throughput(Throughput::Elements(len as u64));
        for &bits in &LUT_BITS[..2] {
            let id = BenchmarkId::new(format!("bits_{bits}"), label);
            group.bench_function(id, |bench| {
                bench.iter(|| black_box(LutIndex::new(black_box(&values), bits).is_ok()));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_lut_search, bench_lut_build);
criterion_main!(benches);
