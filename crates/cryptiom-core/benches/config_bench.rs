//! Criterion benchmarks for the config encoder and `parse_config`.
//!
//! The client parses its config once per start, so these exist to catch
//! accidental regressions in the decode path (e.g. a schema change that
//! makes serde fall back to a slower representation), not to hit a budget.
//!
//! Run with:
//! ```bash
//! cargo bench --package cryptiom-core --bench config_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cryptiom_core::{encode_config, parse_config, Config, WindowConfig};

// ── Config fixtures ───────────────────────────────────────────────────────────

fn make_default() -> Config {
    Config::default()
}

fn make_custom() -> Config {
    Config {
        window: WindowConfig {
            width: 2560,
            height: 1440,
            vsync: false,
            anti_aliasing: false,
        },
    }
}

fn fixtures() -> [(&'static str, Config); 2] {
    [("default", make_default()), ("custom", make_custom())]
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_config");
    for (name, cfg) in fixtures() {
        group.bench_with_input(BenchmarkId::new("config", name), &cfg, |b, cfg| {
            b.iter(|| encode_config(black_box(cfg)).expect("encode must succeed"))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_config");
    for (name, cfg) in fixtures() {
        let text = encode_config(&cfg).expect("encode must succeed for benchmark setup");
        group.bench_with_input(BenchmarkId::new("config", name), &text, |b, text| {
            b.iter(|| parse_config(black_box(text)).unwrap())
        });
    }

    // Malformed input exercises the error-formatting path.
    group.bench_function("malformed", |b| {
        b.iter(|| parse_config(black_box("{not valid}")).is_err())
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_parse);
criterion_main!(benches);
