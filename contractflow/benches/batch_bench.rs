//! Benchmarks for batch validation.

use contractflow::prelude::*;
use contractflow::testing::PassingContract;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn batch_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    let contracts: Vec<Arc<dyn Contract>> = (0..32)
        .map(|i| Arc::new(PassingContract::new(format!("contract-{i}"))) as Arc<dyn Contract>)
        .collect();

    c.bench_function("validate_32_passing", |b| {
        b.iter(|| {
            let batch = rt.block_on(validate_contracts(&contracts));
            black_box(batch.len())
        });
    });
}

criterion_group!(benches, batch_benchmark);
criterion_main!(benches);
