// Compares various ways of calling a function, with non virtual baselines.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use funcall::models::harness::GROUP_NAME;
use funcall::prelude::*;
use strum::IntoEnumIterator;

#[cfg(not(tarpaulin_include))]
fn func_call(c: &mut Criterion) {
    let mut group = c.benchmark_group(GROUP_NAME);
    group.throughput(Throughput::Elements(1));

    // TODO: find out why Pointer is not faster than Virtual.
    for variant in Variant::iter() {
        // Each variant does its own setup and timing.
        group.bench_function(variant.as_ref(), |b| b.iter_custom(|iters| variant.run(iters)));
    }
    group.finish();
}

criterion_group!(benches, func_call);
criterion_main!(benches);
