use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches_response,
    response::bench_binding1to1,
    response::bench_residuals,
    response::bench_tteq
);
criterion_main!(benches_response);
