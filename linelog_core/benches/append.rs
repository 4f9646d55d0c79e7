use criterion::{Criterion, criterion_group, criterion_main};
use linelog_core::{FileLogger, Logger};
use tempfile::tempdir;

fn bench_append(c: &mut Criterion) {
    let dir = tempdir().expect("tempdir");
    let logger = FileLogger::with_destination(dir.path().join("bench.log")).expect("logger");

    c.bench_function("append_info_line", |b| {
        b.iter(|| logger.info("steady benchmark payload, forty-two bytes").expect("append"));
    });
}

criterion_group!(benches, bench_append);
criterion_main!(benches);
