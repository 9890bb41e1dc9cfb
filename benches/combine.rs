use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn synth_module(index: usize, procs: usize) -> String {
    let mut module = format!("Attribute VB_Name = \"Module{}\"\nOption Explicit\n", index);
    for p in 0..procs {
        module.push_str(&format!(
            "Public Sub Proc{}_{}()\n    Debug.Print {}\nEnd Sub\n",
            index, p, p
        ));
    }
    module
}

fn combine_benchmark(c: &mut Criterion) {
    let small: Vec<String> = (0..2).map(|i| synth_module(i, 5)).collect();
    let medium: Vec<String> = (0..20).map(|i| synth_module(i, 50)).collect();
    let large: Vec<String> = (0..100).map(|i| synth_module(i, 200)).collect();

    let mut group = c.benchmark_group("combine");

    let small_bytes: usize = small.iter().map(String::len).sum();
    group.throughput(Throughput::Bytes(small_bytes as u64));
    group.bench_function("small_2_modules", |b| {
        b.iter(|| vbam::combine(black_box(&small), "Merged"))
    });

    let medium_bytes: usize = medium.iter().map(String::len).sum();
    group.throughput(Throughput::Bytes(medium_bytes as u64));
    group.bench_function("medium_20_modules", |b| {
        b.iter(|| vbam::combine(black_box(&medium), "Merged"))
    });

    let large_bytes: usize = large.iter().map(String::len).sum();
    group.throughput(Throughput::Bytes(large_bytes as u64));
    group.bench_function("large_100_modules", |b| {
        b.iter(|| vbam::combine(black_box(&large), "Merged"))
    });

    group.finish();
}

criterion_group!(benches, combine_benchmark);
criterion_main!(benches);
