//! Stream throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::TempDir;
use zfio::{ZfConfig, ZfStream};
use zfio_bench::{random_data, text_data, BACKEND_FILES};

const SIZE: usize = 1 << 20;

/// Benchmark bulk writes per backend.
fn bench_bulk_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_write");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(SIZE as u64));

    let data = text_data(SIZE);
    for name in BACKEND_FILES {
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join(name);
            let path = path.to_str().unwrap();

            b.iter(|| {
                let mut out = ZfStream::open(path, "w").unwrap();
                black_box(out.write(black_box(data)));
                out.close().unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark byte-at-a-time writes per backend.
fn bench_put_byte(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_byte");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(SIZE as u64));

    let data = text_data(SIZE);
    for name in BACKEND_FILES {
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join(name);
            let path = path.to_str().unwrap();

            b.iter(|| {
                let mut out = ZfStream::open(path, "w").unwrap();
                for &byte in data.iter() {
                    out.put_byte(black_box(byte));
                }
                out.close().unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark bulk reads versus byte-at-a-time reads per backend.
fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(SIZE as u64));

    let temp_dir = TempDir::new().unwrap();
    let data = text_data(SIZE);
    for name in BACKEND_FILES {
        let path = temp_dir.path().join(name);
        let path = path.to_str().unwrap().to_string();
        let mut out = ZfStream::open(&path, "w").unwrap();
        out.write(&data);
        out.close().unwrap();

        group.bench_with_input(BenchmarkId::new("bulk", name), &path, |b, path| {
            let mut buf = vec![0u8; SIZE];
            b.iter(|| {
                let mut input = ZfStream::open(path, "r").unwrap();
                black_box(input.read(&mut buf));
            });
        });

        group.bench_with_input(BenchmarkId::new("get_byte", name), &path, |b, path| {
            b.iter(|| {
                let mut input = ZfStream::open(path, "r").unwrap();
                let mut count = 0usize;
                while let Some(byte) = input.get_byte() {
                    count += byte as usize;
                }
                black_box(count);
            });
        });
    }

    group.finish();
}

/// Benchmark how buffer capacity affects byte-wise reads of random data.
fn bench_buffer_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_capacity");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(SIZE as u64));

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("random.gz");
    let path = path.to_str().unwrap().to_string();
    let mut out = ZfStream::open(&path, "w1").unwrap();
    out.write(&random_data(SIZE));
    out.close().unwrap();

    for capacity in [4 * 1024, 64 * 1024, 512 * 1024].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), capacity, |b, &capacity| {
            let config = ZfConfig::new().buffer_capacity(capacity);
            b.iter(|| {
                let mut input = ZfStream::open_with_config(&path, "r", &config).unwrap();
                let mut count = 0usize;
                while input.get_byte().is_some() {
                    count += 1;
                }
                black_box(count);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bulk_write,
    bench_put_byte,
    bench_read,
    bench_buffer_capacity
);
criterion_main!(benches);
