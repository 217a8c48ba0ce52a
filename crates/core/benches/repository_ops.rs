use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use std::collections::HashMap;

use recordkit_core::{Entity, Quantified, RecordId, Repository};

#[derive(Debug, Clone)]
struct BenchRecord {
    id: RecordId,
    name: String,
    quantity: i64,
}

impl Entity for BenchRecord {
    type Id = RecordId;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Quantified for BenchRecord {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

fn record(raw: u32) -> BenchRecord {
    BenchRecord {
        id: RecordId::new(raw),
        name: format!("record-{raw}"),
        quantity: i64::from(raw % 100),
    }
}

fn seeded(n: u32) -> Repository<BenchRecord> {
    let mut repo = Repository::new();
    for i in 0..n {
        repo.add(record(i)).expect("fresh ids");
    }
    repo
}

/// Insert throughput vs. a plain `HashMap` (no order, no duplicate check).
fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_add");
    for &n in &[100u32, 1_000, 10_000] {
        group.throughput(Throughput::Elements(u64::from(n)));

        group.bench_with_input(BenchmarkId::new("repository", n), &n, |b, &n| {
            b.iter(|| {
                let mut repo = Repository::new();
                for i in 0..n {
                    repo.add(record(i)).expect("fresh ids");
                }
                black_box(repo.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("hashmap_baseline", n), &n, |b, &n| {
            b.iter(|| {
                let mut map = HashMap::new();
                for i in 0..n {
                    map.insert(RecordId::new(i), record(i));
                }
                black_box(map.len())
            });
        });
    }
    group.finish();
}

/// Point lookups over a seeded store, hit and miss paths.
fn bench_get(c: &mut Criterion) {
    let repo = seeded(10_000);

    let mut group = c.benchmark_group("repository_get");
    group.bench_function("hit", |b| {
        b.iter(|| {
            let hit = repo.get(RecordId::new(7_777)).expect("seeded id");
            black_box(hit.name.len())
        });
    });
    group.bench_function("miss", |b| {
        b.iter(|| black_box(repo.get(RecordId::new(77_777)).is_err()));
    });
    group.finish();
}

/// Read-modify-write of the quantity field.
fn bench_update_quantity(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_update_quantity");
    group.bench_function("existing", |b| {
        let mut repo = seeded(10_000);
        b.iter(|| {
            let current = repo.get(RecordId::new(5_000)).expect("seeded id").quantity();
            repo.update_quantity(RecordId::new(5_000), current + 1)
                .expect("valid quantity");
            black_box(current)
        });
    });
    group.finish();
}

/// Full ordered snapshot (the save-path workload).
fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_snapshot");
    for &n in &[100u32, 1_000, 10_000] {
        let repo = seeded(n);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::from_parameter(n), &repo, |b, repo| {
            b.iter(|| black_box(repo.all().len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_get, bench_update_quantity, bench_snapshot);
criterion_main!(benches);
