use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use custrec::{
    core::{
        registry::{CustomerRegistry, RegistryConfig},
        store::RecordStore,
    },
    customer::{CustomerDraft, CustomerRecord, NamePatch},
    types::Code,
};

fn record(code: Code) -> CustomerRecord {
    CustomerDraft::regular(format!("F{code}"), "L", 0).into_record(code)
}

fn filled_store(n: usize) -> RecordStore<CustomerRecord> {
    let mut store = RecordStore::with_capacity(n);
    for i in 0..n as Code {
        store.add(record(1001 + i)).expect("add");
    }
    store
}

fn bench_add_then_drain_front(c: &mut Criterion) {
    c.bench_function("store_add_delete_front_50", |b| {
        b.iter(|| {
            let mut store = filled_store(50);
            for i in 0..50 {
                store.delete(1001 + i).expect("delete");
            }
        });
    });
}

fn bench_registry_churn(c: &mut Criterion) {
    c.bench_function("registry_add_rename_delete", |b| {
        b.iter(|| {
            let mut registry = CustomerRegistry::with_config(RegistryConfig::default());
            for _ in 0..50 {
                let code = registry
                    .add_customer(CustomerDraft::renter("A", "B", 300_000))
                    .expect("add");
                registry
                    .update(code, &NamePatch::from_inputs("C", "---"))
                    .expect("update");
                if code % 2 == 0 {
                    registry.delete(code).expect("delete");
                }
            }
        });
    });
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_index_by_code");
    for n in [10usize, 50usize, 500usize] {
        let store = filled_store(n);
        let last = 1000 + n as Code;
        group.bench_with_input(BenchmarkId::from_parameter(n), &last, |b, &last| {
            b.iter(|| store.find_index_by_code(last));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_then_drain_front, bench_registry_churn, bench_lookup);
criterion_main!(benches);
