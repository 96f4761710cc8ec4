use criterion::{Criterion, criterion_group, criterion_main};
use spooky_record::{RecordType, SpookyValue, defaults};
use std::hint::black_box;

// ─── Test Data ──────────────────────────────────────────────────────────────

/// Eight fields, wide enough to take the index-table lookup path.
fn make_type() -> RecordType {
    RecordType::define(
        defaults! {
            "id" => "",
            "name" => "anon",
            "email" => "",
            "age" => 0i64,
            "score" => 0.0f64,
            "active" => false,
            "version" => 1u64,
            "deleted" => false,
        },
        Some("User"),
    )
    .unwrap()
}

const EDITS: [(&str, i64); 8] = [
    ("age", 28),
    ("version", 2),
    ("age", 29),
    ("version", 3),
    ("age", 30),
    ("version", 4),
    ("age", 31),
    ("version", 5),
];

// ═══════════════════════════════════════════════════════════════════════════
// Group 1: Creating records
// ═══════════════════════════════════════════════════════════════════════════

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    let ty = make_type();

    group.bench_function("empty", |b| b.iter(|| black_box(ty.empty())));

    group.bench_function("create (2 values)", |b| {
        b.iter(|| {
            black_box(ty.create([
                ("name", SpookyValue::from("Alice")),
                ("age", SpookyValue::from(28i64)),
            ]))
        })
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 2: Reads — by name vs FieldSlot
// ═══════════════════════════════════════════════════════════════════════════

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("reads");
    let ty = make_type();
    let rec = ty.create([("age", SpookyValue::from(28i64))]);
    let age = ty.resolve("age").unwrap();

    group.bench_function("get (by name, set)", |b| {
        b.iter(|| black_box(rec.get(black_box("age"))))
    });

    group.bench_function("get (by name, default)", |b| {
        b.iter(|| black_box(rec.get(black_box("email"))))
    });

    group.bench_function("get_at (slot)", |b| {
        b.iter(|| black_box(rec.get_at(black_box(&age))))
    });

    group.bench_function("iter (all fields)", |b| {
        b.iter(|| black_box(rec.iter().count()))
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 3: Batched writes — persistent chain vs one mutation session
// ═══════════════════════════════════════════════════════════════════════════

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_set");
    let ty = make_type();
    let base = ty.empty();

    // One slot-array copy per edit.
    group.bench_function("persistent (8 sets)", |b| {
        b.iter(|| {
            let mut rec = base.clone();
            for (field, n) in EDITS {
                rec = rec.set(field, SpookyValue::from(n)).unwrap();
            }
            black_box(rec)
        })
    });

    // One copy on entry, then in place.
    group.bench_function("with_mutations (8 sets)", |b| {
        b.iter(|| {
            let rec = base
                .with_mutations(|mut rec| {
                    for (field, n) in EDITS {
                        rec = rec.set(field, SpookyValue::from(n))?;
                    }
                    Ok(rec)
                })
                .unwrap();
            black_box(rec)
        })
    });

    group.bench_function("set_at in session (8 sets)", |b| {
        let slots: Vec<_> = EDITS
            .iter()
            .map(|(field, _)| ty.resolve(field).unwrap())
            .collect();
        b.iter(|| {
            let mut rec = base.clone().as_mutable();
            for (slot, (_, n)) in slots.iter().zip(EDITS) {
                rec.set_at(slot, SpookyValue::from(n)).unwrap();
            }
            black_box(rec.as_immutable())
        })
    });

    group.finish();
}

// ─── Criterion Main ─────────────────────────────────────────────────────────

criterion_group!(benches, bench_create, bench_reads, bench_batch);
criterion_main!(benches);
