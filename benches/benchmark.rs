use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use chrono::Duration;
use tristate::{ToValue, Tristate, Value};

pub fn criterion_benchmark(c: &mut Criterion) {
    // ------------- Construction -------------
    let one = 1i64;
    c.bench_function("from_ref some", |b| b.iter(|| Tristate::from_ref(black_box(Some(&one)))));
    c.bench_function("from_ref none", |b| b.iter(|| Tristate::<i64>::from_ref(black_box(None))));
    c.bench_function("from_nullable tristate", |b| {
        b.iter(|| Tristate::from_nullable(black_box(Tristate::<i64>::absent())))
    });
    c.bench_function("from_zeroable bool slice", |b| {
        b.iter(|| Tristate::from_zeroable(black_box(vec![true, false])))
    });

    // ------------- Relational -------------
    let nested = Tristate::present(Tristate::present(Tristate::present(1i64)));
    c.bench_function("to_value nested", |b| b.iter(|| black_box(&nested).to_value()));
    let mut target = Tristate::<u8>::default();
    let int = Value::Int(1);
    c.bench_function("scan int64 to u8", |b| b.iter(|| target.scan(black_box(&int))));
    let mut duration = Tristate::<Duration>::default();
    let text = Value::Text("1h30m15.5s".to_string());
    c.bench_function("scan text to duration", |b| b.iter(|| duration.scan(black_box(&text))));
    let mut tags = Tristate::<Vec<String>>::default();
    let literal = Value::Text(r#"{"alpha","beta","gamma"}"#.to_string());
    c.bench_function("scan array literal", |b| b.iter(|| tags.scan(black_box(&literal))));

    // ------------- Structured -------------
    let mut decoded = Tristate::<String>::default();
    c.bench_function("decode_json string", |b| b.iter(|| decoded.decode_json(black_box(b"\"hello\""))));
    c.bench_function("decode_json null", |b| b.iter(|| decoded.decode_json(black_box(b"null"))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
