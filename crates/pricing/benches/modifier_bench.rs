use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pricing::{Currency, Modifier, Money, PriceAmendable, Transform};

fn usd(amount: i64) -> Money {
    Money::new(amount, Currency::USD)
}

fn bench_apply_invocable(c: &mut Criterion) {
    let modifier = Modifier::builder()
        .key("shipping")
        .build(Transform::new(|m| m + usd(500)));

    c.bench_function("pricing/apply_invocable", |b| {
        b.iter(|| modifier.apply(black_box(usd(1000))));
    });
}

fn bench_apply_inert(c: &mut Criterion) {
    let modifier = Modifier::builder().key("broken").build(Transform::inert());

    c.bench_function("pricing/apply_inert", |b| {
        b.iter(|| modifier.apply(black_box(usd(1000))));
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let modifiers: Vec<Box<dyn PriceAmendable>> = (0..16)
        .map(|i| -> Box<dyn PriceAmendable> {
            if i % 4 == 0 {
                Box::new(Modifier::new(Transform::inert()))
            } else {
                Box::new(
                    Modifier::builder()
                        .kind(if i % 2 == 0 { "tax" } else { "discount" })
                        .build(Transform::new(move |m| m + usd(i))),
                )
            }
        })
        .collect();

    c.bench_function("pricing/pipeline_16_modifiers", |b| {
        b.iter(|| {
            modifiers
                .iter()
                .fold(black_box(usd(1000)), |acc, m| m.apply(acc).unwrap_or(acc))
        });
    });
}

criterion_group!(
    benches,
    bench_apply_invocable,
    bench_apply_inert,
    bench_pipeline
);
criterion_main!(benches);
