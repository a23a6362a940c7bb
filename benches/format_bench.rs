use criterion::{Criterion, black_box, criterion_group, criterion_main};
use strum::IntoEnumIterator;

use telint::{NumFormatter, PhoneFormat};

fn setup_numbers() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("+1 650-555-1234 ext. 1234", Some("US")),
        ("(650) 253-0000", Some("US")),
        ("+44 20 8765 4321", Some("GB")),
        ("020 8765 4321", Some("UK")),
        ("011 33 1 42 68 53 00", Some("FR")),
        ("0033 1 42 68 53 00", None),
        ("12345", Some("DE")),
    ]
}

fn formatting_benchmark(c: &mut Criterion) {
    let formatters: Vec<_> = setup_numbers()
        .into_iter()
        .map(|(number, region)| NumFormatter::new(number, region).unwrap())
        .collect();

    let mut group = c.benchmark_group("Formatting");
    for format in PhoneFormat::iter() {
        group.bench_function(format!("format({format})"), |b| {
            b.iter(|| {
                for formatter in &formatters {
                    black_box(formatter.format(black_box(format)));
                }
            })
        });
    }

    group.bench_function("format_named(DASHED)", |b| {
        b.iter(|| {
            for formatter in &formatters {
                black_box(formatter.format_named(black_box("dashed")).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
