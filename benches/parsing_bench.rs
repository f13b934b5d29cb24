use criterion::{Criterion, black_box, criterion_group, criterion_main};

use globalphone::Database;

const DATABASE: &str = include_str!("../resources/test_database.json");

/// A mix of national, international and idd-prefixed input.
fn setup_parsing_data() -> Vec<(&'static str, &'static str)> {
    vec![
        ("(650) 253-0000", "US"),
        ("1 650 253 0000", "US"),
        ("+44 20 8765 4321", "GB"),
        ("020 8765 4321", "GB"),
        ("00 1 650 253 0000", "GB"),
        ("011 15-2345-6789", "AR"),
        ("+7 701 123 4567", "RU"),
        ("+999 123", "US"),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing");

    group.bench_function("globalphone: load database", |b| {
        b.iter(|| Database::from_json_str(black_box(DATABASE)).unwrap())
    });

    let database = Database::from_json_str(DATABASE).unwrap();
    group.bench_function("globalphone: normalize()", |b| {
        b.iter(|| {
            for (number_str, _) in &numbers_to_parse {
                database.normalize(black_box(number_str));
            }
        })
    });

    group.bench_function("globalphone: parse()", |b| {
        b.iter(|| {
            for (number_str, territory) in &numbers_to_parse {
                let _ = database.parse(black_box(number_str), black_box(territory));
            }
        })
    });

    group.bench_function("globalphone: validate()", |b| {
        b.iter(|| {
            for (number_str, territory) in &numbers_to_parse {
                database.validate(black_box(number_str), black_box(territory));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
