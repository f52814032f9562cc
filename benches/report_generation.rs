//! Report layout and encoding benchmarks
//!
//! Measures layout alone and layout plus PDF encoding across inventory sizes.

use chrono::DateTime;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::hint::black_box;
use stockreport::{Company, InventoryLine, ReportBuilder, ReportGenerator};

const SIZES: [usize; 4] = [0, 10, 100, 1000];

fn generator() -> ReportGenerator {
    let generated_at = DateTime::parse_from_rfc3339("2026-10-19T14:05:00-05:00")
        .expect("valid timestamp");
    ReportBuilder::new()
        .with_generated_at(generated_at)
        .build()
        .expect("default config is valid")
}

fn inventory(count: usize) -> Vec<InventoryLine> {
    (0..count)
        .map(|i| {
            InventoryLine::new(format!("SKU-{:05}", i), format!("Producto de prueba {}", i), (i % 25) as i64)
                .with_currency_price("COP", Decimal::from(1_000 + (i as i64 * 37) % 90_000))
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_layout");
    let generator = generator();
    let company = Company::new("900123456-7", "Acme SA").with_address("Calle 100 # 15-20");

    for size in SIZES {
        let lines = inventory(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| {
                let document = generator
                    .build_report(black_box(&company), black_box(lines))
                    .expect("layout succeeds");
                black_box(document);
            });
        });
    }
    group.finish();
}

fn bench_layout_and_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_pdf_encoding");
    let generator = generator();
    let company = Company::new("900123456-7", "Acme SA");

    for size in SIZES {
        let lines = inventory(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| {
                let document = generator.build_report(&company, lines).expect("layout succeeds");
                let bytes = generator.encode_binary(&document).expect("encoding succeeds");
                black_box(bytes.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_layout_and_encode);
criterion_main!(benches);
