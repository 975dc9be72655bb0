#![allow(unused)]
extern crate odatascope;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use odatascope::prelude::*;
use std::{fs, hint::black_box, path::PathBuf};

/// A synthetic service with `types` entity types of 24 properties each, one entity set per type
fn synthetic(types: usize) -> Vec<Schema> {
    let mut schema = Schema::new("Bench");
    let mut container = EntityContainer::new("Container");
    for index in 0..types {
        let mut entity = EntityType::new(format!("Series{index}"), "Id")
            .with_property(Property::new("Id", "Edm.Guid", false))
            .with_property(Property::new("Time", "Edm.DateTimeOffset", false));
        for value in 0..22 {
            entity = entity.with_property(Property::new(format!("Value{value}"), "Edm.Double", true));
        }
        schema = schema.with_entity_type(entity);
        container = container.with_entity_set(EntitySet::new(
            format!("Series{index}Set"),
            format!("Bench.Series{index}"),
        ));
    }
    vec![schema.with_entity_container(container)]
}

/// Benchmark reading the published sample documents
fn bench_read_samples(c: &mut Criterion) {
    for name in ["grafana_mock.xml", "trippin.xml"] {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/samples")
            .join(name);
        let xml = fs::read_to_string(&path).expect("Failed to read sample document");

        let mut group = c.benchmark_group("read_sample");
        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let metadata = read_metadata(black_box(&xml)).unwrap();
                black_box(metadata)
            });
        });
        group.finish();
    }
}

/// Benchmark writing and reading a large synthetic service
fn bench_synthetic(c: &mut Criterion) {
    let schemas = synthetic(200);
    let xml = write_metadata(&schemas).expect("Failed to write synthetic document");

    println!(
        "Benchmarking synthetic document: {} bytes ({:.2} KB)",
        xml.len(),
        xml.len() as f64 / 1024.0
    );

    let mut group = c.benchmark_group("synthetic");
    group.throughput(Throughput::Bytes(xml.len() as u64));
    group.bench_function("write_metadata", |b| {
        b.iter(|| {
            let xml = write_metadata(black_box(&schemas)).unwrap();
            black_box(xml)
        });
    });
    group.bench_function("read_metadata", |b| {
        b.iter(|| {
            let metadata = read_metadata(black_box(&xml)).unwrap();
            black_box(metadata)
        });
    });
    group.bench_function("project", |b| {
        b.iter(|| black_box(Metadata::project(black_box(&schemas))));
    });
    group.finish();
}

criterion_group!(benches, bench_read_samples, bench_synthetic);
criterion_main!(benches);
