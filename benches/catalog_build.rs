use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;

use infoschema::{InformationSchemaCatalog, Schema, SchemaDef};

/// `n` tables of 8 columns each, every table with one secondary index, a check
/// constraint and a foreign key to its predecessor.
fn gen_schema(n: usize) -> Schema {
    let mut tables = Vec::with_capacity(n);
    for t in 0..n {
        let mut columns = vec![json!({ "name": "Id", "type": "INT64", "nullable": false })];
        for c in 1..8 {
            let ty = if c % 2 == 0 { "STRING(MAX)" } else { "INT64" };
            columns.push(json!({ "name": format!("C{}", c), "type": ty, "nullable": c % 3 != 0 }));
        }
        let mut table = json!({
            "name": format!("T{}", t),
            "columns": columns,
            "primary_key": [ "Id" ],
            "indexes": [ { "name": format!("T{}ByC2", t), "columns": [ "C2" ], "storing": [ "C4" ] } ],
            "check_constraints": [ { "name": format!("CK_T{}", t), "expression": "C1 > 0", "depends_on": [ "C1" ] } ]
        });
        if t > 0 {
            table["foreign_keys"] = json!([ { "name": format!("FK_T{}", t), "columns": [ "C1" ],
                                             "references": format!("T{}", t - 1), "referenced_columns": [ "Id" ] } ]);
        }
        tables.push(table);
    }
    SchemaDef::from_json_value(json!({ "tables": tables }))
        .and_then(|d| d.compile())
        .expect("generated schema compiles")
}

fn bench_catalog_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_build");
    group.sample_size(20);
    for &n in &[0usize, 100, 1_000] {
        let schema = gen_schema(n);
        group.throughput(Throughput::Elements(n.max(1) as u64));
        group.bench_with_input(BenchmarkId::new("tables", n), &schema, |b, schema| {
            b.iter(|| InformationSchemaCatalog::new(schema).expect("catalog builds"));
        });
    }
    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let catalog = InformationSchemaCatalog::new(&gen_schema(100)).expect("catalog builds");
    let columns = catalog.table("COLUMNS").expect("COLUMNS registered");
    c.bench_function("columns_to_dataframe", |b| b.iter(|| columns.to_dataframe().expect("frame")));
}

criterion_group!(benches, bench_catalog_build, bench_export);
criterion_main!(benches);
