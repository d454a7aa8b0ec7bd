use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scopetype_inference::{infer, synthesize_scope, Scope};
use serde_json::{json, Value};

fn page_scope() -> Value {
    json!({
        "page": { "id": "p1", "title": "Home", "params": { "tab": "overview" } },
        "query": {
            "isLoading": false,
            "rows": [
                { "id": 1, "name": "Ada", "tags": ["admin"], "manager": null },
                { "id": 2, "name": "Grace", "tags": [], "manager": 1 }
            ]
        },
        "textField": { "value": "" },
        "dataGrid": { "selection": null, "columns": [{ "field": "id", "width": 80 }] }
    })
}

fn wide_scope(width: usize) -> Scope {
    (0..width)
        .map(|i| {
            (
                format!("component{}", i),
                json!({ "value": i, "label": format!("Component {}", i), "visible": true }),
            )
        })
        .collect()
}

fn infer_page_scope(c: &mut Criterion) {
    let scope = page_scope();

    c.bench_function("infer_page_scope", |b| b.iter(|| infer(black_box(&scope))));
}

fn synthesize_wide_scope(c: &mut Criterion) {
    let scope = wide_scope(200);

    c.bench_function("synthesize_wide_scope", |b| {
        b.iter(|| synthesize_scope(black_box(&scope)))
    });
}

criterion_group!(benches, infer_page_scope, synthesize_wide_scope);
criterion_main!(benches);
