// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sricheck::{build_sri_map, check_bytes, page::extract_scripts, Algorithm};
use url::Url;

fn sri_map_benchmark(c: &mut Criterion) {
    // roughly the size of a minified framework bundle
    let payload = vec![b'x'; 90 * 1024];
    let attr = format!("sha384-{}", Algorithm::Sha384.digest(&payload));

    c.bench_function("build_sri_map_90k", |b| {
        b.iter(|| black_box(build_sri_map(black_box(&payload))))
    });

    c.bench_function("check_bytes_90k", |b| {
        b.iter(|| black_box(check_bytes(black_box(&payload), &attr)))
    });
}

fn page_scan_benchmark(c: &mut Criterion) {
    let html = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Test</title>
            <script src="https://code.jquery.com/jquery-3.3.1.slim.min.js" integrity="sha384-q8i/X+965DzO0rT7abK41JStQIAqVgRVzpbzo5smXKp4YfRvH+8abtTE1Pi6jizo" crossorigin="anonymous"></script>
            <script src="/static/app.js"></script>
        </head>
        <body>
            <div id="content">
                <script>window.inline = true;</script>
                <script src="vendor.js" integrity="sha256-47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="></script>
            </div>
        </body>
        </html>
    "#;
    let base = Url::parse("https://example.com/").unwrap();

    c.bench_function("extract_scripts", |b| {
        b.iter(|| black_box(extract_scripts(black_box(html), &base).unwrap()))
    });
}

criterion_group!(benches, sri_map_benchmark, page_scan_benchmark);
criterion_main!(benches);
