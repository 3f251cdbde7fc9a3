// benches/extract.rs
use criterion::{ black_box, criterion_group, criterion_main, Criterion };

use psx_scrape::{
    model::CoercionPolicy,
    rank,
    scrape::build_report,
    specs::{ SelectorTable, TableSpec },
};

/// A page about the size of the live summary (~550 listed symbols).
fn synthetic_page(rows: usize) -> String {
    let mut html = String::from(
        "<html><body><table class=\"stock-table-class\">\
         <tr><th>SYMBOL</th><th>COMPANY</th><th>CURRENT</th><th>CHANGE</th><th>VOLUME</th></tr>",
    );
    for i in 0..rows {
        let change = (i as f64 * 0.37).sin() * 5.0;
        html.push_str(&format!(
            "<tr><td>S{i:04}</td><td>Company {i} Limited</td><td>{:.2}</td><td>{change:.2}</td><td>{},{:03}</td></tr>",
            50.0 + i as f64,
            i / 3 + 1,
            i % 1000,
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page(550);
    let spec = SelectorTable::market_summary();

    c.bench_function("extract_table", |b| {
        b.iter(|| {
            let bundle = spec.extract(black_box(&page));
            black_box(bundle.map(|t| t.rows.len()))
        })
    });

    c.bench_function("build_report_numeric", |b| {
        b.iter(|| {
            let report = build_report(black_box(&page), &spec, CoercionPolicy::Numeric);
            black_box(report.rows.len())
        })
    });

    let report = build_report(&page, &spec, CoercionPolicy::Numeric);
    c.bench_function("rank_top_gainer", |b| {
        b.iter(|| black_box(rank::top_gainer_index(black_box(&report.rows))))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
