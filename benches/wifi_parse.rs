use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wifi_qr::CredentialRecord;
use wifi_qr::parser::parse_wifi_payload;

fn bench_parse_typical(c: &mut Criterion) {
    let payload = "WIFI:S:HomeNetwork;T:WPA;P:correct horse battery staple;H:false;;";
    c.bench_function("parse_wifi_typical", |b| {
        b.iter(|| parse_wifi_payload(black_box(payload)))
    });
}

fn bench_parse_escaped(c: &mut Criterion) {
    let record = CredentialRecord::new(r"Guest\;Net:5G")
        .with_network_type("WPA")
        .with_password(r"p\a;s:s,w\o;r:d".repeat(8));
    let payload = record.to_payload();
    c.bench_function("parse_wifi_escaped", |b| {
        b.iter(|| parse_wifi_payload(black_box(&payload)))
    });
}

fn bench_parse_rejected(c: &mut Criterion) {
    let payload = "https://example.com/a/fairly/long/url?with=query&parameters=true";
    c.bench_function("parse_wifi_rejected", |b| {
        b.iter(|| parse_wifi_payload(black_box(payload)))
    });
}

criterion_group!(
    benches,
    bench_parse_typical,
    bench_parse_escaped,
    bench_parse_rejected
);
criterion_main!(benches);
