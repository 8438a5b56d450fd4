use criterion::{Criterion, criterion_group, criterion_main};
use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};
use std::hint::black_box;

pub fn bench_sha1_crate(c: &mut Criterion) {
    let data = [0u8; 64];

    c.bench_function("sha1::Sha1 64 bytes", |b| {
        b.iter(|| {
            let mut hasher = Sha1::new();
            hasher.update(black_box(&data));
            let _ = hasher.finalize();
        })
    });

    let data = vec![0u8; 16 * 1024];
    c.bench_function("sha1::Sha1 16 KiB", |b| {
        b.iter(|| {
            let mut hasher = Sha1::new();
            hasher.update(black_box(&data));
            let _ = hasher.finalize();
        })
    });
}

pub fn bench_hmac_crate(c: &mut Criterion) {
    let data = [0u8; 64];

    c.bench_function("hmac::Hmac<Sha1> 64 bytes", |b| {
        b.iter(|| {
            let mut mac = Hmac::<Sha1>::new_from_slice(black_box(b"secret key")).unwrap();
            mac.update(black_box(&data));
            let _ = mac.finalize();
        })
    });
}

criterion_group!(benches, bench_sha1_crate, bench_hmac_crate);
criterion_main!(benches);
