use {
    bls_precompiles::*,
    blst::min_pk::SecretKey,
    criterion::{criterion_group, criterion_main, BenchmarkId, Criterion},
    std::hint::black_box,
};

// Builds a valid call and a copy whose digest no longer matches the signature.
fn build_inputs() -> (PodBlsVerifyInput, PodBlsVerifyInput) {
    let secret_key = SecretKey::key_gen(&[0x2a; 32], &[]).unwrap();
    let digest = [0x5c; 32];
    let signature = secret_key.sign(&digest, BLS_SIGNATURE_DST, &[]);

    let valid = PodBlsVerifyInput::new(
        digest,
        secret_key.sk_to_pk().compress(),
        signature.compress(),
    );
    let mut mismatched = valid;
    mismatched.message_digest.0[0] ^= 0xff;
    (valid, mismatched)
}

fn bench_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decoding");
    let (valid, _) = build_inputs();

    group.bench_function("Public Key", |b| {
        b.iter(|| {
            Bls12381MinPk
                .decode_public_key(black_box(&valid.public_key))
                .unwrap()
        })
    });

    group.bench_function("Signature", |b| {
        b.iter(|| {
            Bls12381MinPk
                .decode_signature(black_box(&valid.signature))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("BLS Signature Verify");
    let precompile = BlsSignatureVerify::new(Version::V0);
    let (valid, mismatched) = build_inputs();

    for (label, input) in [("Valid", valid), ("Mismatched", mismatched)] {
        group.bench_function(BenchmarkId::new("Run", label), |b| {
            b.iter(|| precompile.run(black_box(input.as_bytes())).unwrap())
        });
    }

    let mut bad_public_key = valid;
    bad_public_key.public_key.0[0] &= 0x7f;
    group.bench_function(BenchmarkId::new("Run", "Invalid Public Key"), |b| {
        b.iter(|| precompile.run(black_box(bad_public_key.as_bytes())).unwrap_err())
    });

    group.finish();
}

criterion_group!(benches, bench_decoding, bench_run);
criterion_main!(benches);
