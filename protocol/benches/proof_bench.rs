// Zero-knowledge proof benchmarks for the ARX protocol.
//
// Benchmarks Groth16 trusted setup, proof generation, and proof verification
// for the identity circuit over BN254. Also covers the native Poseidon
// commitment and the calldata codec since both sit on the proving path.

use criterion::{criterion_group, criterion_main, Criterion};

use ark_bn254::Fr;
use ark_std::rand::{rngs::StdRng, SeedableRng};

use arx_protocol::zkp::commitment::{identity_commitment, poseidon_config};
use arx_protocol::zkp::prover::IdentityProver;
use arx_protocol::zkp::ProofCalldata;

fn bench_groth16_setup(c: &mut Criterion) {
    c.bench_function("zkp/groth16_setup", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            IdentityProver::setup(&mut rng)
        });
    });
}

fn bench_poseidon_commitment(c: &mut Criterion) {
    let config = poseidon_config();
    let secret = Fr::from(1_000_000u64);

    c.bench_function("zkp/poseidon_commitment", |b| {
        b.iter(|| identity_commitment(&config, secret));
    });
}

fn bench_groth16_prove(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let (prover, _verifier) = IdentityProver::setup(&mut rng);
    let secret = Fr::from(10_000u64);

    c.bench_function("zkp/groth16_prove", |b| {
        b.iter(|| prover.prove(secret).unwrap());
    });
}

fn bench_groth16_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let (prover, verifier) = IdentityProver::setup(&mut rng);
    let secret = Fr::from(10_000u64);
    let commitment = prover.commitment(secret);
    let proof = prover.prove(secret).unwrap();

    c.bench_function("zkp/groth16_verify", |b| {
        b.iter(|| verifier.verify(&proof, commitment).unwrap());
    });
}

fn bench_calldata_decode(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let (prover, _verifier) = IdentityProver::setup(&mut rng);
    let secret = Fr::from(10_000u64);
    let proof = prover.prove(secret).unwrap();
    let calldata = ProofCalldata::encode(&proof, prover.commitment(secret)).unwrap();

    c.bench_function("zkp/calldata_decode", |b| {
        b.iter(|| calldata.decode().unwrap());
    });
}

criterion_group!(
    benches,
    bench_groth16_setup,
    bench_poseidon_commitment,
    bench_groth16_prove,
    bench_groth16_verify,
    bench_calldata_decode
);
criterion_main!(benches);
