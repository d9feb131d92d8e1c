//! Reference keys and signatures produced with `blst`, independently of the
//! `blstrs` code paths under test.

use {
    crate::{
        encoding::{PodBlsVerifyInput, PodG1Compressed, PodG2Compressed},
        scheme::BLS_SIGNATURE_DST,
    },
    blst::min_pk::SecretKey,
};

pub(crate) fn keypair(seed: u8) -> (SecretKey, PodG1Compressed) {
    let ikm = [seed; 32];
    let secret_key = SecretKey::key_gen(&ikm, &[]).unwrap();
    let public_key = PodG1Compressed(secret_key.sk_to_pk().compress());
    (secret_key, public_key)
}

pub(crate) fn sign(secret_key: &SecretKey, message: &[u8]) -> PodG2Compressed {
    PodG2Compressed(secret_key.sign(message, BLS_SIGNATURE_DST, &[]).compress())
}

/// Builds a call whose signature matches `digest` under the key derived from
/// `seed`.
pub(crate) fn signed_input(seed: u8, digest: [u8; 32]) -> PodBlsVerifyInput {
    let (secret_key, public_key) = keypair(seed);
    let signature = sign(&secret_key, &digest);
    PodBlsVerifyInput::new(digest, public_key.0, signature.0)
}
