//! Native BLS12-381 signature verification for virtual-machine precompiles.
//!
//! The host interpreter dispatches calls to a reserved address and hands the
//! raw call data to a [`Precompile`]. This crate provides one such contract,
//! [`BlsSignatureVerify`], which checks a single BLS signature over a 32-byte
//! message digest and reports the outcome as one byte.
//!
//! # Input Layout
//!
//! | Offset | Length | Field                                   |
//! |--------|--------|-----------------------------------------|
//! | 0      | 32     | message digest                          |
//! | 32     | 48     | public key, compressed G1 ([zcash])     |
//! | 80     | 96     | signature, compressed G2 ([zcash])      |
//!
//! The output is `[0x01]` when the signature verifies and `[0x00]` when it does
//! not. Malformed input is an error, never a zero byte.
//!
//! [zcash]: https://github.com/zkcrypto/pairing/tree/master/src/bls12_381#serialization

pub use crate::{
    bls_signature_verify::{BlsSignatureVerify, BLS_SIGNATURE_VERIFY_GAS},
    encoding::{
        PodBlsVerifyInput, PodG1Compressed, PodG2Compressed, PodMessageDigest,
        BLS_SIGNATURE_VERIFY_INPUT_SIZE, G1_COMPRESSED_SIZE, G2_COMPRESSED_SIZE,
        MESSAGE_DIGEST_SIZE,
    },
    error::{DecodeError, PrecompileError},
    scheme::{Bls12381MinPk, SignatureScheme, BLS_SIGNATURE_DST},
};

pub(crate) mod bls_signature_verify;
pub(crate) mod encoding;
pub(crate) mod error;
pub(crate) mod scheme;
#[cfg(test)]
pub(crate) mod test_keys;

/// The calling convention shared by every precompiled contract.
///
/// A host keeps its own table from call address to `Box<dyn Precompile>` and
/// invokes [`required_gas`](Precompile::required_gas) before
/// [`run`](Precompile::run). Implementations hold no mutable state, so a
/// single instance may serve any number of threads at once.
pub trait Precompile: Send + Sync {
    /// Gas charged for executing `input`. Never fails, even for input that
    /// `run` would reject.
    fn required_gas(&self, input: &[u8]) -> u64;

    /// Executes the contract against `input`.
    fn run(&self, input: &[u8]) -> Result<Vec<u8>, PrecompileError>;
}

/// Version identifier for the precompile behavior.
///
/// Changing what a precompile accepts, rejects or charges is a
/// consensus-critical operation: nodes running different behavior for the
/// same input will fork. New behavior must be added as a new variant and every
/// precompile in this crate must scope its logic to the variant it was
/// constructed with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Version {
    /// Fixed-cost single signature verification over the proof-of-possession
    /// ciphersuite.
    #[default]
    V0,
}
