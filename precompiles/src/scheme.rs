use {
    crate::{
        encoding::{PodG1Compressed, PodG2Compressed, PodMessageDigest},
        error::DecodeError,
    },
    blstrs::{Bls12, G1Affine, G1Projective, G2Affine, G2Prepared, G2Projective, Gt},
    group::{prime::PrimeCurveAffine, Group},
    pairing::{MillerLoopResult, MultiMillerLoop},
};

/// Domain separation tag of the IETF proof-of-possession ciphersuite with
/// public keys in G1 and signatures in G2.
///
/// See <https://www.ietf.org/archive/id/draft-irtf-cfrg-bls-signature-05.html#section-4.2.3>
pub const BLS_SIGNATURE_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// The curve library a signature precompile delegates to.
///
/// Decoded points are opaque to the precompile: it only moves them from the
/// decoders into [`verify`](SignatureScheme::verify) and drops them when the
/// call returns. All three operations must be pure.
pub trait SignatureScheme: Send + Sync {
    type PublicKey;
    type Signature;

    /// Decodes a compressed public key, rejecting anything that is not a
    /// usable point of the expected subgroup.
    fn decode_public_key(&self, input: &PodG1Compressed) -> Result<Self::PublicKey, DecodeError>;

    /// Decodes a compressed signature under the same rules.
    fn decode_signature(&self, input: &PodG2Compressed) -> Result<Self::Signature, DecodeError>;

    /// Returns whether `signature` is a signature of `message` under `public_key`.
    fn verify(
        &self,
        public_key: &Self::PublicKey,
        signature: &Self::Signature,
        message: &PodMessageDigest,
    ) -> bool;
}

/// BLS12-381 "minimal public key size" signatures backed by `blstrs`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls12381MinPk;

impl SignatureScheme for Bls12381MinPk {
    type PublicKey = G1Affine;
    type Signature = G2Affine;

    /// Decompresses a public key.
    ///
    /// The identity is rejected: a key at infinity would accept the signature
    /// at infinity for every message.
    fn decode_public_key(&self, input: &PodG1Compressed) -> Result<G1Affine, DecodeError> {
        // `G1Affine::from_compressed_unchecked` performs field and on-curve checks
        let point = G1Affine::from_compressed_unchecked(&input.0)
            .into_option()
            .ok_or(DecodeError::InvalidEncoding)?;

        if !bool::from(point.is_torsion_free()) {
            return Err(DecodeError::NotInSubgroup);
        }
        if bool::from(point.is_identity()) {
            return Err(DecodeError::IdentityPoint);
        }
        Ok(point)
    }

    /// Decompresses a signature. The identity is a valid encoding; it never
    /// verifies against an accepted public key.
    fn decode_signature(&self, input: &PodG2Compressed) -> Result<G2Affine, DecodeError> {
        // `G2Affine::from_compressed_unchecked` performs field and on-curve checks
        let point = G2Affine::from_compressed_unchecked(&input.0)
            .into_option()
            .ok_or(DecodeError::InvalidEncoding)?;

        if !bool::from(point.is_torsion_free()) {
            return Err(DecodeError::NotInSubgroup);
        }
        Ok(point)
    }

    /// Checks `e(pk, H(m)) == e(g1, sig)`.
    ///
    /// Computed as `e(pk, H(m)) * e(-g1, sig) == 1` so that both pairings share
    /// a single Miller loop and final exponentiation.
    #[allow(clippy::arithmetic_side_effects)]
    fn verify(
        &self,
        public_key: &G1Affine,
        signature: &G2Affine,
        message: &PodMessageDigest,
    ) -> bool {
        let hashed = G2Affine::from(G2Projective::hash_to_curve(
            &message.0,
            BLS_SIGNATURE_DST,
            &[],
        ));
        let neg_generator = G1Affine::from(-G1Projective::generator());

        let hashed_prepared = G2Prepared::from(hashed);
        let signature_prepared = G2Prepared::from(*signature);
        let terms = [
            (public_key, &hashed_prepared),
            (&neg_generator, &signature_prepared),
        ];

        let miller_out = Bls12::multi_miller_loop(&terms);
        miller_out.final_exponentiation() == Gt::identity()
    }
}
