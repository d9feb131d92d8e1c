use {
    crate::{
        encoding::PodBlsVerifyInput,
        error::PrecompileError,
        scheme::{Bls12381MinPk, SignatureScheme},
        Precompile, Version,
    },
    log::{debug, trace},
};

/// Flat gas price of one verification, independent of the input.
pub const BLS_SIGNATURE_VERIFY_GAS: u64 = 15_000;

/// Precompile verifying a single BLS signature over a 32-byte message digest.
///
/// Returns `[1]` when the signature matches, `[0]` when it is well formed but
/// does not match, and an error when any field fails to decode.
#[derive(Clone, Copy, Debug)]
pub struct BlsSignatureVerify<S = Bls12381MinPk> {
    version: Version,
    scheme: S,
}

impl BlsSignatureVerify {
    /// Creates the precompile backed by [`Bls12381MinPk`].
    pub fn new(version: Version) -> Self {
        Self::with_scheme(version, Bls12381MinPk)
    }
}

impl Default for BlsSignatureVerify {
    fn default() -> Self {
        Self::new(Version::default())
    }
}

impl<S: SignatureScheme> BlsSignatureVerify<S> {
    /// Creates the precompile over an arbitrary curve backend.
    pub fn with_scheme(version: Version, scheme: S) -> Self {
        Self { version, scheme }
    }

    /// The behavior version this instance was constructed with.
    pub fn version(&self) -> Version {
        self.version
    }

    fn verify_input(&self, input: &[u8]) -> Result<bool, PrecompileError> {
        let input = PodBlsVerifyInput::from_bytes(input)?;

        let public_key = self
            .scheme
            .decode_public_key(&input.public_key)
            .map_err(PrecompileError::InvalidPublicKeyEncoding)?;
        let signature = self
            .scheme
            .decode_signature(&input.signature)
            .map_err(PrecompileError::InvalidSignatureEncoding)?;

        Ok(self
            .scheme
            .verify(&public_key, &signature, &input.message_digest))
    }
}

impl<S: SignatureScheme> Precompile for BlsSignatureVerify<S> {
    fn required_gas(&self, _input: &[u8]) -> u64 {
        match self.version {
            Version::V0 => BLS_SIGNATURE_VERIFY_GAS,
        }
    }

    fn run(&self, input: &[u8]) -> Result<Vec<u8>, PrecompileError> {
        let verified = match self.version {
            Version::V0 => self.verify_input(input),
        }
        .inspect_err(|err| debug!("bls signature verify rejected input: {err:?}"))?;

        trace!("bls signature verify result: {verified}");
        Ok(vec![u8::from(verified)])
    }
}
