use {
    crate::error::PrecompileError,
    bytemuck_derive::{Pod, Zeroable},
};

/// Size of the message digest in bytes.
pub const MESSAGE_DIGEST_SIZE: usize = 32;

/// G1 compressed point size.
/// G1 compressed = x (48 bytes) with flags encoded in MSB.
pub const G1_COMPRESSED_SIZE: usize = 48;

/// G2 compressed point size.
/// G2 compressed = x (96 bytes) with flags encoded in MSB.
pub const G2_COMPRESSED_SIZE: usize = 96;

/// Exact size of the verification precompile input.
pub const BLS_SIGNATURE_VERIFY_INPUT_SIZE: usize =
    MESSAGE_DIGEST_SIZE + G1_COMPRESSED_SIZE + G2_COMPRESSED_SIZE;

/// Message digest (32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct PodMessageDigest(pub [u8; MESSAGE_DIGEST_SIZE]);

/// G1 compressed point (48 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct PodG1Compressed(pub [u8; G1_COMPRESSED_SIZE]);

/// G2 compressed point (96 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct PodG2Compressed(pub [u8; G2_COMPRESSED_SIZE]);

/// Borrowed view of the precompile call data.
///
/// Every field is a byte array, so the struct has alignment 1 and no padding
/// and can be cast directly from the input slice without copying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct PodBlsVerifyInput {
    pub message_digest: PodMessageDigest,
    pub public_key: PodG1Compressed,
    pub signature: PodG2Compressed,
}

impl PodBlsVerifyInput {
    /// Assembles a call from its three fields in wire order.
    pub fn new(
        message_digest: [u8; MESSAGE_DIGEST_SIZE],
        public_key: [u8; G1_COMPRESSED_SIZE],
        signature: [u8; G2_COMPRESSED_SIZE],
    ) -> Self {
        Self {
            message_digest: PodMessageDigest(message_digest),
            public_key: PodG1Compressed(public_key),
            signature: PodG2Compressed(signature),
        }
    }

    /// Reinterprets `input` in place. Anything other than exactly
    /// [`BLS_SIGNATURE_VERIFY_INPUT_SIZE`] bytes is rejected.
    pub fn from_bytes(input: &[u8]) -> Result<&Self, PrecompileError> {
        bytemuck::try_from_bytes(input).map_err(|_| PrecompileError::InvalidInputLength {
            expected: BLS_SIGNATURE_VERIFY_INPUT_SIZE,
            actual: input.len(),
        })
    }

    /// The call data, exactly [`BLS_SIGNATURE_VERIFY_INPUT_SIZE`] bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
