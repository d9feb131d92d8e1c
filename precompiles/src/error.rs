use thiserror::Error;

/// Reasons a curve library rejects a compressed point.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("bytes are not a canonical compressed point on the curve")]
    InvalidEncoding,
    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,
    #[error("point at infinity is not accepted")]
    IdentityPoint,
}

/// Terminal failures of a precompile call.
///
/// The host treats any of these as a revert with all gas consumed. A signature
/// that is well formed but does not match is not an error.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PrecompileError {
    #[error("Invalid input length ({actual} != {expected})")]
    InvalidInputLength { expected: usize, actual: usize },
    #[error("Invalid public key encoding")]
    InvalidPublicKeyEncoding(#[source] DecodeError),
    #[error("Invalid signature encoding")]
    InvalidSignatureEncoding(#[source] DecodeError),
}

#[cfg(test)]
mod tests {
    use {super::*, std::error::Error as _};

    #[test]
    fn test_decode_reason_reported_once() {
        let err = PrecompileError::InvalidPublicKeyEncoding(DecodeError::IdentityPoint);
        assert_eq!(err.to_string(), "Invalid public key encoding");
        assert_eq!(
            err.source().map(|source| source.to_string()),
            Some(DecodeError::IdentityPoint.to_string()),
        );

        let err = PrecompileError::InvalidSignatureEncoding(DecodeError::NotInSubgroup);
        assert_eq!(err.to_string(), "Invalid signature encoding");
        assert_eq!(
            err.source().map(|source| source.to_string()),
            Some(DecodeError::NotInSubgroup.to_string()),
        );

        let err = PrecompileError::InvalidInputLength {
            expected: 176,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Invalid input length (3 != 176)");
        assert!(err.source().is_none());
    }
}
