//! Signature verification for inbound webhook requests
//!
//! When an app secret is configured, the relay signs every body with
//! HMAC-SHA256 and sends it in `X-Hub-Signature-256` as `sha256=<hex>`.
//! The signature is computed over the raw body bytes, never over re-encoded
//! JSON, and compared in constant time.

use derive_more::{Display, Error};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[display("missing signature header")]
    MissingHeader,
    #[display("signature header must start with 'sha256='")]
    InvalidFormat,
    #[display("signature is not valid hex")]
    InvalidHex,
    #[display("signature does not match payload")]
    Mismatch,
}

fn sign(payload: &[u8], app_secret: &str) -> Option<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(app_secret.as_bytes()).ok()?;
    mac.update(payload);
    Some(mac.finalize().into_bytes().to_vec())
}

/// Verifies an `X-Hub-Signature-256` header value against the raw body
pub fn verify_signature(
    signature_header: Option<&str>,
    payload: &[u8],
    app_secret: &str,
) -> Result<(), SignatureError> {
    let signature_hex = signature_header
        .ok_or(SignatureError::MissingHeader)?
        .strip_prefix("sha256=")
        .ok_or(SignatureError::InvalidFormat)?;

    let expected = hex::decode(signature_hex).map_err(|_| SignatureError::InvalidHex)?;
    let computed = sign(payload, app_secret).ok_or(SignatureError::Mismatch)?;

    if bool::from(computed.as_slice().ct_eq(expected.as_slice())) {
        Ok(())
    } else {
        Err(SignatureError::Mismatch)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Header value a relay would send for `payload`
    pub(crate) fn signature_header(payload: &[u8], app_secret: &str) -> String {
        format!("sha256={}", hex::encode(sign(payload, app_secret).unwrap()))
    }

    const SECRET: &str = "test_secret";
    const PAYLOAD: &[u8] = br#"{"from":"15551234567","message":"1"}"#;

    #[test]
    fn test_verify_signature_valid() {
        let header = signature_header(PAYLOAD, SECRET);
        assert_eq!(verify_signature(Some(&header), PAYLOAD, SECRET), Ok(()));
    }

    #[test]
    fn test_verify_signature_wrong_secret() {
        let header = signature_header(PAYLOAD, "wrong_secret");
        assert_eq!(
            verify_signature(Some(&header), PAYLOAD, SECRET),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn test_verify_signature_tampered_payload() {
        let header = signature_header(PAYLOAD, SECRET);
        let tampered = br#"{"from":"15551234567","message":"4"}"#;
        assert_eq!(
            verify_signature(Some(&header), tampered, SECRET),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn test_verify_signature_malformed_headers() {
        assert_eq!(
            verify_signature(None, PAYLOAD, SECRET),
            Err(SignatureError::MissingHeader)
        );
        assert_eq!(
            verify_signature(Some("abc123"), PAYLOAD, SECRET),
            Err(SignatureError::InvalidFormat)
        );
        assert_eq!(
            verify_signature(Some("sha1=abc123"), PAYLOAD, SECRET),
            Err(SignatureError::InvalidFormat)
        );
        assert_eq!(
            verify_signature(Some("sha256=zzzz"), PAYLOAD, SECRET),
            Err(SignatureError::InvalidHex)
        );
        assert_eq!(
            verify_signature(Some("sha256=00"), PAYLOAD, SECRET),
            Err(SignatureError::Mismatch)
        );
    }
}
