//! `X-Line-Signature` verification.
//!
//! LINE signs the raw request body with HMAC-SHA256 keyed by the channel
//! secret and sends the base64 digest in the header.

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn mac(secret: &str, body: &[u8]) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(body);
    mac
}

/// Compute the signature LINE would send for `body`.
pub fn sign_body(secret: &str, body: &[u8]) -> String {
    STANDARD.encode(mac(secret, body).finalize().into_bytes())
}

/// Check `signature` against `body` in constant time.
pub fn verify_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = STANDARD.decode(signature.trim()) else {
        return false;
    };
    mac(secret, body).verify_slice(&expected).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_verification() {
        let secret = "channel-secret";
        let body = br#"{"destination":"U1","events":[]}"#;
        let signature = sign_body(secret, body);

        assert!(verify_signature(secret, body, &signature));
        assert!(!verify_signature("wrong-secret", body, &signature));
        assert!(!verify_signature(secret, b"tampered", &signature));
    }

    #[test]
    fn test_rejects_malformed_signature() {
        assert!(!verify_signature("s", b"{}", "not base64 !!"));
        assert!(!verify_signature("s", b"{}", ""));
    }

    #[test]
    fn test_signature_is_base64_sha256() {
        let signature = sign_body("s", b"{}");
        assert_eq!(STANDARD.decode(&signature).unwrap().len(), 32);
    }
}
