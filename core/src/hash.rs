//! Hash related utils.

use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;

/// Hex encoded HMAC with SHA1 hash.
///
/// Use this function instead of `hex::encode(hmac_sha1(key, content))` can
/// reduce extra copy.
pub fn hex_hmac_sha1(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha1>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_hmac_sha1() {
        assert_eq!(
            hex_hmac_sha1(b"key", b"The quick brown fox jumps over the lazy dog"),
            "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9"
        );
    }

    #[test]
    fn test_hex_hmac_sha1_is_deterministic() {
        let a = hex_hmac_sha1(b"secret", b"/v3/route_types?devid=1");
        let b = hex_hmac_sha1(b"secret", b"/v3/route_types?devid=1");
        assert_eq!(a, b);
        assert_eq!(a, "ee966fc917502d84e7ac11ac0ec88ea9b545fe09");
    }
}
