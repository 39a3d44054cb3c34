//! Request signatures for the Youdao (v3) and Baidu APIs

use md5::Md5;
use sha2::{Digest, Sha256};
use std::borrow::Cow;

/// Queries up to this many characters are signed as-is
const TRUNCATE_THRESHOLD: usize = 20;
/// Bytes kept from each end of a long query
const TRUNCATE_EDGE: usize = 10;

/// Shorten a query for the Youdao signature input.
///
/// Long queries become `first 10 bytes + char count + last 10 bytes`. The cut
/// is on UTF-8 bytes, so a multi-byte character at either edge is split and
/// the result is not guaranteed to be valid UTF-8.
pub fn truncate(q: &str) -> Cow<'_, [u8]> {
    let qlen = q.chars().count();
    if qlen <= TRUNCATE_THRESHOLD {
        return Cow::Borrowed(q.as_bytes());
    }

    let bytes = q.as_bytes();
    let len_str = qlen.to_string();
    let mut out = Vec::with_capacity(TRUNCATE_EDGE * 2 + len_str.len());
    out.extend_from_slice(&bytes[..TRUNCATE_EDGE]);
    out.extend_from_slice(len_str.as_bytes());
    out.extend_from_slice(&bytes[bytes.len() - TRUNCATE_EDGE..]);
    Cow::Owned(out)
}

/// sha256(appKey + truncate(q) + salt + curtime + appSecret), lowercase hex
pub fn youdao_sign(app_key: &str, app_secret: &str, q: &str, salt: &str, curtime: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(app_key.as_bytes());
    hasher.update(truncate(q));
    hasher.update(salt.as_bytes());
    hasher.update(curtime.as_bytes());
    hasher.update(app_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// md5(appid + q + salt + secret), lowercase hex
pub fn baidu_sign(app_key: &str, app_secret: &str, q: &str, salt: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(format!("{}{}{}{}", app_key, q, salt, app_secret));
    hex::encode(hasher.finalize())
}

/// Fresh per-request salt
pub fn new_nonce() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current Unix time in seconds, as the decimal string the API expects
pub fn unix_timestamp() -> String {
    chrono::Utc::now().timestamp().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_query_is_not_truncated() {
        assert_eq!(truncate("hi").as_ref(), b"hi");

        let twenty = "abcdefghijklmnopqrst";
        assert_eq!(twenty.chars().count(), 20);
        assert_eq!(truncate(twenty).as_ref(), twenty.as_bytes());
    }

    #[test]
    fn test_truncate_at_21_chars() {
        let q = "abcdefghijklmnopqrstu";
        assert_eq!(truncate(q).as_ref(), b"abcdefghij21lmnopqrstu");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // 20 chars but 60 bytes: below the threshold
        let q = "你".repeat(20);
        assert_eq!(truncate(&q).as_ref(), q.as_bytes());
    }

    #[test]
    fn test_truncate_splits_multibyte_chars() {
        // 21 chars of 3 bytes each; 10 bytes ends mid-character
        let q = "你".repeat(21);
        let out = truncate(&q);
        assert_eq!(out.len(), 10 + 2 + 10);
        assert_eq!(&out[..10], &q.as_bytes()[..10]);
        assert_eq!(&out[10..12], b"21");
        assert_eq!(&out[12..], &q.as_bytes()[q.len() - 10..]);
        assert!(std::str::from_utf8(&out).is_err());
    }

    #[test]
    fn test_youdao_sign_known_value() {
        let sign = youdao_sign("key", "secret", "hi", "nonce", "1000");
        // sha256("keyhinoonce1000secret")
        assert_eq!(
            sign,
            "8fbfef350f78290124e42146054fbc37839ea167afa9f514af4e196eba80a778"
        );
        assert_eq!(sign.len(), 64);
    }

    #[test]
    fn test_youdao_sign_uses_truncated_query() {
        let q = "abcdefghijklmnopqrstu";
        let mut hasher = Sha256::new();
        hasher.update(b"keyabcdefghij21lmnopqrstunonce1000secret");
        let expected = hex::encode(hasher.finalize());

        assert_eq!(youdao_sign("key", "secret", q, "nonce", "1000"), expected);
    }

    #[test]
    fn test_baidu_sign_known_value() {
        let sign = baidu_sign("key", "secret", "hi", "nonce");
        // md5("keyhinoncesecret")
        assert_eq!(sign, "3cd33abed5bc0489c36ea0482f474ecf");
        assert_eq!(sign.len(), 32);
    }

    #[test]
    fn test_signatures_are_deterministic() {
        let a = youdao_sign("key", "secret", "hello world", "n", "1");
        let b = youdao_sign("key", "secret", "hello world", "n", "1");
        assert_eq!(a, b);

        let a = baidu_sign("key", "secret", "hello world", "n");
        let b = baidu_sign("key", "secret", "hello world", "n");
        assert_eq!(a, b);
    }

    #[test]
    fn test_any_input_change_changes_signature() {
        let base = youdao_sign("key", "secret", "hi", "nonce", "1000");
        assert_ne!(base, youdao_sign("key2", "secret", "hi", "nonce", "1000"));
        assert_ne!(base, youdao_sign("key", "secret2", "hi", "nonce", "1000"));
        assert_ne!(base, youdao_sign("key", "secret", "ho", "nonce", "1000"));
        assert_ne!(base, youdao_sign("key", "secret", "hi", "nonce2", "1000"));
        assert_ne!(base, youdao_sign("key", "secret", "hi", "nonce", "1001"));

        let base = baidu_sign("key", "secret", "hi", "nonce");
        assert_ne!(base, baidu_sign("key2", "secret", "hi", "nonce"));
        assert_ne!(base, baidu_sign("key", "secret2", "hi", "nonce"));
        assert_ne!(base, baidu_sign("key", "secret", "ho", "nonce"));
        assert_ne!(base, baidu_sign("key", "secret", "hi", "nonce2"));
    }

    #[test]
    fn test_nonce_is_uuid_v4() {
        let nonce = new_nonce();
        let parsed = uuid::Uuid::parse_str(&nonce).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(nonce, new_nonce());
    }

    #[test]
    fn test_timestamp_is_decimal_seconds() {
        let ts = unix_timestamp();
        let secs: i64 = ts.parse().unwrap();
        assert!(secs > 1_600_000_000);
    }
}
