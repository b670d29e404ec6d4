use hmac::{Hmac, Mac};
use sha2::Sha256;
type HmacSha256 = Hmac<Sha256>;

/// Header GitLab uses to carry the webhook secret token
pub const GITLAB_TOKEN_HEADER: &str = "X-Gitlab-Token";

/// Header carrying GitLab's per-delivery id
pub const GITLAB_EVENT_UUID_HEADER: &str = "X-Gitlab-Event-UUID";

fn keyed_digest(secret: &str, value: &str) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(value.as_bytes());
    Some(mac)
}

/// Checks the `X-Gitlab-Token` value against the configured secret.
/// GitLab sends the secret verbatim, so both sides are digested under the
/// secret and compared in constant time.
pub fn verify_gitlab_token(secret: &str, token: &str) -> bool {
    let expected = match keyed_digest(secret, secret) {
        Some(mac) => mac.finalize().into_bytes(),
        None => return false,
    };
    match keyed_digest(secret, token) {
        Some(mac) => mac.verify_slice(expected.as_slice()).is_ok(),
        None => false,
    }
}
