// src/infrastructure/security/csrf.rs
use crate::application::ports::security::CsrfProtector;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Stateless tokens: `base64url(HMAC-SHA256(secret, "csrf:" || session_id))`.
#[derive(Clone)]
pub struct HmacCsrfProtector {
    mac: HmacSha256,
}

impl HmacCsrfProtector {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let mac = HmacSha256::new_from_slice(secret.as_ref())
            .expect("HMAC accepts keys of any length");
        Self { mac }
    }

    fn keyed(&self, session_id: &str) -> HmacSha256 {
        let mut mac = self.mac.clone();
        mac.update(b"csrf:");
        mac.update(session_id.as_bytes());
        mac
    }
}

impl CsrfProtector for HmacCsrfProtector {
    fn issue(&self, session_id: &str) -> String {
        URL_SAFE_NO_PAD.encode(self.keyed(session_id).finalize().into_bytes())
    }

    fn verify(&self, session_id: &str, token: &str) -> bool {
        let Ok(presented) = URL_SAFE_NO_PAD.decode(token.trim()) else {
            return false;
        };
        // constant-time comparison
        self.keyed(session_id).verify_slice(&presented).is_ok()
    }
}
