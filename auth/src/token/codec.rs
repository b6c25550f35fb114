use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Stateless access-token codec.
///
/// Tokens are HS256-signed JWTs carrying [`Claims`]. There is no server-side
/// session: a token stays valid until its `exp`, and expiry is the only way it
/// stops being accepted.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec bound to a signing secret.
    ///
    /// # Arguments
    /// * `secret` - HMAC key used for both signing and verification
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Load it from configuration, never from source code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token for `subject` valid from now for `ttl`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(
        &self,
        subject: impl ToString,
        role: impl ToString,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.issue_at(subject, role, ttl, Utc::now())
    }

    /// Issue a token whose validity window starts at `issued_at`.
    pub fn issue_at(
        &self,
        subject: impl ToString,
        role: impl ToString,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        self.encode(&Claims::new(subject, role, issued_at, ttl))
    }

    /// Sign an already built claim set.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and verify a token against the current time.
    ///
    /// # Errors
    /// * `Malformed` - Not a well-formed token or unexpected payload shape
    /// * `SignatureInvalid` - Payload and signature do not match
    /// * `Expired` - Current time is past `exp`
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_at(token, Utc::now())
    }

    /// Decode and verify a token as if the current time were `now`.
    ///
    /// The signature is always checked before expiry, so a tampered token is
    /// reported as `SignatureInvalid` even when its `exp` is in the past.
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the caller supplied clock.
        validation.validate_exp = false;

        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::SignatureInvalid
                }
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 8, 30, 0).unwrap()
    }

    fn replace_char(segment: &str, index: usize) -> String {
        segment
            .char_indices()
            .map(|(i, c)| {
                if i != index {
                    c
                } else if c == 'A' {
                    'B'
                } else {
                    'A'
                }
            })
            .collect()
    }

    #[test]
    fn test_issue_and_decode() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue("user123", "admin", Duration::hours(24))
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = codec.decode(&token).expect("Failed to decode token");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_accepted_just_before_expiry_rejected_just_after() {
        let codec = TokenCodec::new(SECRET);
        let ttl = Duration::hours(24);

        let token = codec
            .issue_at("user123", "learner", ttl, issued_at())
            .expect("Failed to issue token");

        let before = issued_at() + ttl - Duration::seconds(1);
        let after = issued_at() + ttl + Duration::seconds(1);

        assert!(codec.decode_at(&token, before).is_ok());
        assert_eq!(codec.decode_at(&token, after), Err(TokenError::Expired));
    }

    #[test]
    fn test_decode_past_token_against_wall_clock() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue_at("user123", "learner", Duration::hours(1), issued_at())
            .expect("Failed to issue token");

        assert_eq!(codec.decode(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_decode_malformed_token() {
        let codec = TokenCodec::new(SECRET);

        for token in ["", "invalid", "invalid.token.here", "a.b"] {
            let result = codec.decode(token);
            assert!(
                matches!(result, Err(TokenError::Malformed(_))),
                "expected malformed for {token:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let issuer = TokenCodec::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = TokenCodec::new(b"secret2_at_least_32_bytes_long_key!");

        let token = issuer
            .issue("user123", "admin", Duration::hours(1))
            .expect("Failed to issue token");

        assert_eq!(verifier.decode(&token), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_any_payload_mutation_invalidates_signature() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue("user123", "learner", Duration::hours(1))
            .expect("Failed to issue token");

        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);

        for index in 0..parts[1].len() {
            let tampered = format!(
                "{}.{}.{}",
                parts[0],
                replace_char(parts[1], index),
                parts[2]
            );
            assert_eq!(
                codec.decode(&tampered),
                Err(TokenError::SignatureInvalid),
                "payload byte {index} mutation was not detected"
            );
        }
    }

    #[test]
    fn test_any_signature_mutation_invalidates_signature() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue("user123", "learner", Duration::hours(1))
            .expect("Failed to issue token");

        let (message, signature) = token.rsplit_once('.').unwrap();

        for index in 0..signature.len() {
            let tampered = format!("{}.{}", message, replace_char(signature, index));
            assert_eq!(
                codec.decode(&tampered),
                Err(TokenError::SignatureInvalid),
                "signature byte {index} mutation was not detected"
            );
        }
    }

    #[test]
    fn test_elevated_role_with_original_signature_is_rejected() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue("user123", "learner", Duration::hours(1))
            .expect("Failed to issue token");
        let signature = token.rsplit('.').next().unwrap().to_string();

        let forger = TokenCodec::new(b"attacker_controlled_secret_32_bytes!");
        let forged = forger
            .encode(&Claims::new("user123", "admin", Utc::now(), Duration::hours(1)))
            .expect("Failed to encode forged token");
        let (forged_message, _) = forged.rsplit_once('.').unwrap();
        let spliced = format!("{}.{}", forged_message, signature);

        assert_eq!(codec.decode(&spliced), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_payload_is_opaque_but_well_formed_json() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue_at("user123", "admin", Duration::hours(24), issued_at())
            .expect("Failed to issue token");

        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        let data = jsonwebtoken::decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(b"unused"),
            &validation,
        )
        .expect("Failed to inspect token");

        assert_eq!(data.claims["sub"], "user123");
        assert_eq!(data.claims["role"], "admin");
        assert_eq!(data.claims["iat"], issued_at().timestamp());
    }
}
