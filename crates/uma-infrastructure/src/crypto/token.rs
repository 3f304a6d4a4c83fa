//! HS256 token codec
//!
//! Tokens are compact JWS strings over the [`Claims`] set. The signature is
//! always checked before the claims are trusted; expiry is then checked
//! against the caller's `now`, inclusive of the `exp` second.
//!
//! A token is `Malformed` only when it does not have three segments or its
//! header or claims segment does not decode. Any damage confined to the
//! signature segment, including text that is not valid base64url, is
//! reported as `SignatureInvalid`.

use std::collections::HashSet;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, decode_header, encode,
};
use uma_domain::constants::MIN_SECRET_LENGTH;
use uma_domain::entities::Role;
use uma_domain::error::{Error, Result, TokenError};
use uma_domain::ports::TokenCodec;
use uma_domain::value_objects::{Claims, IssuedToken};

/// [`TokenCodec`] signing with HMAC-SHA256 over a shared secret
#[derive(Clone)]
pub struct JwtTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl JwtTokenCodec {
    /// Build a codec for `secret` issuing tokens valid for `ttl_secs`
    ///
    /// Fails with `Error::Configuration` for a secret shorter than
    /// [`MIN_SECRET_LENGTH`] bytes or a zero TTL.
    pub fn new(secret: &[u8], ttl_secs: u64) -> Result<Self> {
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(Error::configuration(format!(
                "token signing secret must be at least {MIN_SECRET_LENGTH} bytes long"
            )));
        }
        if ttl_secs == 0 {
            return Err(Error::configuration("token TTL cannot be 0"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is evaluated against the injected clock in `verify`
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims =
            ["exp", "sub", "iat"].into_iter().map(String::from).collect::<HashSet<_>>();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs,
        })
    }
}

/// Check the compact layout before any signature work
fn check_segments(token: &str) -> std::result::Result<(), TokenError> {
    let mut segments = token.split('.');
    let (Some(_), Some(claims), Some(signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    decode_header(token).map_err(|_| TokenError::Malformed)?;
    let payload = URL_SAFE_NO_PAD
        .decode(claims)
        .map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice::<serde_json::Map<String, serde_json::Value>>(&payload)
        .map_err(|_| TokenError::Malformed)?;

    URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(|_| TokenError::SignatureInvalid)?;
    Ok(())
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, subject: &str, role: Role, now: u64) -> Result<IssuedToken> {
        let claims = Claims::new(subject, role, now, self.ttl_secs);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| Error::infrastructure_with_source("Token signing failed", e))?;
        Ok(IssuedToken::new(token, claims))
    }

    fn verify(&self, token: &str, now: u64) -> std::result::Result<Claims, TokenError> {
        check_segments(token)?;
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| match err.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::Malformed,
            })?
            .claims;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}
