use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload used for authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,   // user ID
    pub jti: Uuid,   // token ID, looked up in the revocation list
    pub iat: usize,  // issued at (unix timestamp)
    pub exp: usize,  // expires at (unix timestamp)
    pub iss: String, // issuer
    pub aud: String, // audience
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_serde_roundtrip() {
        let claims = Claims {
            sub: Uuid::new_v4(),
            jti: Uuid::new_v4(),
            iat: 1_700_000_000,
            exp: 1_700_086_400,
            iss: "taskpad".into(),
            aud: "taskpad-users".into(),
        };
        let json = serde_json::to_string(&claims).unwrap();
        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sub, claims.sub);
        assert_eq!(back.jti, claims.jti);
        assert_eq!(back.exp, claims.exp);
    }
}
