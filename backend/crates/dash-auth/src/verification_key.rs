use jsonwebtoken::Algorithm;

/// Key material the identity provider's tokens are checked against
#[derive(Debug, Clone)]
pub enum VerificationKey {
    /// Shared HMAC secret (HS256)
    SharedSecret(Vec<u8>),
    /// PEM-encoded RSA public key (RS256)
    RsaPublicKeyPem(String),
}

impl VerificationKey {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::SharedSecret(_) => Algorithm::HS256,
            Self::RsaPublicKeyPem(_) => Algorithm::RS256,
        }
    }
}
