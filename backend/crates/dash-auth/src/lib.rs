pub mod claims;
pub mod error;
pub mod identity_resolver;
pub mod jwt_validator;
pub mod verification_key;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use identity_resolver::{AUTHORIZATION_HEADER, IdentityResolver, USER_ID_HEADER};
pub use jwt_validator::JwtValidator;
pub use verification_key::VerificationKey;
