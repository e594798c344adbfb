use rand::Rng;
use ring::pbkdf2;
use std::num::NonZeroU32;

const PBKDF2_ALGORITHM: pbkdf2::Algorithm = pbkdf2::PBKDF2_HMAC_SHA256;
const PBKDF2_ITERATIONS: NonZeroU32 = NonZeroU32::new(100_000).unwrap();

pub const SALT_LEN: usize = 16;
pub const CREDENTIAL_LEN: usize = 32;

/// Salted one-way credential. Only the salt and the derived hash are kept;
/// the cleartext never outlives the request that carried it.
#[derive(Debug, Clone)]
pub struct StoredPassword {
    pub salt: [u8; SALT_LEN],
    pub hash: [u8; CREDENTIAL_LEN],
}

/// Derives a credential from `password` with a fresh random salt.
pub fn hash_password(password: &str) -> StoredPassword {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill(&mut salt[..]);

    let mut hash = [0u8; CREDENTIAL_LEN];
    pbkdf2::derive(
        PBKDF2_ALGORITHM,
        PBKDF2_ITERATIONS,
        &salt,
        password.as_bytes(),
        &mut hash,
    );

    StoredPassword { salt, hash }
}

/// Checks a sign-in attempt against the stored credential.
pub fn verify_password(stored: &StoredPassword, candidate: &str) -> bool {
    pbkdf2::verify(
        PBKDF2_ALGORITHM,
        PBKDF2_ITERATIONS,
        &stored.salt,
        candidate.as_bytes(),
        &stored.hash,
    )
    .is_ok()
}
