use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

/// Salted digest with the default cost. The digest string embeds salt and
/// parameters, so nothing else has to be stored alongside it.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Ok(false) is a mismatch, which callers treat as a normal outcome; Err
/// only means the stored digest itself could not be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_succeeds() {
        let digest = hash_password("hunter2").expect("hashing failed");
        assert_eq!(verify_password("hunter2", &digest).unwrap(), true);
    }

    #[test]
    fn wrong_password_is_a_mismatch_not_an_error() {
        let digest = hash_password("hunter2").expect("hashing failed");
        assert_eq!(verify_password("hunter3", &digest).unwrap(), false);
    }

    #[test]
    fn same_password_hashes_differently_but_both_verify() {
        let first = hash_password("hunter2").expect("hashing failed");
        let second = hash_password("hunter2").expect("hashing failed");
        assert_ne!(first, second);
        assert!(verify_password("hunter2", &first).unwrap());
        assert!(verify_password("hunter2", &second).unwrap());
    }

    #[test]
    fn garbage_digest_is_an_error() {
        assert!(verify_password("hunter2", "not-a-phc-string").is_err());
    }

    #[test]
    fn empty_password_round_trips() {
        let digest = hash_password("").expect("hashing failed");
        assert!(verify_password("", &digest).unwrap());
        assert!(!verify_password("x", &digest).unwrap());
    }
}
