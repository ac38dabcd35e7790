//! Password digests stored in `o_users.password`.
//!
//! The CasaOS user-service compares logins against a lowercase hex MD5 of the
//! plaintext, so that is the format written here. MD5 is fast and unsalted:
//! anyone who can read `user.db` or its backup can brute-force these digests.

use std::sync::Once;

pub trait PasswordHasher {
    fn hash(&self, plaintext: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Md5Hasher;

static WEAK_HASH_WARNING: Once = Once::new();

impl PasswordHasher for Md5Hasher {
    fn hash(&self, plaintext: &str) -> String {
        WEAK_HASH_WARNING.call_once(|| {
            tracing::warn!(
                "storing password as unsalted MD5 (the only format the CasaOS user-service verifies)"
            );
        });
        format!("{:x}", md5::compute(plaintext.as_bytes()))
    }
}
