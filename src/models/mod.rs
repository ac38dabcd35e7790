pub mod user;

pub use user::{ADMIN_ROLE, UserRecord};
