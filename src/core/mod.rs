pub mod backup;
pub mod install;
pub mod password;
pub mod reset;
pub mod service;
pub mod users;
