pub mod censor;
pub mod password;
