//! Small pure helpers shared across services.

pub mod date;
pub mod password;
pub mod qr;
pub mod validate;
