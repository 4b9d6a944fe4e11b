pub mod question;
pub mod resume;
pub mod session;
