//! Middleware

pub mod request_log;
