//! Base types and error handling.
//!
//! - [`CookieError`](cookieerror::CookieError): every failure the cookie model can report

pub mod cookieerror;

#[cfg(test)]
mod tests;
