//! # biscuit
//!
//! An HTTP cookie model that keeps application data separate from cookie
//! directives.
//!
//! A [`Biscuit`] carries any number of `key=value` data pairs plus the six
//! reserved directives (`domain`, `path`, `expires`, `max-age`, `secure`,
//! `httponly`). Strings are turned into a `Biscuit` by [`parse`] and back
//! into `Cookie`/`Set-Cookie` header text by [`Biscuit::render`].
//!
//! ## Quick Start
//!
//! ```rust
//! use biscuit::Biscuit;
//!
//! let mut cookie = biscuit::parse(
//!     "username=John Doe; password=notverysecure; path=/; secure",
//! );
//! assert_eq!(cookie.get_key("username"), "John Doe");
//! assert!(cookie.is_secure());
//!
//! cookie.set_http_only(true);
//! cookie.set_key("password", "hunter2", true).unwrap();
//! // Directive names cannot be used as data keys.
//! assert!(cookie.set_key("Path", "/admin", true).is_err());
//!
//! assert_eq!(
//!     cookie.render(true),
//!     "Set-Cookie: username=John Doe; password=hunter2; path=/; secure; HttpOnly"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`cookies`] - Cookie model, parser, serializer and time helpers
//!
//! Parsing is permissive: malformed tokens are skipped. Use
//! [`BiscuitParser::strict`] to have them reported instead.

pub mod base;
pub mod cookies;

pub use base::cookieerror::CookieError;
pub use cookies::biscuit::{Biscuit, BiscuitBuilder};
pub use cookies::directive::Directive;
pub use cookies::parser::{parse, BiscuitParser};
