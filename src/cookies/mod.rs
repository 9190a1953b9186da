//! The cookie model, its parser and its serializer.
//!
//! | Responsibility | Module | Entry point |
//! |----------------|--------|-------------|
//! | Reserved names | [`directive`] | [`Directive`](directive::Directive) |
//! | Model | [`biscuit`] | [`Biscuit`](biscuit::Biscuit) |
//! | Parsing | [`parser`] | [`parse`](parser::parse), [`BiscuitParser`](parser::BiscuitParser) |
//! | Rendering | [`serializer`] | [`Biscuit::render`](biscuit::Biscuit::render) |
//! | Time conversion | [`timefmt`] | [`EXPIRES_FORMAT`](timefmt::EXPIRES_FORMAT) |
//!
//! Data flows one way: raw string → [`parse`](parser::parse) → `Biscuit` →
//! accessor mutations → [`render`](biscuit::Biscuit::render) → string.

pub mod biscuit;
pub mod directive;
pub mod parser;
pub mod serializer;
pub mod timefmt;
