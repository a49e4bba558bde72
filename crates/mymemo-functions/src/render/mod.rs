//! Markup generation for the quote-card endpoints.
//!
//! Two independent pure renderers over a [`Quote`](mymemo_core::Quote):
//!
//! - [`page::share_page`] — HTML share page with Open Graph / Twitter Card
//!   meta tags, built with [maud](https://maud.lambda.xyz/) so every dynamic
//!   value is entity-escaped at interpolation time.
//! - [`card::quote_svg`] — 1200×630 SVG quote card, built as a string with
//!   explicit XML escaping for all interpolated content.
//!
//! Both are total functions of their inputs; no I/O, no randomness.

pub mod card;
pub mod page;

/// Canvas width, the standard Open Graph image width.
pub const CANVAS_WIDTH: u32 = 1200;

/// Canvas height, the standard Open Graph image height.
pub const CANVAS_HEIGHT: u32 = 630;

/// Site name shown in OG tags, page titles, and the card branding.
pub const SITE_NAME: &str = "マイメモ";
