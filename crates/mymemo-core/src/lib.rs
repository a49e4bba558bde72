//! Core types and pure logic for the MyMemo (マイメモ) edge functions.
//!
//! This crate provides:
//! - The static quotation table and id resolution with random fallback
//! - Character-count text wrapping for fixed-canvas SVG layout
//! - XML entity escaping for hand-built SVG markup

mod quote;
mod text;

pub use quote::{Quote, QuoteStore, QUOTES};
pub use text::{escape_xml, wrap_text};
