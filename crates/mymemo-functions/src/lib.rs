//! MyMemo (マイメモ) edge functions as a single HTTP service.
//!
//! This crate bundles the note-taking app's serverless functions into one
//! axum server, designed to sit behind a CDN:
//!
//! - **Quote cards**: `GET /share-quote` renders an HTML page with Open
//!   Graph / Twitter Card tags for a rotating set of philosopher quotes;
//!   `GET /generate-quote-image` renders the matching 1200×630 SVG card.
//!   Both are pure functions of the (optional) `id` query parameter over
//!   the static table in `mymemo-core`; invalid ids degrade to a random
//!   quote rather than failing.
//! - **AI proxies**: `POST /ai-assistant`, `/ai-search`, and
//!   `/ai-suggest-tags` forward user content to the configured AI provider
//!   (OpenAI or Gemini) with Japanese prompt templates, relay the answer,
//!   and record token usage in the backend. Auth is delegated to the
//!   hosted backend via a bearer-token middleware.
//!
//! # Security
//!
//! - All HTML is generated with maud, which entity-escapes every dynamic
//!   value; SVG interpolation goes through an explicit XML escaper.
//! - Provider rate limits pass through as 429; no retries.

pub mod auth;
pub mod backend;
pub mod clients;
pub mod config;
pub mod error;
pub mod prompts;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::FunctionError;
pub use routes::router;
pub use state::AppState;
