//! Simple Chess web server
//!
//! Delivers the built UI bundle over HTTP. All routing beyond file lookup is
//! client-side, so every unmatched path falls back to the single-page
//! document.

pub mod spa;
