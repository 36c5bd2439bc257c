//! Data Transfer Objects for the control-plane API
//!
//! Wire-format request and response bodies, kept separate from the domain
//! types so the HTTP surface can evolve without touching them.

pub mod jobs;
