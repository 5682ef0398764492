//! thesaurus — HTTP synonym service.
//!
//! The binary wires configuration, logging and the HTTP server around the
//! backend-independent pipeline in [`thesaurus_core`]. The modules here are
//! public so that integration tests can drive the router and the startup path
//! directly.
//!
//! # Architecture
//!
//! ```text
//! Config ──► startup ──► Arc<Thesaurus> ──► server (axum router)
//!               │
//!               └──► WordNet (fetch + load) or JSON lexicon
//! ```
//!
//! Collaborators are loaded eagerly before the listener binds and are never
//! mutated afterwards.

pub mod server;
pub mod startup;
