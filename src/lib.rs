//! In-memory lending tracker for a library and ordering system for a café.
//!
//! Both domains share the same plumbing: the `core` types, the `parties`
//! person model and the `gateway` event publishers.

pub mod cafe;
pub mod core;
pub mod gateway;
pub mod library;
pub mod parties;
pub mod utils;
