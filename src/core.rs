pub mod cafe;
pub mod domain;
pub mod events;
pub mod library;
