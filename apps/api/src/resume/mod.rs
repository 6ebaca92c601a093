//! The single in-memory résumé: storage handle, advisory validation, and HTTP handlers.

pub mod handlers;
pub mod store;
pub mod validation;
