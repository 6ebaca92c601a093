//! Photo uploads: multipart intake and the on-disk store behind `/uploads`.

pub mod handlers;
pub mod storage;
