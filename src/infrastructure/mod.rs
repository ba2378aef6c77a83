//! Infrastructure layer - storage, services and process plumbing

pub mod logging;
pub mod services;
pub mod storage;
pub mod user;
