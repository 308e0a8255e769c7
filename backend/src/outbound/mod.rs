//! Outbound adapters implementing domain ports for external services.
//!
//! Adapters are thin translators between wire payloads and domain types.
//! They contain no fallback policy; that lives in the domain loader.

pub mod randomuser;
