//! Mock user records for demonstration fallbacks.
//!
//! This crate produces believable user records from nothing but their index in
//! the batch. It is designed to be independent of backend domain types so the
//! backend can map [`MockUser`] into its own record at the point of use.
//!
//! # Overview
//!
//! Every field is derived from the index and a reference instant, except the
//! identifier, which carries a random base-36 suffix:
//!
//! - Gender alternates by index parity and drives the name and portrait path
//! - Country rotates through a fixed three-way cycle
//! - City alternates by index parity
//! - Registration date steps back one day per index
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use mock_users::{DEFAULT_MOCK_USER_COUNT, generate_mock_users};
//!
//! let users = generate_mock_users(DEFAULT_MOCK_USER_COUNT, Utc::now());
//!
//! assert_eq!(users.len(), 50);
//! assert_eq!(users.first().map(|u| u.name.first.as_str()), Some("John0"));
//! ```

mod generator;
mod user;

pub use generator::{
    DEFAULT_MOCK_USER_COUNT, ID_SUFFIX_LEN, generate_mock_users, generate_mock_users_with_rng,
};
pub use user::{Gender, MockLocation, MockName, MockUser};
