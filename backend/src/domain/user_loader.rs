//! User loading with mock fallback.
//!
//! The loader performs exactly one fetch through its [`UserSource`]. Any
//! failure is absorbed: the result carries generated mock users and
//! `fallback_used = true` instead of an error.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mock_users::{DEFAULT_MOCK_USER_COUNT, generate_mock_users};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use super::UserRecord;
use super::ports::UserSource;

/// Records plus provenance for one load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoadResult {
    /// Live or mock records, in upstream order.
    pub users: Vec<UserRecord>,
    /// `true` when the live fetch failed and mock data was substituted.
    pub fallback_used: bool,
    /// Endpoint the fetch was attempted against.
    #[schema(example = "https://randomuser.me/api/?results=500")]
    pub source_url: String,
    /// Instant the fetch attempt resolved.
    pub fetched_at: DateTime<Utc>,
}

/// Output of [`UserLoader::load`], shaped by the `want_meta` flag.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    /// Records with provenance.
    WithMeta(LoadResult),
    /// Records only.
    UsersOnly(Vec<UserRecord>),
}

impl Loaded {
    /// Borrow the records regardless of shape.
    pub fn users(&self) -> &[UserRecord] {
        match self {
            Self::WithMeta(result) => &result.users,
            Self::UsersOnly(users) => users,
        }
    }
}

/// Loads one batch of users, substituting mock users on any failure.
pub struct UserLoader<S: ?Sized> {
    source: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S: ?Sized> Clone for UserLoader<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S> UserLoader<S>
where
    S: UserSource + ?Sized,
{
    /// Create a loader that substitutes 50 mock users on fallback.
    pub fn new(source: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }

    /// Load users, returning provenance only when `want_meta` is set.
    pub async fn load(&self, want_meta: bool) -> Loaded {
        let result = self.load_with_meta().await;
        if want_meta {
            Loaded::WithMeta(result)
        } else {
            Loaded::UsersOnly(result.users)
        }
    }

    /// Load users and drop the provenance.
    pub async fn load_users(&self) -> Vec<UserRecord> {
        self.load_with_meta().await.users
    }

    /// Load users together with fallback flag, source and fetch time.
    ///
    /// `fetched_at` is read once, right after the fetch attempt resolves, and
    /// also anchors the registration dates of any mock users.
    pub async fn load_with_meta(&self) -> LoadResult {
        let source_url = self.source.source_url();
        let outcome = self.source.fetch_users().await;
        let fetched_at = self.clock.utc();

        let (users, fallback_used) = match outcome {
            Ok(users) => {
                info!(
                    source_url = %source_url,
                    user_count = users.len(),
                    "loaded live users"
                );
                (users, false)
            }
            Err(error) => {
                warn!(
                    source_url = %source_url,
                    %error,
                    fallback_count = DEFAULT_MOCK_USER_COUNT,
                    "user source failed; substituting mock users"
                );
                let users = generate_mock_users(DEFAULT_MOCK_USER_COUNT, fetched_at)
                    .into_iter()
                    .map(UserRecord::from)
                    .collect();
                (users, true)
            }
        };

        LoadResult {
            users,
            fallback_used,
            source_url,
            fetched_at,
        }
    }
}
