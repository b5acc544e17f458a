//
//  roblox-cloud
//  api/resolver.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Name Resolution Across API Generations
//!
//! Open Cloud fetches users and groups by id only. Looking one up by name is
//! a two step process:
//!
//! 1. Search the legacy API for the name, yielding lightweight candidates
//! 2. Fetch the canonical record from the cloud API with the candidate's id
//!
//! The legacy name is then written over the canonical record's name, since
//! the legacy lookup is the authority for the name the caller asked about.
//!
//! ## Matching
//!
//! Only the first candidate is compared against the requested key, and the
//! comparison is case-sensitive. A key that appears later in a multi-candidate
//! search result is reported as invalid.
//!
//! ## Implementations
//!
//! | Resolver | Search | Fetch |
//! |----------|--------|-------|
//! | [`AccountByName`] | `POST users.roblox.com/v1/usernames/users` | `users/{id}` |
//! | [`GroupByName`] | `GET groups.roblox.com/v1/groups/search/lookup` | `groups/{id}` |

use async_trait::async_trait;
use tracing::debug;

use super::client::RobloxClient;
use super::cloud::{Account, Group};
use super::common::ApiError;

/// A legacy search hit: just enough to fetch the canonical record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyCandidate {
    pub id: String,
    pub name: String,
}

/// One "by name" lookup flow.
#[async_trait]
pub trait KeyResolver: Send + Sync {
    /// The canonical record produced by the flow.
    type Record: Send;

    /// Error returned for an empty key.
    fn empty_key_error(&self) -> ApiError;

    /// Error returned when no candidate matches the key.
    fn invalid_key_error(&self) -> ApiError;

    /// Searches the legacy API for `key`.
    async fn search(&self, client: &RobloxClient, key: &str) -> Result<Vec<LegacyCandidate>, ApiError>;

    /// Fetches the canonical record for a candidate id.
    async fn fetch(&self, client: &RobloxClient, id: &str) -> Result<Self::Record, ApiError>;

    /// Writes the candidate's name onto the canonical record.
    fn overlay(&self, record: &mut Self::Record, candidate: LegacyCandidate);
}

/// Resolves `key` to a canonical record through `resolver`.
///
/// # Errors
///
/// - the resolver's empty-key error before any request when `key` is empty
/// - the resolver's invalid-key error when the first candidate's name is not
///   exactly `key` (or there are no candidates); the canonical fetch is not
///   attempted
/// - any transport or decode error from either request
pub async fn resolve_by_key<R: KeyResolver>(
    client: &RobloxClient,
    resolver: &R,
    key: &str,
) -> Result<R::Record, ApiError> {
    if key.is_empty() {
        return Err(resolver.empty_key_error());
    }

    let candidate = resolver
        .search(client, key)
        .await?
        .into_iter()
        .next()
        .filter(|candidate| candidate.name == key)
        .ok_or_else(|| resolver.invalid_key_error())?;
    debug!(key, id = %candidate.id, "Resolved name");

    let mut record = resolver.fetch(client, &candidate.id).await?;
    resolver.overlay(&mut record, candidate);
    Ok(record)
}

/// Resolves a username to an [`Account`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountByName;

#[async_trait]
impl KeyResolver for AccountByName {
    type Record = Account;

    fn empty_key_error(&self) -> ApiError {
        ApiError::NoUsername
    }

    fn invalid_key_error(&self) -> ApiError {
        ApiError::InvalidUsername
    }

    async fn search(&self, client: &RobloxClient, key: &str) -> Result<Vec<LegacyCandidate>, ApiError> {
        let users = client.lookup_usernames(&[key]).await?;
        Ok(users
            .into_iter()
            .map(|user| LegacyCandidate {
                id: user.id,
                name: user.name,
            })
            .collect())
    }

    async fn fetch(&self, client: &RobloxClient, id: &str) -> Result<Account, ApiError> {
        client.user_by_id(id).await
    }

    fn overlay(&self, record: &mut Account, candidate: LegacyCandidate) {
        record.name = candidate.name;
    }
}

/// Resolves a group name to a [`Group`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupByName;

#[async_trait]
impl KeyResolver for GroupByName {
    type Record = Group;

    fn empty_key_error(&self) -> ApiError {
        ApiError::NoGroupname
    }

    fn invalid_key_error(&self) -> ApiError {
        ApiError::InvalidGroupname
    }

    async fn search(&self, client: &RobloxClient, key: &str) -> Result<Vec<LegacyCandidate>, ApiError> {
        let groups = client.search_groups(key).await?;
        Ok(groups
            .into_iter()
            .map(|group| LegacyCandidate {
                id: group.id,
                name: group.name,
            })
            .collect())
    }

    async fn fetch(&self, client: &RobloxClient, id: &str) -> Result<Group, ApiError> {
        client.group_by_id(id).await
    }

    fn overlay(&self, record: &mut Group, candidate: LegacyCandidate) {
        record.name = candidate.name;
    }
}
