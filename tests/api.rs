//
//  roblox-cloud
//  tests/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::time::{Duration, Instant};

use mockito::Matcher;
use roblox_cloud::api::common::ResponseCode;
use roblox_cloud::config::{ClientConfig, Endpoints};
use roblox_cloud::{ApiError, RobloxClient};

const GROUP_7: &str = r#"{
    "path": "groups/7", "id": "7", "displayName": "Fans",
    "description": "", "owner": "users/1", "memberCount": 3,
    "publicEntryAllowed": true, "locked": false, "verified": false,
    "createTime": "2010-01-01T00:00:00Z"
}"#;

fn config_for(server: &mockito::ServerGuard) -> ClientConfig {
    ClientConfig {
        endpoints: Endpoints::with_base(&server.url()),
        ..ClientConfig::default()
    }
}

fn client_for(server: &mockito::ServerGuard) -> RobloxClient {
    RobloxClient::with_config("abc123", config_for(server)).unwrap()
}

/// Mocks that fail the test if any request reaches the server.
async fn forbid_requests(server: &mut mockito::ServerGuard) -> Vec<mockito::Mock> {
    let mut mocks = Vec::new();
    for method in ["GET", "POST", "PATCH", "DELETE"] {
        mocks.push(
            server
                .mock(method, Matcher::Any)
                .expect(0)
                .create_async()
                .await,
        );
    }
    mocks
}

#[tokio::test]
async fn test_group_lookup_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/cloud/v2/groups/7")
        .match_header("x-api-key", "abc123")
        .match_header("user-agent", roblox_cloud::CLIENT_IDENTIFIER)
        .with_status(200)
        .with_body(GROUP_7)
        .expect(1)
        .create_async()
        .await;

    let group = client_for(&server).group_by_id("7").await.unwrap();

    mock.assert_async().await;
    assert_eq!(group.id, "7");
    assert_eq!(group.name, "Fans");
    assert_eq!(group.owner_id.as_deref(), Some("1"));
    assert_eq!(group.member_count, 3);
    assert!(group.public_entry_allowed);
}

#[tokio::test]
async fn test_membership_walk_is_paced() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("GET", "/cloud/v2/groups/7/memberships")
        .match_query(Matcher::Regex("^maxPageSize=100$".into()))
        .with_status(200)
        .with_body(
            r#"{"groupMemberships": [
                {"path": "groups/7/memberships/a", "user": "users/1", "role": "groups/7/roles/255"},
                {"path": "groups/7/memberships/b", "user": "users/2", "role": "groups/7/roles/1"}
            ], "nextPageToken": "tok"}"#,
        )
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/cloud/v2/groups/7/memberships")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("maxPageSize".into(), "100".into()),
            Matcher::UrlEncoded("pageToken".into(), "tok".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"groupMemberships": [
                {"path": "groups/7/memberships/c", "user": "users/3", "role": "groups/7/roles/1"}
            ], "nextPageToken": ""}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.config().page_interval(), Duration::from_millis(200));

    let started = Instant::now();
    let ids = client.membership_user_ids("7", None).await.unwrap();
    let elapsed = started.elapsed();

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert!(elapsed >= Duration::from_millis(400), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn test_members_walk_resolves_across_pages() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/cloud/v2/groups/7")
        .with_status(200)
        .with_body(GROUP_7)
        .create_async()
        .await;
    let first = server
        .mock("GET", "/cloud/v2/groups/7/memberships")
        .match_query(Matcher::Regex("^maxPageSize=100$".into()))
        .with_status(200)
        .with_body(
            r#"{"groupMemberships": [
                {"path": "groups/7/memberships/a", "user": "users/1", "role": "groups/7/roles/255"},
                {"path": "groups/7/memberships/b", "user": "users/2", "role": "groups/7/roles/1"}
            ], "nextPageToken": "tok"}"#,
        )
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/cloud/v2/groups/7/memberships")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("maxPageSize".into(), "100".into()),
            Matcher::UrlEncoded("pageToken".into(), "tok".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"groupMemberships": [
                {"path": "groups/7/memberships/c", "user": "users/3", "role": "groups/7/roles/1"}
            ], "nextPageToken": ""}"#,
        )
        .expect(1)
        .create_async()
        .await;
    server
        .mock("GET", "/cloud/v2/users/1")
        .with_status(200)
        .with_body(r#"{"id": "1", "name": "owner"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/cloud/v2/users/2")
        .with_status(404)
        .with_body("{}")
        .create_async()
        .await;
    server
        .mock("GET", "/cloud/v2/users/3")
        .with_status(200)
        .with_body(r#"{"id": 3, "name": "member"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/cloud/v2/groups/7/roles/255")
        .with_status(200)
        .with_body(r#"{"id": "255", "displayName": "Owner", "rank": 255}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/cloud/v2/groups/7/roles/1")
        .with_status(200)
        .with_body(r#"{"id": "1", "displayName": "Member", "rank": 1}"#)
        .create_async()
        .await;

    let group = client_for(&server).group_by_id("7").await.unwrap();

    let started = Instant::now();
    let members = group.members().await.unwrap();
    let elapsed = started.elapsed();

    first.assert_async().await;
    second.assert_async().await;
    let resolved: Vec<(&str, &str)> = members
        .iter()
        .map(|m| (m.account.name.as_str(), m.role.name.as_str()))
        .collect();
    assert_eq!(resolved, vec![("owner", "Owner"), ("member", "Member")]);
    assert_eq!(members[1].account.id, "3");
    assert_eq!(members[1].group_id, "7");
    assert!(elapsed >= Duration::from_millis(400), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn test_validation_makes_no_requests() {
    let mut server = mockito::Server::new_async().await;
    let mocks = forbid_requests(&mut server).await;
    let client = client_for(&server);

    assert!(matches!(client.user_by_id("").await, Err(ApiError::NoUserId)));
    assert!(matches!(client.user_by_username("").await, Err(ApiError::NoUsername)));
    assert!(matches!(client.group_by_id("").await, Err(ApiError::NoGroupId)));
    assert!(matches!(client.group_by_name("").await, Err(ApiError::NoGroupname)));
    assert!(matches!(
        client.set_member_role("7", "", "1").await,
        Err(ApiError::NoUserId)
    ));
    assert!(matches!(
        client.set_member_role("7", "1", "").await,
        Err(ApiError::NoRoleId)
    ));
    assert!(matches!(
        client.remove_group_member("", "1").await,
        Err(ApiError::NoGroupId)
    ));
    assert!(matches!(
        client.accept_join_request("7", "").await,
        Err(ApiError::NoUserId)
    ));

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_empty_api_key_is_rejected() {
    assert!(matches!(RobloxClient::new(""), Err(ApiError::NoApiKey)));
}

#[tokio::test]
async fn test_group_name_mismatch_skips_fetch() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/groups/search/lookup")
        .match_query(Matcher::UrlEncoded("groupName".into(), "Fans".into()))
        .with_status(200)
        .with_body(r#"{"data": [{"id": 9, "name": "Fans Club"}, {"id": 7, "name": "Fans"}]}"#)
        .create_async()
        .await;
    let fetch = server
        .mock("GET", Matcher::Regex("^/cloud/v2/groups/".into()))
        .expect(0)
        .create_async()
        .await;

    let result = client_for(&server).group_by_name("Fans").await;

    assert!(matches!(result, Err(ApiError::InvalidGroupname)));
    fetch.assert_async().await;
}

#[tokio::test]
async fn test_username_lookup_fetches_account() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/usernames/users")
        .match_body(Matcher::PartialJsonString(
            r#"{"usernames": ["builderman"]}"#.into(),
        ))
        .with_status(200)
        .with_body(r#"{"data": [{"requestedUsername": "builderman", "id": 156, "name": "builderman", "displayName": "Builderman"}]}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/cloud/v2/users/156")
        .with_status(200)
        .with_body(r#"{"path": "users/156", "id": "156", "name": "builderman", "displayName": "Builderman", "premium": true}"#)
        .create_async()
        .await;

    let account = client_for(&server).user_by_username("builderman").await.unwrap();

    assert_eq!(account.id, "156");
    assert_eq!(account.name, "builderman");
    assert!(account.premium);
}

#[tokio::test]
async fn test_error_message_carries_status_and_description() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/cloud/v2/groups/404")
        .with_status(404)
        .with_body(r#"{"code": "NOT_FOUND"}"#)
        .create_async()
        .await;

    let err = client_for(&server).group_by_id("404").await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Status {
            status: 404,
            code: ResponseCode::NotFound,
            ..
        }
    ));
    let message = err.to_string();
    assert!(message.contains("404"), "{}", message);
    assert!(message.contains("resource not found"), "{}", message);
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_undocumented_status_is_generic() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/cloud/v2/users/1")
        .with_status(418)
        .with_body("teapot")
        .create_async()
        .await;

    let err = client_for(&server).user_by_id("1").await.unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 418, .. }));
    assert!(err.to_string().contains("teapot"));
}

#[tokio::test]
async fn test_identifiers_decode_from_numbers_and_strings() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/cloud/v2/groups/7")
        .with_status(200)
        .with_body(r#"{"id": 7, "displayName": "Fans", "owner": "users/1", "memberCount": "3"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/cloud/v2/groups/8")
        .with_status(200)
        .with_body(r#"{"id": "8", "displayName": "Fans", "owner": "users/1", "memberCount": 3}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let numeric = client.group_by_id("7").await.unwrap();
    let textual = client.group_by_id("8").await.unwrap();

    assert_eq!(numeric.id, "7");
    assert_eq!(textual.id, "8");
    assert_eq!(numeric.member_count, textual.member_count);
    assert_eq!(numeric.owner_id, textual.owner_id);
}
