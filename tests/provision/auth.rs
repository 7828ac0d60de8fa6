// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! Authentication of the provisioning client.

use eyre::Report;
use reqwest::StatusCode;
use serde_json::json;
use tracing_test::traced_test;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::*;
use openstack_keystone_provision::client::{IdentityClientError, KeystoneClient, TenantApi};

#[tokio::test]
#[traced_test]
async fn test_token_is_reused() -> Result<(), Report> {
    let (server, client) = connect().await?;

    Mock::given(method("GET"))
        .and(path("/v3/projects"))
        .and(header("x-auth-token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"projects": []})))
        .expect(2)
        .mount(&server)
        .await;

    assert!(client.list_tenants().await?.is_empty());
    assert!(client.list_tenants().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_missing_token_header() -> Result<(), Report> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/auth/tokens"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": {}})))
        .mount(&server)
        .await;

    match KeystoneClient::connect(&get_config(&server)).await {
        Err(IdentityClientError::MissingToken) => {}
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_wrong_credentials() -> Result<(), Report> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/auth/tokens"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": {
            "code": 401,
            "message": "The request you have made requires authentication.",
            "title": "Unauthorized"
        }})))
        .mount(&server)
        .await;

    match KeystoneClient::connect(&get_config(&server)).await {
        Err(IdentityClientError::Status { status, message }) => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "The request you have made requires authentication.");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}
