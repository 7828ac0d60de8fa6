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
//! Tenant provisioning.

use eyre::Report;
use serde_json::json;
use tracing_test::traced_test;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::*;
use openstack_keystone_provision::provision::{
    OperationResult, ProvisionApi, ProvisionError, ProvisionRequest, Provisioner, dispatch,
};

async fn mount_projects(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v3/projects"))
        .and(header("x-auth-token", TOKEN))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"projects": [foo_project()]})),
        )
        .mount(server)
        .await;
}

#[tokio::test]
#[traced_test]
async fn test_tenant_exists() -> Result<(), Report> {
    let (server, client) = connect().await?;
    mount_projects(&server).await;
    let provisioner = Provisioner::new(client);

    assert!(provisioner.tenant_exists("foo").await?);
    assert!(!provisioner.tenant_exists("bar").await?);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_ensure_tenant_unchanged() -> Result<(), Report> {
    let (server, client) = connect().await?;
    mount_projects(&server).await;
    Mock::given(method("POST"))
        .and(path("/v3/projects"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let provisioner = Provisioner::new(client);

    assert_eq!(
        OperationResult::unchanged(FOO_ID),
        provisioner
            .ensure_tenant_exists("foo", Some("The foo tenant"), false)
            .await?
    );
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_ensure_tenant_created() -> Result<(), Report> {
    let (server, client) = connect().await?;
    mount_projects(&server).await;
    Mock::given(method("POST"))
        .and(path("/v3/projects"))
        .and(header("x-auth-token", TOKEN))
        .and(body_json(json!({"project": {
            "name": "bar",
            "description": "The bar tenant",
            "enabled": true,
            "domain_id": "default"
        }})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"project": {
            "id": "7c310f797aa045898e2884a975ab32ab",
            "name": "bar",
            "description": "The bar tenant",
            "enabled": true,
            "domain_id": "default"
        }})))
        .expect(1)
        .mount(&server)
        .await;
    let provisioner = Provisioner::new(client);

    assert_eq!(
        OperationResult::changed("7c310f797aa045898e2884a975ab32ab"),
        provisioner
            .ensure_tenant_exists("bar", Some("The bar tenant"), false)
            .await?
    );
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_ensure_tenant_description_updated() -> Result<(), Report> {
    let (server, client) = connect().await?;
    mount_projects(&server).await;
    Mock::given(method("PATCH"))
        .and(path(format!("/v3/projects/{FOO_ID}")))
        .and(body_json(json!({"project": {
            "description": "The foo tenant with a description change"
        }})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"project": {
            "id": FOO_ID,
            "name": "foo",
            "description": "The foo tenant with a description change",
            "enabled": true
        }})))
        .expect(1)
        .mount(&server)
        .await;
    let provisioner = Provisioner::new(client);

    assert_eq!(
        OperationResult::changed(FOO_ID),
        provisioner
            .ensure_tenant_exists("foo", Some("The foo tenant with a description change"), false)
            .await?
    );
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_ensure_tenant_conflict() -> Result<(), Report> {
    let (server, client) = connect().await?;
    mount_projects(&server).await;
    Mock::given(method("POST"))
        .and(path("/v3/projects"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": {
            "code": 409,
            "message": "Conflict occurred attempting to store project - Duplicate entry.",
            "title": "Conflict"
        }})))
        .mount(&server)
        .await;
    let provisioner = Provisioner::new(client);

    let err = provisioner
        .ensure_tenant_exists("bar", Some("The bar tenant"), false)
        .await
        .unwrap_err();
    assert!(matches!(err, ProvisionError::Client { .. }));
    assert_eq!(
        "identity service returned 409 Conflict: Conflict occurred attempting to store project - Duplicate entry.",
        err.to_string()
    );
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_dispatch_tenant_check_mode() -> Result<(), Report> {
    let (server, client) = connect().await?;
    mount_projects(&server).await;
    Mock::given(method("POST"))
        .and(path("/v3/projects"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let provisioner = Provisioner::new(client);

    let request = ProvisionRequest::from_fields(
        Some("bar".into()),
        Some("This is a bar".into()),
        None,
        None,
        None,
    )?;
    assert_eq!(
        OperationResult::pending(),
        dispatch(&provisioner, &request, true).await?
    );
    Ok(())
}
