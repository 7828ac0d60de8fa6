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
//! Common functionality used in the provisioning tests.

use eyre::Report;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use openstack_keystone_provision::client::KeystoneClient;
use openstack_keystone_provision::config::{AuthSection, Config, ProvisionSection};

pub const TOKEN: &str = "gAAAAABtesttoken";
pub const FOO_ID: &str = "21b505b9cbf84bdfba60dc08cc2a4b8d";
pub const ADMIN_ID: &str = "0a6f3697fc314279b1a22c61d40c0919";

/// Configuration pointing to the mocked Keystone.
pub fn get_config(server: &MockServer) -> Config {
    Config {
        auth: AuthSection {
            auth_url: format!("{}/v3", server.uri()),
            username: "admin".into(),
            password: "password".into(),
            user_domain_id: "default".into(),
            project_name: "admin".into(),
            project_domain_id: "default".into(),
        },
        provision: ProvisionSection {
            domain_id: "default".into(),
            timeout: 5,
        },
    }
}

/// Mount the project scoped authentication of the provisioning user.
pub async fn mount_auth(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v3/auth/tokens"))
        .and(body_partial_json(json!({"auth": {
            "identity": {"password": {"user": {"name": "admin", "password": "password"}}},
            "scope": {"project": {"name": "admin"}}
        }})))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Subject-Token", TOKEN)
                .set_body_json(json!({"token": {"methods": ["password"]}})),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Start the mocked Keystone and connect to it.
pub async fn connect() -> Result<(MockServer, KeystoneClient), Report> {
    let server = MockServer::start().await;
    mount_auth(&server).await;
    let client = KeystoneClient::connect(&get_config(&server)).await?;
    Ok((server, client))
}

pub fn foo_project() -> serde_json::Value {
    json!({
        "id": FOO_ID,
        "name": "foo",
        "description": "The foo tenant",
        "enabled": true,
        "domain_id": "default",
        "is_domain": false,
        "parent_id": "default",
        "links": {"self": format!("http://localhost/v3/projects/{FOO_ID}")}
    })
}

pub fn admin_user() -> serde_json::Value {
    json!({
        "id": ADMIN_ID,
        "name": "admin",
        "email": "admin@example.com",
        "enabled": true,
        "domain_id": "default",
        "default_project_id": FOO_ID,
        "password_expires_at": null,
        "options": {}
    })
}
