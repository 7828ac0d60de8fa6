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
//! # Keystone v3 client
//!
//! [`IdentityClient`](crate::client::IdentityClient) implementation talking to
//! the Keystone v3 REST API. The client authenticates once with the configured
//! password credentials and reuses the project scoped token for every
//! following request.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

mod auth;
mod tenant;
mod user;

use crate::client::error::IdentityClientError;
use crate::config::Config;
use auth::AuthRequest;

const SUBJECT_TOKEN_HEADER: &str = "X-Subject-Token";
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Keystone v3 client.
#[derive(Clone, Debug)]
pub struct KeystoneClient {
    /// Domain new resources are created in.
    domain_id: String,
    /// Identity endpoint, always ending with `/`.
    endpoint: Url,
    http: Client,
    token: SecretString,
}

/// Keystone error response.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl KeystoneClient {
    /// Authenticate with the credentials from the configuration.
    #[tracing::instrument(level = "info", skip(config), fields(auth_url = %config.auth.auth_url))]
    pub async fn connect(config: &Config) -> Result<Self, IdentityClientError> {
        let endpoint = identity_endpoint(Url::parse(&config.auth.auth_url)?);
        let http = Client::builder()
            .timeout(Duration::from_secs(config.provision.timeout))
            .build()?;

        let rsp = http
            .post(endpoint.join("v3/auth/tokens")?)
            .json(&AuthRequest::scoped(&config.auth))
            .send()
            .await?;
        let rsp = check_status(rsp).await?;

        let token = rsp
            .headers()
            .get(SUBJECT_TOKEN_HEADER)
            .ok_or(IdentityClientError::MissingToken)?
            .to_str()?
            .to_string();
        debug!("Authenticated against {}", endpoint);

        Ok(Self {
            domain_id: config.provision.domain_id.clone(),
            endpoint,
            http,
            token: SecretString::from(token),
        })
    }

    /// Build the request to the `path` relative to the identity endpoint
    /// carrying the auth token.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, IdentityClientError> {
        Ok(self
            .http
            .request(method, self.endpoint.join(path)?)
            .header(AUTH_TOKEN_HEADER, self.token.expose_secret()))
    }
}

/// Normalize the configured auth url into the identity endpoint root.
///
/// `http://h:5000/v3`, `http://h:5000/v3/` and `http://h:5000` all result in
/// `http://h:5000/`.
fn identity_endpoint(mut url: Url) -> Url {
    let path = url.path().trim_end_matches('/');
    let path = path.strip_suffix("/v3").unwrap_or(path);
    let path = format!("{path}/");
    url.set_path(&path);
    url
}

/// Convert non success responses into the error carrying the message reported
/// by Keystone.
async fn check_status(rsp: Response) -> Result<Response, IdentityClientError> {
    let status = rsp.status();
    if status.is_success() {
        return Ok(rsp);
    }
    let body = rsp.text().await?;
    Err(status_error(status, &body))
}

fn status_error(status: StatusCode, body: &str) -> IdentityClientError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|err| err.error.message)
        .unwrap_or_else(|_| body.to_string());
    IdentityClientError::Status { status, message }
}
