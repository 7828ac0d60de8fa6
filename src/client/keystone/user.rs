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

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::auth::AuthRequest;
use super::{KeystoneClient, check_status, status_error};
use crate::client::error::IdentityClientError;
use crate::client::types::{User, UserApi, UserCreate, UserUpdate};

#[derive(Debug, Deserialize)]
struct UserList {
    users: Vec<User>,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    user: User,
}

#[derive(Debug, Serialize)]
struct UserCreateRequest<'a> {
    user: UserCreateBody<'a>,
}

#[derive(Debug, Serialize)]
struct UserCreateBody<'a> {
    #[serde(flatten)]
    user: &'a UserCreate,
    domain_id: &'a str,
}

#[derive(Debug, Serialize)]
struct UserUpdateRequest<'a> {
    user: &'a UserUpdate,
}

#[async_trait]
impl UserApi for KeystoneClient {
    /// Keystone does not filter users by the default project on the server
    /// side, so the listing is filtered here.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_users<'a>(&self, tenant_id: &'a str) -> Result<Vec<User>, IdentityClientError> {
        let rsp = self.request(Method::GET, "v3/users")?.send().await?;
        Ok(check_status(rsp)
            .await?
            .json::<UserList>()
            .await?
            .users
            .into_iter()
            .filter(|user| user.tenant_id.as_deref() == Some(tenant_id))
            .collect())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(name = %user.name))]
    async fn create_user(&self, user: UserCreate) -> Result<User, IdentityClientError> {
        user.validate()?;
        let rsp = self
            .request(Method::POST, "v3/users")?
            .json(&UserCreateRequest {
                user: UserCreateBody {
                    user: &user,
                    domain_id: &self.domain_id,
                },
            })
            .send()
            .await?;
        Ok(check_status(rsp).await?.json::<UserResponse>().await?.user)
    }

    #[tracing::instrument(level = "debug", skip(self, user))]
    async fn update_user<'a>(
        &self,
        user_id: &'a str,
        user: UserUpdate,
    ) -> Result<User, IdentityClientError> {
        user.validate()?;
        let rsp = self
            .request(Method::PATCH, &format!("v3/users/{user_id}"))?
            .json(&UserUpdateRequest { user: &user })
            .send()
            .await?;
        Ok(check_status(rsp).await?.json::<UserResponse>().await?.user)
    }

    /// Verify the password by requesting an unscoped token for the user.
    #[tracing::instrument(level = "debug", skip(self, password))]
    async fn check_user_password<'a>(
        &self,
        user_id: &'a str,
        password: &'a str,
    ) -> Result<bool, IdentityClientError> {
        let rsp = self
            .http
            .post(self.endpoint.join("v3/auth/tokens")?)
            .json(&AuthRequest::unscoped(user_id, password))
            .send()
            .await?;
        match rsp.status() {
            StatusCode::CREATED | StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            status => Err(status_error(status, &rsp.text().await?)),
        }
    }
}
