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
use serde::{Deserialize, Serialize};

use crate::provision::ProvisionError;

/// Provisioning API.
#[async_trait]
pub trait ProvisionApi: Send + Sync {
    /// Check whether a tenant with exactly the `name` exists.
    async fn tenant_exists<'a>(&self, name: &'a str) -> Result<bool, ProvisionError>;

    /// Make sure the tenant exists and carries the `description`.
    async fn ensure_tenant_exists<'a>(
        &self,
        name: &'a str,
        description: Option<&'a str>,
        check_mode: bool,
    ) -> Result<OperationResult, ProvisionError>;

    /// Make sure the user exists in the `tenant` with the given password and
    /// email.
    async fn ensure_user_exists<'a>(
        &self,
        name: &'a str,
        password: Option<&'a str>,
        email: Option<&'a str>,
        tenant: &'a str,
        check_mode: bool,
    ) -> Result<OperationResult, ProvisionError>;
}

/// Outcome of an ensure operation.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OperationResult {
    /// Whether the resource was (or in check mode would be) created or
    /// updated.
    pub changed: bool,

    /// The resource ID. Only absent in check mode for a resource that would
    /// be created.
    pub id: Option<String>,
}

impl OperationResult {
    /// Resource was created or updated.
    pub fn changed<S: Into<String>>(id: S) -> Self {
        Self {
            changed: true,
            id: Some(id.into()),
        }
    }

    /// Resource already matched.
    pub fn unchanged<S: Into<String>>(id: S) -> Self {
        Self {
            changed: false,
            id: Some(id.into()),
        }
    }

    /// Resource would be created.
    pub fn pending() -> Self {
        Self {
            changed: true,
            id: None,
        }
    }
}

/// Desired state routed by [`dispatch`](crate::provision::dispatch).
#[derive(Clone, Debug, PartialEq)]
pub enum ProvisionRequest {
    /// Tenant only.
    Tenant {
        tenant: String,
        tenant_description: Option<String>,
    },
    /// User within an existing tenant.
    User {
        tenant: String,
        user: String,
        password: Option<String>,
        email: Option<String>,
    },
}

impl ProvisionRequest {
    /// Resolve the flat set of optional fields into a request. The presence
    /// of `user` selects the user request.
    pub fn from_fields(
        tenant: Option<String>,
        tenant_description: Option<String>,
        user: Option<String>,
        password: Option<String>,
        email: Option<String>,
    ) -> Result<Self, ProvisionError> {
        let tenant = tenant
            .filter(|tenant| !tenant.is_empty())
            .ok_or_else(|| ProvisionError::InvalidRequest("tenant must be given".into()))?;
        Ok(match user {
            Some(user) => Self::User {
                tenant,
                user,
                password,
                email,
            },
            None => Self::Tenant {
                tenant,
                tenant_description,
            },
        })
    }
}
