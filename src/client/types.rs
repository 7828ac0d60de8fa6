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

pub mod tenant;
pub mod user;

use async_trait::async_trait;

use crate::client::IdentityClientError;
pub use crate::client::types::tenant::*;
pub use crate::client::types::user::*;

/// Tenant API of the identity service.
#[async_trait]
pub trait TenantApi: Send + Sync {
    /// List all tenants visible to the caller.
    async fn list_tenants(&self) -> Result<Vec<Tenant>, IdentityClientError>;

    /// Create a new tenant.
    async fn create_tenant(&self, tenant: TenantCreate) -> Result<Tenant, IdentityClientError>;

    /// Update the tenant with the `id`.
    async fn update_tenant<'a>(
        &self,
        tenant_id: &'a str,
        tenant: TenantUpdate,
    ) -> Result<Tenant, IdentityClientError>;
}

/// User API of the identity service.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// List users belonging to the tenant.
    async fn list_users<'a>(&self, tenant_id: &'a str) -> Result<Vec<User>, IdentityClientError>;

    /// Create a new user.
    async fn create_user(&self, user: UserCreate) -> Result<User, IdentityClientError>;

    /// Update the user with the `id`.
    async fn update_user<'a>(
        &self,
        user_id: &'a str,
        user: UserUpdate,
    ) -> Result<User, IdentityClientError>;

    /// Check whether the `password` is the current password of the user.
    async fn check_user_password<'a>(
        &self,
        user_id: &'a str,
        password: &'a str,
    ) -> Result<bool, IdentityClientError>;
}

/// Full identity client capability.
pub trait IdentityClient: TenantApi + UserApi {}

impl<T: TenantApi + UserApi> IdentityClient for T {}
