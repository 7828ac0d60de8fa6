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
//! # Provisioner
//!
//! Converges tenants and users towards the desired state. Resources are keyed
//! by their name, the server assigned ids are only reported back. Every
//! operation lists the existing resources first and issues at most one write:
//!
//! - absent resource is created (always enabled),
//! - drifted resource is updated,
//! - matching resource is left untouched.
//!
//! In check mode the writes are skipped and only the outcome is reported.
use async_trait::async_trait;
use tracing::{debug, info};

mod dispatch;
pub mod error;
pub mod types;

use crate::client::IdentityClient;
use crate::client::types::{
    Tenant, TenantCreateBuilder, TenantUpdateBuilder, UserCreateBuilder, UserUpdate,
};

pub use dispatch::dispatch;
pub use error::ProvisionError;
#[cfg(test)]
pub use mock::MockProvisioner;
pub use types::{OperationResult, ProvisionApi, ProvisionRequest};

/// Provisioner working on top of the injected identity client.
#[derive(Clone)]
pub struct Provisioner<C> {
    client: C,
}

impl<C: IdentityClient> Provisioner<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// First tenant with exactly the `name`.
    async fn find_tenant(&self, name: &str) -> Result<Option<Tenant>, ProvisionError> {
        Ok(self
            .client
            .list_tenants()
            .await?
            .into_iter()
            .find(|tenant| tenant.name == name))
    }
}

#[async_trait]
impl<C: IdentityClient> ProvisionApi for Provisioner<C> {
    #[tracing::instrument(level = "info", skip(self))]
    async fn tenant_exists<'a>(&self, name: &'a str) -> Result<bool, ProvisionError> {
        Ok(self.find_tenant(name).await?.is_some())
    }

    /// Only the description is compared. The `enabled` state of an existing
    /// tenant is not reconciled.
    #[tracing::instrument(level = "info", skip(self))]
    async fn ensure_tenant_exists<'a>(
        &self,
        name: &'a str,
        description: Option<&'a str>,
        check_mode: bool,
    ) -> Result<OperationResult, ProvisionError> {
        let Some(tenant) = self.find_tenant(name).await? else {
            if check_mode {
                info!("Tenant {} would be created", name);
                return Ok(OperationResult::pending());
            }
            let mut create = TenantCreateBuilder::default();
            create.name(name).enabled(true);
            if let Some(description) = description {
                create.description(description);
            }
            let tenant = self.client.create_tenant(create.build()?).await?;
            info!("Created tenant {} ({})", name, tenant.id);
            return Ok(OperationResult::changed(tenant.id));
        };

        if tenant.description.as_deref().unwrap_or_default() == description.unwrap_or_default() {
            debug!("Tenant {} ({}) is up to date", name, tenant.id);
            return Ok(OperationResult::unchanged(tenant.id));
        }

        if !check_mode {
            let mut update = TenantUpdateBuilder::default();
            update.description(description.unwrap_or_default());
            self.client.update_tenant(&tenant.id, update.build()?).await?;
        }
        info!("Updated description of tenant {} ({})", name, tenant.id);
        Ok(OperationResult::changed(tenant.id))
    }

    /// The tenant must already exist. Password drift is detected by asking the
    /// identity service to verify the desired password.
    #[tracing::instrument(level = "info", skip(self, password))]
    async fn ensure_user_exists<'a>(
        &self,
        name: &'a str,
        password: Option<&'a str>,
        email: Option<&'a str>,
        tenant: &'a str,
        check_mode: bool,
    ) -> Result<OperationResult, ProvisionError> {
        let tenant_id = self
            .find_tenant(tenant)
            .await?
            .ok_or_else(|| ProvisionError::TenantNotFound(tenant.into()))?
            .id;

        let existing = self
            .client
            .list_users(&tenant_id)
            .await?
            .into_iter()
            .find(|user| user.name == name);

        let Some(user) = existing else {
            if check_mode {
                info!("User {} would be created in tenant {}", name, tenant);
                return Ok(OperationResult::pending());
            }
            let mut create = UserCreateBuilder::default();
            create.name(name).tenant_id(tenant_id).enabled(true);
            if let Some(password) = password {
                create.password(password);
            }
            if let Some(email) = email {
                create.email(email);
            }
            let user = self.client.create_user(create.build()?).await?;
            info!("Created user {} ({}) in tenant {}", name, user.id, tenant);
            return Ok(OperationResult::changed(user.id));
        };

        let mut update = UserUpdate {
            email: email
                .filter(|email| user.email.as_deref() != Some(*email))
                .map(Into::into),
            password: None,
        };
        if let Some(password) = password {
            if !self.client.check_user_password(&user.id, password).await? {
                update.password = Some(password.into());
            }
        }

        if update.is_empty() {
            debug!("User {} ({}) is up to date", name, user.id);
            return Ok(OperationResult::unchanged(user.id));
        }

        if !check_mode {
            self.client.update_user(&user.id, update).await?;
        }
        info!("Updated user {} ({})", name, user.id);
        Ok(OperationResult::changed(user.id))
    }
}
