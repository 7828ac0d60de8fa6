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
//! Tenants are Keystone projects.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{KeystoneClient, check_status};
use crate::client::error::IdentityClientError;
use crate::client::types::{Tenant, TenantApi, TenantCreate, TenantUpdate};

#[derive(Debug, Deserialize)]
struct ProjectList {
    projects: Vec<Tenant>,
}

#[derive(Debug, Deserialize)]
struct ProjectResponse {
    project: Tenant,
}

#[derive(Debug, Serialize)]
struct ProjectCreateRequest<'a> {
    project: ProjectCreate<'a>,
}

#[derive(Debug, Serialize)]
struct ProjectCreate<'a> {
    #[serde(flatten)]
    tenant: &'a TenantCreate,
    domain_id: &'a str,
}

#[derive(Debug, Serialize)]
struct ProjectUpdateRequest<'a> {
    project: &'a TenantUpdate,
}

#[async_trait]
impl TenantApi for KeystoneClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_tenants(&self) -> Result<Vec<Tenant>, IdentityClientError> {
        let rsp = self.request(Method::GET, "v3/projects")?.send().await?;
        Ok(check_status(rsp).await?.json::<ProjectList>().await?.projects)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn create_tenant(&self, tenant: TenantCreate) -> Result<Tenant, IdentityClientError> {
        tenant.validate()?;
        let rsp = self
            .request(Method::POST, "v3/projects")?
            .json(&ProjectCreateRequest {
                project: ProjectCreate {
                    tenant: &tenant,
                    domain_id: &self.domain_id,
                },
            })
            .send()
            .await?;
        Ok(check_status(rsp)
            .await?
            .json::<ProjectResponse>()
            .await?
            .project)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn update_tenant<'a>(
        &self,
        tenant_id: &'a str,
        tenant: TenantUpdate,
    ) -> Result<Tenant, IdentityClientError> {
        tenant.validate()?;
        let rsp = self
            .request(Method::PATCH, &format!("v3/projects/{tenant_id}"))?
            .json(&ProjectUpdateRequest { project: &tenant })
            .send()
            .await?;
        Ok(check_status(rsp)
            .await?
            .json::<ProjectResponse>()
            .await?
            .project)
    }
}
