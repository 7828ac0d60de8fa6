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

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::BuilderError;

/// Tenant as reported by the identity service.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Tenant {
    /// The description of the tenant.
    #[builder(default)]
    #[serde(default)]
    #[validate(length(max = 255))]
    pub description: Option<String>,

    /// If set to true, tenant is enabled. If set to false, tenant is
    /// disabled.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// The tenant ID.
    #[validate(length(min = 1, max = 64))]
    pub id: String,

    /// The tenant name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// New tenant data.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct TenantCreate {
    /// The description of the tenant.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub description: Option<String>,

    /// If set to true, tenant is enabled. If set to false, tenant is
    /// disabled.
    pub enabled: bool,

    /// The name of the tenant, which must be unique.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Tenant update data.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct TenantUpdate {
    /// The new description of the tenant.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}
