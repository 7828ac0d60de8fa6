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

/// User as reported by the identity service.
///
/// The password is never returned by the service.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct User {
    /// The email of the user, stored as an extra attribute.
    #[builder(default)]
    #[serde(default)]
    pub email: Option<String>,

    /// If the user is enabled, this value is true. If the user is disabled,
    /// this value is false.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// The user ID.
    #[validate(length(min = 1, max = 64))]
    pub id: String,

    /// The user name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// The ID of the owning tenant (the default project of the user).
    #[builder(default)]
    #[serde(default, rename = "default_project_id")]
    pub tenant_id: Option<String>,
}

/// User creation data.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct UserCreate {
    /// The email of the user.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,

    /// If the user is enabled, this value is true. If the user is disabled,
    /// this value is false.
    pub enabled: bool,

    /// The user name. Must be unique within the owning domain.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// User password.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 72))]
    pub password: Option<String>,

    /// The ID of the owning tenant.
    #[serde(rename = "default_project_id")]
    #[validate(length(min = 1, max = 64))]
    pub tenant_id: String,
}

/// User update data. Only the present attributes are changed.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct UserUpdate {
    /// New email of the user.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,

    /// New password of the user.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 72))]
    pub password: Option<String>,
}

impl UserUpdate {
    /// Whether the update would not change anything.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

fn default_true() -> bool {
    true
}
