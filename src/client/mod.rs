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
//! # Identity client
//!
//! Capability used by the provisioner to reach the identity service:
//!
//! ## Tenant
//!
//! A container that groups or isolates resources or identity objects. In the
//! Keystone v3 API the tenant is represented by a project. Tenants are listed,
//! created and have their description updated.
//!
//! ## User
//!
//! A digital representation of a person, system, or service. Users provisioned
//! here belong to a tenant through their default project. Users are listed per
//! tenant, created, updated and have their password verified.

pub mod error;
pub mod keystone;
pub mod types;

pub use error::IdentityClientError;
pub use keystone::KeystoneClient;
#[cfg(test)]
pub use mock::MockIdentityClient;
pub use types::{IdentityClient, TenantApi, UserApi};
