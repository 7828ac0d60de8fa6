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

//! # OpenStack Keystone provisioning
//!
//! Idempotent provisioning of Keystone tenants (projects) and users. Every
//! operation converges the identity service towards a desired description
//! keyed by the resource name and reports whether anything had to change:
//!
//! - [`provision::ProvisionApi::tenant_exists`] checks whether a tenant with
//!   the given name is visible to the caller.
//! - [`provision::ProvisionApi::ensure_tenant_exists`] creates the tenant when
//!   it is absent and updates its description when it drifted.
//! - [`provision::ProvisionApi::ensure_user_exists`] does the same for a user
//!   scoped to an already existing tenant.
//! - [`provision::dispatch`] routes a [`provision::ProvisionRequest`] to the
//!   matching ensure-operation.
//!
//! The identity service itself is reached through the [`client::IdentityClient`]
//! capability which is injected into the [`provision::Provisioner`]. The
//! [`client::KeystoneClient`] implements it against the Keystone v3 REST API.

pub mod client;
pub mod config;
pub mod error;
pub mod provision;
