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

use crate::provision::error::ProvisionError;
use crate::provision::types::{OperationResult, ProvisionApi, ProvisionRequest};

/// Route the request to the matching ensure operation.
///
/// A user request does not ensure its tenant: the tenant must already exist.
#[tracing::instrument(level = "info", skip(provisioner, request))]
pub async fn dispatch<P>(
    provisioner: &P,
    request: &ProvisionRequest,
    check_mode: bool,
) -> Result<OperationResult, ProvisionError>
where
    P: ProvisionApi + ?Sized,
{
    match request {
        ProvisionRequest::Tenant {
            tenant,
            tenant_description,
        } => {
            provisioner
                .ensure_tenant_exists(tenant, tenant_description.as_deref(), check_mode)
                .await
        }
        ProvisionRequest::User {
            tenant,
            user,
            password,
            email,
        } => {
            provisioner
                .ensure_user_exists(
                    user,
                    password.as_deref(),
                    email.as_deref(),
                    tenant,
                    check_mode,
                )
                .await
        }
    }
}
