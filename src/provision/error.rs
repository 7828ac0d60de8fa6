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

use thiserror::Error;

use crate::client::IdentityClientError;
use crate::error::BuilderError;

#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Identity service error.
    #[error(transparent)]
    Client {
        /// The source of the error.
        #[from]
        source: IdentityClientError,
    },

    #[error("tenant {0} not found")]
    TenantNotFound(String),

    /// The request fields do not describe a tenant or a user.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Builder {
        #[from]
        source: BuilderError,
    },
}
