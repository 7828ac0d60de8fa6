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

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityClientError {
    /// The identity service answered with an unexpected status.
    #[error("identity service returned {status}: {message}")]
    Status {
        /// Response status.
        status: StatusCode,
        /// Error message reported by the service.
        message: String,
    },

    /// Transport error.
    #[error("http request error: {}", source)]
    Http {
        /// The source of the error.
        #[from]
        source: reqwest::Error,
    },

    /// Authentication succeeded but the token header is absent.
    #[error("authentication response is missing the X-Subject-Token header")]
    MissingToken,

    /// Token header is not a valid string.
    #[error("invalid token header: {}", source)]
    InvalidToken {
        /// The source of the error.
        #[from]
        source: reqwest::header::ToStrError,
    },

    /// Url parsing error
    #[error(transparent)]
    UrlParse {
        #[from]
        source: url::ParseError,
    },

    /// Request validation error.
    #[error("request validation error: {}", source)]
    Validation {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },
}
