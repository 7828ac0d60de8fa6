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
//! Password authentication requests.

use secrecy::ExposeSecret;
use serde::Serialize;

use crate::config::AuthSection;

#[derive(Debug, Serialize)]
pub(super) struct AuthRequest<'a> {
    auth: AuthRequestInner<'a>,
}

#[derive(Debug, Serialize)]
struct AuthRequestInner<'a> {
    identity: Identity<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<Scope<'a>>,
}

#[derive(Debug, Serialize)]
struct Identity<'a> {
    methods: Vec<&'static str>,
    password: PasswordAuth<'a>,
}

#[derive(Debug, Serialize)]
struct PasswordAuth<'a> {
    user: UserPassword<'a>,
}

#[derive(Debug, Serialize)]
struct UserPassword<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<Domain<'a>>,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct Scope<'a> {
    project: ScopeProject<'a>,
}

#[derive(Debug, Serialize)]
struct ScopeProject<'a> {
    name: &'a str,
    domain: Domain<'a>,
}

#[derive(Debug, Serialize)]
struct Domain<'a> {
    id: &'a str,
}

impl<'a> AuthRequest<'a> {
    /// Project scoped authentication with the configured credentials.
    pub(super) fn scoped(auth: &'a AuthSection) -> Self {
        Self {
            auth: AuthRequestInner {
                identity: Identity {
                    methods: vec!["password"],
                    password: PasswordAuth {
                        user: UserPassword {
                            id: None,
                            name: Some(&auth.username),
                            domain: Some(Domain {
                                id: &auth.user_domain_id,
                            }),
                            password: auth.password.expose_secret(),
                        },
                    },
                },
                scope: Some(Scope {
                    project: ScopeProject {
                        name: &auth.project_name,
                        domain: Domain {
                            id: &auth.project_domain_id,
                        },
                    },
                }),
            },
        }
    }

    /// Unscoped authentication of the user identified by the `id`.
    pub(super) fn unscoped(user_id: &'a str, password: &'a str) -> Self {
        Self {
            auth: AuthRequestInner {
                identity: Identity {
                    methods: vec!["password"],
                    password: PasswordAuth {
                        user: UserPassword {
                            id: Some(user_id),
                            name: None,
                            domain: None,
                            password,
                        },
                    },
                },
                scope: None,
            },
        }
    }
}
