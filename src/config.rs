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

use config::{File, FileFormat};
use eyre::{Report, WrapErr};
use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variables overriding the configuration file.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("OS_AUTH_URL", "auth.auth_url"),
    ("OS_USERNAME", "auth.username"),
    ("OS_PASSWORD", "auth.password"),
    ("OS_PROJECT_NAME", "auth.project_name"),
    ("OS_USER_DOMAIN_ID", "auth.user_domain_id"),
    ("OS_PROJECT_DOMAIN_ID", "auth.project_domain_id"),
];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Credentials used to authenticate against the identity service.
    pub auth: AuthSection,

    /// Provisioning options.
    #[serde(default)]
    pub provision: ProvisionSection,
}

/// Authentication configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthSection {
    /// Keystone endpoint, with or without the `/v3` suffix.
    pub auth_url: String,

    /// Name of the user performing the provisioning.
    pub username: String,

    /// Password of the user performing the provisioning.
    pub password: SecretString,

    /// Domain of the user.
    #[serde(default = "default_domain")]
    pub user_domain_id: String,

    /// Project the token is scoped to.
    pub project_name: String,

    /// Domain of the scope project.
    #[serde(default = "default_domain")]
    pub project_domain_id: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProvisionSection {
    /// Domain new tenants are created in.
    #[serde(default = "default_domain")]
    pub domain_id: String,

    /// Timeout of a single request to the identity service in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ProvisionSection {
    fn default() -> Self {
        Self {
            domain_id: default_domain(),
            timeout: default_timeout(),
        }
    }
}

fn default_domain() -> String {
    "default".into()
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    pub fn new(path: PathBuf) -> Result<Self, Report> {
        Self::with_env(path, std::env::vars())
    }

    /// Load the configuration from the file (when present) applying the
    /// `OS_*` overrides found in `vars`.
    pub fn with_env<I>(path: PathBuf, vars: I) -> Result<Self, Report>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut builder = config::Config::builder();

        if std::path::Path::new(&path).is_file() {
            builder = builder.add_source(File::from(path).format(FileFormat::Ini));
        }

        for (name, value) in vars {
            if let Some((_, key)) = ENV_OVERRIDES.iter().find(|(var, _)| *var == name) {
                builder = builder.set_override(*key, value)?;
            }
        }

        builder.try_into()
    }
}

impl TryFrom<config::ConfigBuilder<config::builder::DefaultState>> for Config {
    type Error = Report;
    fn try_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, Self::Error> {
        let mut builder = builder;
        builder = builder
            .set_default("auth.user_domain_id", "default")?
            .set_default("auth.project_domain_id", "default")?
            .set_default("provision.domain_id", "default")?
            .set_default("provision.timeout", "30")?;

        builder
            .build()
            .wrap_err("Failed to read configuration file")?
            .try_deserialize()
            .wrap_err("Failed to parse configuration file")
    }
}
