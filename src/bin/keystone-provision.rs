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
//! Keystone provisioning executable.
//!
//! This is the entry point of the `keystone-provision` binary.

use clap::Parser;
use color_eyre::eyre::{Report, Result};
use eyre::WrapErr;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{
    Layer,
    filter::{LevelFilter, Targets},
    prelude::*,
};

use openstack_keystone_provision::client::KeystoneClient;
use openstack_keystone_provision::config::Config;
use openstack_keystone_provision::provision::{Provisioner, ProvisionRequest, dispatch};

/// Keystone provisioning.
///
/// Make sure the tenant (or the user within an existing tenant) exists in the
/// `OpenStack` identity service with the desired attributes. The outcome is
/// printed as json: `{"changed": <bool>, "id": <id>}`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the provisioning config file.
    #[arg(short, long, default_value = "/etc/keystone/provision.conf")]
    config: PathBuf,

    /// Verbosity level. Repeat to increase level.
    #[arg(short, long, global=true, action = clap::ArgAction::Count, display_order = 920)]
    pub verbose: u8,

    /// Only report what would change without modifying anything.
    #[arg(long)]
    check: bool,

    /// Tenant name.
    #[arg(long)]
    tenant: Option<String>,

    /// Tenant description.
    #[arg(long)]
    tenant_description: Option<String>,

    /// User name. When given the user is provisioned in the existing tenant.
    #[arg(long)]
    user: Option<String>,

    /// User password.
    #[arg(long, env = "OS_PROVISION_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// User email.
    #[arg(long)]
    email: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let args = Args::parse();

    let filter = Targets::new().with_default(match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    });

    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter);

    // build the tracing registry
    tracing_subscriber::registry().with(log_layer).init();

    let request = ProvisionRequest::from_fields(
        args.tenant,
        args.tenant_description,
        args.user,
        args.password,
        args.email,
    )?;

    let cfg = Config::new(args.config)?;

    debug!("Authenticating against {}...", cfg.auth.auth_url);
    let client = KeystoneClient::connect(&cfg)
        .await
        .wrap_err("Authentication against the identity service failed")?;

    let provisioner = Provisioner::new(client);
    let result = dispatch(&provisioner, &request, args.check).await?;
    info!("Provisioning finished: {:?}", result);

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
