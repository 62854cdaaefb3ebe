//! This program provides a quick way to check the load balancer setup of a
//! Hetzner Cloud project and detect possible problems: unhealthy targets,
//! incomplete services, missing delete protection and network wiring that
//! leaves targets unreachable.

use clap::{Parser, Subcommand};
use hcloud_lb_checker::checks::load_balancer::{LoadBalancerChecks, LoadBalancerChecksBuilder};
use hcloud_lb_checker::client::DefaultClient;
use hcloud_lb_checker::config::{ClientConfig, DEFAULT_ENDPOINT};
use hcloud_lb_checker::error::HcloudError;
use hcloud_lb_checker::gatherer::hcloud::gather;
use hcloud_lb_checker::types::{LoadBalancerSelector, Severity, VerificationResult, Verifier};
use hcloud_schema::LoadBalancerActionChangeProtectionRequest;
use log::{debug, error, info};
use std::process::exit;
use std::time::Duration;

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Checks,
    Debug,
    Json,
}

#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
enum Check {
    All,
    Targets,
    Services,
    Protection,
    Network,
}

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Verifies the setup of Hetzner Cloud load balancers.",
    long_about = "Verifies the setup of Hetzner Cloud load balancers. An API token with read access to the project must be provided."
)]
struct Options {
    #[arg(long, env = "HCLOUD_TOKEN", hide_env_values = true)]
    token: String,
    #[arg(long, env = "HCLOUD_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Milliseconds between two polls of a running action.
    #[arg(long, default_value_t = 500)]
    poll_interval: u64,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Runs checks against all load balancers matching the filters.
    Check {
        /// Label selector, e.g. 'env=prod,tier!=db'.
        #[arg(short, long)]
        selector: Option<String>,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Checks)]
        format: OutputFormat,
        #[arg(long, value_enum, default_values_t = vec![Check::All])]
        checks: Vec<Check>,
    },
    /// Enables (or with --disable disables) delete protection.
    Protect {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        disable: bool,
    },
}

fn run_selected(lbc: &LoadBalancerChecks, checks: &[Check]) -> Vec<VerificationResult> {
    if checks.contains(&Check::All) {
        return lbc.verify();
    }
    let mut results = vec![];
    for check in checks {
        debug!("Running {:?} checks", check);
        match check {
            Check::All => {}
            Check::Targets => results.extend(lbc.verify_targets()),
            Check::Services => results.extend(lbc.verify_services()),
            Check::Protection => results.extend(lbc.verify_protection()),
            Check::Network => results.extend(lbc.verify_network()),
        }
    }
    results
}

#[tokio::main]
async fn main() {
    let options = Options::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    if options.token.is_empty() {
        eprintln!("Must set a token to proceed.");
        exit(1);
    }
    if let Err(err) = run(options).await {
        error!("{}", err);
        exit(1);
    }
}

async fn run(options: Options) -> Result<(), HcloudError> {
    let config = ClientConfig::new(&options.token)
        .with_endpoint(&options.endpoint)
        .with_poll_interval(Duration::from_millis(options.poll_interval));
    let client = DefaultClient::new(&config)?;

    match options.command {
        Command::Check {
            selector,
            name,
            format,
            checks,
        } => {
            let selector = LoadBalancerSelector {
                label_selector: selector,
                name,
            };
            let hcloud_data = gather(&client, &selector).await?;
            if hcloud_data.load_balancers.is_empty() {
                eprintln!("No load balancers match {:?}", selector);
                exit(1);
            }
            match format {
                OutputFormat::Debug => {
                    println!("{:#?}", hcloud_data.load_balancers)
                }
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&hcloud_data.load_balancers)?
                    )
                }
                OutputFormat::Checks => {
                    let lbc = match LoadBalancerChecksBuilder::default()
                        .load_balancers(hcloud_data.load_balancers)
                        .build()
                    {
                        Ok(lbc) => lbc,
                        Err(err) => {
                            eprintln!("Could not setup checks: {}", err);
                            exit(1);
                        }
                    };
                    let results = run_selected(&lbc, &checks);
                    for res in results.iter() {
                        println!("{}", res);
                    }
                    if results.iter().any(|r| r.severity == Severity::Critical) {
                        exit(2);
                    }
                }
            }
        }
        Command::Protect { id, disable } => {
            let request = LoadBalancerActionChangeProtectionRequest {
                delete: Some(!disable),
            };
            let action = client.change_protection(id, &request).await?;
            let action = client.wait_for_action(&action).await?;
            info!("Action {} finished", action.id);
            println!(
                "Delete protection of load balancer {} is {}",
                id,
                if disable { "disabled" } else { "enabled" }
            );
        }
    }
    Ok(())
}
