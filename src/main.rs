use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use provisioning_billing::api::report_config_dto::ReportConfigDto;
use provisioning_billing::config::{ReportConfig, merge};
use provisioning_billing::domain::billing::reconciliation::{computational_ids, exploratory_ids};
use provisioning_billing::domain::billing::utils::id::{ComputationalId, ExploratoryId};
use provisioning_billing::loader::parser::load_report_config;
use provisioning_billing::{generate_billing_report, logger};

#[derive(Parser)]
#[command(name = "billing-report")]
#[command(about = "Billing report and resource id tooling for provisioned environments")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the billing report of a snapshot
    Report {
        /// Snapshot JSON of provisioned entities
        #[arg(long)]
        snapshot: String,
        /// Provider billing feed JSON
        #[arg(long)]
        feed: Option<String>,
        /// Report config JSON
        #[arg(long)]
        config: Option<String>,
        /// Service base name (overrides config)
        #[arg(long)]
        sbn: Option<String>,
        /// Start of the reporting period, YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,
        /// End of the reporting period, YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,
        /// Field delimiter
        #[arg(long)]
        delimiter: Option<char>,
        /// Write the report here instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
    /// Print every physical resource id owned by an entity
    Ids {
        #[command(subcommand)]
        entity: Entity,
    },
}

#[derive(Subcommand)]
pub enum Entity {
    /// Exploratory instance id
    Exploratory { id: String },
    /// Computational resource id
    Computational { id: String },
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init();

    match args.command {
        Command::Report { snapshot, feed, config, sbn, from, to, delimiter, output } => {
            let base = match config.as_deref() {
                Some(path) => load_report_config(path).with_context(|| format!("reading config '{}'", path))?,
                None => ReportConfigDto::default(),
            };
            let overrides = ReportConfigDto { service_base_name: sbn, from, to, delimiter, currency: None };
            let config = ReportConfig::try_from(merge(base, overrides))?;

            let report = generate_billing_report(&config, &snapshot, feed.as_deref()).with_context(|| format!("building report from '{}'", snapshot))?;

            match output {
                Some(path) => {
                    std::fs::write(&path, report).with_context(|| format!("writing report to '{}'", path))?;
                    log::info!("Report written to '{}'", path);
                }
                None => print!("{}", report),
            }
        }
        Command::Ids { entity } => {
            let ids = match entity {
                Entity::Exploratory { id } => exploratory_ids(&ExploratoryId::new(id)),
                Entity::Computational { id } => computational_ids(&ComputationalId::new(id)),
            };
            for id in ids {
                println!("{}", id);
            }
        }
    }

    Ok(())
}
