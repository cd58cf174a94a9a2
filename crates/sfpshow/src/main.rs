//! sfpshow CLI entry point.
//!
//! Reads transceiver state from the SONiC databases and prints either the
//! per-port EEPROM detail report or the presence table. Logs go to stderr
//! so stdout stays clean for the report itself.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sonic_sfpshow::show::{self, PresenceRow};
use sonic_sfpshow::{namespace, natsort, Namespace, SfpShow, SonicDb};

/// SONiC transceiver EEPROM/DOM reporting utility
#[derive(Parser, Debug)]
#[command(name = "sfpshow")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Redis server host
    #[arg(long, default_value = "127.0.0.1")]
    redis_host: String,

    /// Redis server port
    #[arg(long, default_value = "6379")]
    redis_port: u16,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Display transceiver EEPROM contents
    Eeprom {
        /// Limit the report to one port
        #[arg(short = 'p', long)]
        port: Option<String>,

        /// Also dump DOM sensor and threshold data
        #[arg(short = 'd', long)]
        dom: bool,

        /// Restrict to one ASIC namespace
        #[arg(short = 'n', long)]
        namespace: Option<String>,
    },
    /// Display transceiver presence
    Presence {
        /// Limit the report to one port
        #[arg(short = 'p', long)]
        port: Option<String>,

        /// Restrict to one ASIC namespace
        #[arg(short = 'n', long)]
        namespace: Option<String>,
    },
}

/// Initialize tracing/logging on stderr.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let Args { redis_host, redis_port, command } = Args::parse();

    let outcome = match command {
        Command::Eeprom { port, dom, namespace } => {
            run_eeprom(&redis_host, redis_port, port, dom, namespace).await
        }
        Command::Presence { port, namespace } => {
            run_presence(&redis_host, redis_port, port, namespace).await
        }
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            error!("sfpshow failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_eeprom(
    host: &str,
    redis_port: u16,
    port_arg: Option<String>,
    dump_dom: bool,
    namespace_arg: Option<String>,
) -> anyhow::Result<ExitCode> {
    let namespaces = namespace::discover(namespace_arg.as_deref(), host, redis_port);

    if let Some(port) = port_arg {
        let Some(ns) = resolve_port_namespace(&namespaces, &port).await? else {
            print_eeprom(&[(port, format!("{}\n", show::EEPROM_NOT_DETECTED))]);
            return Ok(ExitCode::FAILURE);
        };
        let db = SonicDb::connect(&ns).await?;
        let mut view = SfpShow::new(db);
        let report = view.eeprom_report(&[port], dump_dom).await?;
        print_eeprom(&report);
        return Ok(ExitCode::SUCCESS);
    }

    let mut report = Vec::new();
    for ns in &namespaces {
        debug!(namespace = ns.label(), "reading transceiver state");
        let db = SonicDb::connect(ns).await?;
        let mut view = SfpShow::new(db);
        let ports = view.front_panel_ports().await?;
        report.extend(view.eeprom_report(&ports, dump_dom).await?);
    }
    report.sort_by(|a, b| natsort::compare(&a.0, &b.0));
    print_eeprom(&report);
    Ok(ExitCode::SUCCESS)
}

async fn run_presence(
    host: &str,
    redis_port: u16,
    port_arg: Option<String>,
    namespace_arg: Option<String>,
) -> anyhow::Result<ExitCode> {
    let namespaces = namespace::discover(namespace_arg.as_deref(), host, redis_port);

    if let Some(port) = port_arg {
        let Some(ns) = resolve_port_namespace(&namespaces, &port).await? else {
            let rows = vec![PresenceRow { port, presence: show::NOT_PRESENT.to_string() }];
            println!("{}", show::presence_table(&rows));
            return Ok(ExitCode::FAILURE);
        };
        let db = SonicDb::connect(&ns).await?;
        let mut view = SfpShow::new(db);
        let rows = view.presence_report(&[port]).await?;
        println!("{}", show::presence_table(&rows));
        return Ok(ExitCode::SUCCESS);
    }

    let mut rows = Vec::new();
    for ns in &namespaces {
        debug!(namespace = ns.label(), "reading transceiver presence");
        let db = SonicDb::connect(ns).await?;
        let mut view = SfpShow::new(db);
        let ports = view.front_panel_ports().await?;
        rows.extend(view.presence_report(&ports).await?);
    }
    rows.sort_by(|a, b| natsort::compare(&a.port, &b.port));
    println!("{}", show::presence_table(&rows));
    Ok(ExitCode::SUCCESS)
}

/// Picks the namespace owning a port.
///
/// With a single candidate (single-ASIC, or an explicit `--namespace`) no
/// probing happens; the read itself reports "not detected" when the port is
/// unknown there. With several candidates the port table of each is probed,
/// and a port found nowhere comes back as `None`.
async fn resolve_port_namespace(
    namespaces: &[Namespace],
    port: &str,
) -> anyhow::Result<Option<Namespace>> {
    if let [only] = namespaces {
        return Ok(Some(only.clone()));
    }
    for ns in namespaces {
        let db = SonicDb::connect(ns).await?;
        let mut view = SfpShow::new(db);
        if view.port_exists(port).await? {
            debug!(port, namespace = ns.label(), "resolved port namespace");
            return Ok(Some(ns.clone()));
        }
    }
    Ok(None)
}

fn print_eeprom(report: &[(String, String)]) {
    println!("{}", show::format_eeprom_report(report));
}
