use clap::Parser;
use dnslookup_application::ports::LookupRequest;
use dnslookup_domain::CliOverrides;
use std::io::Write;
use tracing::debug;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "dnslookup")]
#[command(version)]
#[command(about = "Iterative DNS lookup starting from a given name server")]
struct Cli {
    /// Address of the root DNS server to start the search at
    root_server: String,

    /// Fully qualified domain name to look up
    fqdn: String,

    /// Return an IPv6 address
    #[arg(short = '6')]
    ipv6: bool,

    /// Trace the queries made and responses received (combine as -t6)
    #[arg(short = 't')]
    trace: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level for diagnostics on stderr (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Reject responses whose transaction ID differs from the query's
    #[arg(long)]
    strict_id: bool,

    /// Destination port for queries
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        port: cli.port,
        strict_transaction_id: cli.strict_id,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(
        root_server = %cli.root_server,
        fqdn = %cli.fqdn,
        ipv6 = cli.ipv6,
        trace = cli.trace,
        "Starting lookup"
    );

    let services = di::LookupServices::new(&config, &cli.root_server, cli.trace).await?;

    let request = LookupRequest::new(cli.root_server.as_str(), cli.fqdn.as_str(), cli.ipv6);
    let lines = services.lookup.execute(&request).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    Ok(())
}
