use anyhow::Context;
use clap::{ArgAction, Parser};
use dnsprobe_application::use_cases::LookupUseCase;
use dnsprobe_domain::{CliOverrides, DetailLevel, DnsQuery, RecordType};
use dnsprobe_infrastructure::dns::create_transport;
use tracing::{error, info};

mod bootstrap;
mod render;

#[derive(Parser)]
#[command(name = "dnsprobe")]
#[command(version)]
#[command(about = "dnsprobe - send a single DNS query over UDP and show the decoded reply")]
struct Cli {
    /// Hostname to look up
    hostname: String,

    /// Record type (A, AAAA, CNAME, MX, TXT or TYPEnnn)
    #[arg(short = 't', long, default_value = "A")]
    record_type: RecordType,

    /// DNS server address or hostname
    #[arg(short = 's', long)]
    server: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Seconds to wait for send and for receive
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Clear the recursion-desired flag
    #[arg(long)]
    no_recurse: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Show the lookup log (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            server: self.server.clone(),
            port: self.port,
            timeout_secs: self.timeout,
            recursion_desired: self.no_recurse.then_some(false),
            log_level: self.log_level.clone(),
        }
    }

    fn detail(&self) -> Option<DetailLevel> {
        match self.verbose {
            0 => None,
            1 => Some(DetailLevel::Info),
            2 => Some(DetailLevel::Debug),
            _ => Some(DetailLevel::Trace),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!(
        server = %config.resolver.server_label(),
        "Starting dnsprobe v{}",
        env!("CARGO_PKG_VERSION")
    );

    let transport = create_transport(&config.resolver)
        .await
        .with_context(|| format!("Cannot reach {}", config.resolver.server_label()))?;
    let use_case = LookupUseCase::new(transport.clone(), config.resolver.timeout());

    let query = DnsQuery::new(cli.hostname.as_str(), cli.record_type)
        .with_recursion(config.resolver.recursion_desired);

    let outcome = match use_case.execute(&query).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, domain = %query.domain, "Lookup failed");
            return Err(e).context(format!("Lookup of {} failed", query.domain));
        }
    };

    print!(
        "{}",
        render::render_outcome(&outcome, transport.as_ref(), cli.detail())
    );
    Ok(())
}
