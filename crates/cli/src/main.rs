use clap::{Parser, Subcommand, ValueEnum};
use smsdigest::payload::{self, InboundEvent, MissingFieldPolicy};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "smsdigest")]
#[command(about = "Print customer info and message text from inbound SMS webhook payloads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by the commands that read a payload.
#[derive(clap::Args)]
struct PayloadArgs {
    /// Config file path (default: SMSDIGEST_CONFIG_PATH or ~/.smsdigest/config.json)
    #[arg(long, short, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Payload JSON file; "-" reads stdin. Default: payload.path from config, else the built-in example.
    #[arg(long, short, value_name = "PATH")]
    file: Option<PathBuf>,

    /// What to do when a field is absent (default from config or SMSDIGEST_MISSING_FIELDS, else error)
    #[arg(long, value_enum)]
    missing_fields: Option<PolicyArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Error,
    Empty,
}

impl From<PolicyArg> for MissingFieldPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Error => MissingFieldPolicy::Error,
            PolicyArg::Empty => MissingFieldPolicy::Empty,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show version
    Version,

    /// Create the configuration directory with a default config and the example payload.
    Init {
        /// Config file path (default: SMSDIGEST_CONFIG_PATH or ~/.smsdigest/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Print the customer summary (name, phone, email, campaign).
    Summary(PayloadArgs),

    /// Print the message text exactly as received.
    Message(PayloadArgs),

    /// Print the customer summary followed by the message text.
    Show(PayloadArgs),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Version) => {
            println!("smsdigest {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Commands::Init { config }) => run_init(config),
        Some(Commands::Summary(args)) => run_summary(args),
        Some(Commands::Message(args)) => run_message(args),
        Some(Commands::Show(args)) => run_show(args),
        None => {
            println!("Run with --help for usage");
            Ok(())
        }
    };
    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run_init(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = config_path.unwrap_or_else(smsdigest::config::default_config_path);
    let dir = smsdigest::init::init_config_dir(&path)?;
    println!("initialized configuration at {}", dir.display());
    Ok(())
}

fn run_summary(args: PayloadArgs) -> anyhow::Result<()> {
    let (event, policy) = load(args)?;
    println!("{}", payload::format_customer_summary_with(&event, policy)?);
    Ok(())
}

fn run_message(args: PayloadArgs) -> anyhow::Result<()> {
    let (event, _) = load(args)?;
    println!("{}", payload::get_message_text(&event));
    Ok(())
}

fn run_show(args: PayloadArgs) -> anyhow::Result<()> {
    let (event, policy) = load(args)?;
    println!("{}", payload::format_customer_summary_with(&event, policy)?);
    println!("{}", payload::get_message_text(&event));
    Ok(())
}

/// Resolve config and policy, then read the payload from --file, stdin, config, or the built-in example.
fn load(args: PayloadArgs) -> anyhow::Result<(InboundEvent, MissingFieldPolicy)> {
    let (config, config_path) = smsdigest::config::load_config(args.config)?;
    let policy = args
        .missing_fields
        .map(MissingFieldPolicy::from)
        .unwrap_or_else(|| smsdigest::config::resolve_missing_field_policy(&config));

    let file = args
        .file
        .or_else(|| smsdigest::config::resolve_payload_path(&config, &config_path));
    let event = match file {
        Some(f) if f == Path::new("-") => {
            log::debug!("reading payload from stdin");
            payload::read_event(std::io::stdin().lock(), policy)?
        }
        Some(f) => payload::load_event(&f, policy)?,
        None => {
            log::debug!("no payload file given, using the built-in example");
            payload::sample_event()
        }
    };
    if !event.is_sms_received() {
        log::warn!("payload event is {:?}, not {:?}", event.event, payload::SMS_RECEIVED);
    }
    Ok((event, policy))
}
