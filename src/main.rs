use std::path::PathBuf;

use clap::Parser;
use env_logger::{Env, WriteStyle};
use log::{error, info, warn};

use proxy_omega::models::ProxyScheme;
use proxy_omega::{convert_file, ConvertError, Settings};

/// Convert a plain proxy list (host:port[:username:password]) into SwitchyOmega options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Proxy list to read [default: proxies.txt]
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Options file to write [default: OmegaOptions.json]
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Path to a TOML settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Prefix for generated profile names
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// Proxy scheme: http, https, socks4 or socks5
    #[arg(long, value_name = "SCHEME")]
    scheme: Option<ProxyScheme>,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Force coloured log output
    #[arg(long)]
    color: bool,
}

impl Args {
    /// Settings file values, overridden by whatever was given on the command line.
    fn settings(&self) -> Result<Settings, ConvertError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(input) = &self.input {
            settings.input = input.clone();
        }
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        if let Some(prefix) = &self.prefix {
            settings.profile_prefix = prefix.clone();
        }
        if let Some(scheme) = self.scheme {
            settings.scheme = scheme;
        }
        if self.strict {
            settings.strict = true;
        }
        Ok(settings)
    }
}

fn init_logger(args: &Args) {
    let level = if args.verbose { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(level));
    if args.color {
        builder.write_style(WriteStyle::Always);
    }
    builder.init();
}

fn run(args: &Args) -> Result<(), ConvertError> {
    let settings = args.settings()?;
    let report = convert_file(&settings)?;

    info!(
        "Converted {} proxy profile(s) from {} into {}",
        report.converted,
        report.input.display(),
        report.output.display()
    );
    if !report.skipped.is_empty() {
        warn!("Skipped {} malformed line(s):", report.skipped.len());
        for skipped in &report.skipped {
            warn!("  {}", skipped);
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(&args);

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
