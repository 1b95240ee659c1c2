/// List the endpoints described by a WADL file or URL
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use wadl_dump::{extract_or_report, render, Error, Resolver};

#[derive(Parser)]
#[command(about = "Extract endpoints from a WADL file or URL")]
struct Args {
    /// Path to the WADL file or URL
    source: String,

    /// Give up on a remote fetch after this many seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Exit with a non-zero status if the document could not be fetched or parsed
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    colored::control::set_override(true);

    let mut resolver = Resolver::new();
    if let Some(timeout) = args.timeout {
        resolver = resolver.with_timeout(Duration::from_secs(timeout));
    }

    let source = match resolver.resolve(&args.source) {
        Ok(source) => source,
        Err(e) => {
            println!("{}", Error::from(e));
            println!("Failed to retrieve WADL from URL.");
            return exit_code(args.strict, true);
        }
    };

    let (endpoints, error) = extract_or_report(source.path());

    if let Err(e) = source.close() {
        log::warn!("Failed to remove temporary file: {}", e);
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = render(&endpoints, &mut stdout) {
        log::error!("Failed to write output: {}", e);
    }

    exit_code(args.strict, error.is_some())
}

fn exit_code(strict: bool, failed: bool) -> ExitCode {
    if strict && failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
