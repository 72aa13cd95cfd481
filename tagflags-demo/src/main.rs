use std::{io, process::ExitCode};

use anyhow::Context as _;
use joinery::JoinableIterator as _;
use tagflags::{Error, Flags, LoadedArguments};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

const USAGE: &str = "usage: tagflags-demo [options] [args ...]";

#[derive(Flags, Debug, Default)]
struct Options {
    #[flags("-h, --help")]
    help: bool,

    #[flags("-q, --quiet             suppress output")]
    quiet: bool,

    #[flags("-v, --verbose           be more verbose (may be given multiple times)")]
    verbose: i32,

    #[flags("-n, --num=NUMBER        specify number")]
    num: i64,

    #[flags("-u, --unsigned=NUMBER   specify number >= 0")]
    unsigned: u64,

    #[flags("-f, --file=FILE         specify filename")]
    file: String,
}

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("failed to install the log subscriber")
}

fn main() -> anyhow::Result<ExitCode> {
    init_logging()?;

    let arguments = LoadedArguments::from_env();
    if arguments.args().is_empty() {
        println!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    }

    let mut options = Options::default();
    let args = match arguments.parse_into(&mut options) {
        Ok(args) => args,
        Err(Error::Parse(error)) => {
            eprintln!("error: {error}");
            return Ok(ExitCode::from(2));
        }
        Err(error) => return Err(error).context("the demo's options are malformed"),
    };

    tracing::debug!(program = arguments.argv0(), "parsed command line");

    println!("opts == {options:#?}");
    println!(
        "args == [{}]",
        args.iter().map(|arg| format!("{arg:?}")).join_with(", ")
    );

    if options.help {
        println!("{USAGE}");
        tagflags::print_help::<Options>()?;
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
