use std::env;
use std::io::{self, Write};

use token_lcs::cli::{parse_max_cells, render, Invocation, MAX_CELLS_ENV};
use token_lcs::error::CliError;
use token_lcs::LcsEngineBuilder;

fn main() {
    #[cfg(feature = "tracing")]
    init_logging();

    match run() {
        Ok(out) => {
            let mut stdout = io::stdout().lock();
            if let Err(err) = stdout.write_all(&out).and_then(|_| stdout.flush()) {
                eprintln!("lcs: failed to write output: {err}");
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("lcs: {err}");
            if err.exit_code() == 2 {
                print_usage();
            }
            std::process::exit(err.exit_code());
        }
    }
}

fn run() -> Result<Vec<u8>, CliError> {
    let inv = Invocation::parse(env::args_os().skip(1))?;

    let env_limit = env::var(MAX_CELLS_ENV).ok();
    let max_cells = parse_max_cells(env_limit.as_deref())?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        len1 = inv.seq1.len(),
        len2 = inv.seq2.len(),
        max_cells = ?max_cells,
        "parsed invocation"
    );

    let common = LcsEngineBuilder::new(&inv.seq1, &inv.seq2)
        .with_max_cells_opt(max_cells)
        .build()
        .run()?;

    Ok(render(&common))
}

#[cfg(feature = "tracing")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn print_usage() {
    eprintln!(
        "\
Usage: lcs <len1> <len2> <tokens1...> <tokens2...>

Prints the longest common subsequence of the two token lists: the token
count on the first line, the tokens space-separated on the second.

Environment:
  {MAX_CELLS_ENV}=<N>    Refuse inputs whose table would exceed N cells
  RUST_LOG=<filter>      Log verbosity on stderr (default: warn)

Example:
  lcs 3 2 a b c a c
"
    );
}
