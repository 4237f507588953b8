use anyhow::Result;
use qmsim::cli;
use qmsim::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let args = cli::parse_args();
    init_tracing(args.verbosity);
    cli::run(args)
}
