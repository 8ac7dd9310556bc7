use clap::Parser;
use tracing_subscriber::EnvFilter;

use promo_admin::cli::{Cli, Commands};
use promo_admin::commands::{run_blog, run_codes, run_config, run_init, run_stats};

/// `RUST_LOG` wins; otherwise `-v` is debug, `-vv` trace, default warn.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Codes(args) => run_codes(args, &cli),
        Commands::Stats(args) => run_stats(args, &cli),
        Commands::Blog(args) => run_blog(args, &cli),
        Commands::Init(args) => run_init(args, cli.quiet),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
