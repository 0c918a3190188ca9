use artgen::cli::{self, Args};
use clap::Parser;

/// Load a `.env` file from the working directory, if there is one.
///
/// Existing environment variables are not overridden.
fn load_env() {
    // dotenv::dotenv() returns Err if .env doesn't exist, which is fine
    let _ = dotenv::dotenv();
}

/// Send logs to stderr so art on stdout stays clean.
/// `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    // Load .env file before anything else
    load_env();

    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_env_var_not_overridden() {
        std::env::set_var("ARTGEN_TEST_EXISTING_VAR", "from_shell");
        super::load_env();
        assert_eq!(
            std::env::var("ARTGEN_TEST_EXISTING_VAR").unwrap(),
            "from_shell",
            "Existing env vars should not be overridden by dotenv"
        );
        std::env::remove_var("ARTGEN_TEST_EXISTING_VAR");
    }
}
