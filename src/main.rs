use citepush::cli;
use citepush::launcher::SystemLauncher;
use citepush::preferences::FilePreferences;

/// Parse arguments, set up logging and run the requested subcommand.
///
/// Errors are printed as one line, each cause appended once, and the process
/// exits with status 1.
fn main() {
    let cli_args = cli::parse_args();

    // RUST_LOG controls verbosity; quiet by default for a CLI
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let source = FilePreferences::discover(cli_args.config);
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli::run(cli_args.command, source, SystemLauncher, &mut stdout) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
