use filez::{actions::execute_command, commands::create_cli_command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Main entry point for the program
#[tokio::main]
async fn main() {
    // Intialize the logging subsystem; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = create_cli_command().get_matches();

    match execute_command(&matches).await {
        Ok(()) => debug!("Command completed"),
        Err(e) => {
            let exit_code = e.exit_code();
            eprintln!("ERROR: {} [{}]", e, exit_code.message());
            ::std::process::exit(exit_code.code());
        }
    }
}
