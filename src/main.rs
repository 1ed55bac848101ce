use nestdb::Shell;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging on stderr (stdout carries the replies)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("NestDB shell starting...");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut shell = Shell::new();
    shell.run(stdin.lock(), stdout.lock())?;

    info!("NestDB shell stopped");
    Ok(())
}
