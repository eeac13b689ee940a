use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = chartopts_cli::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match chartopts_cli::run(&args) {
        Ok(js) => println!("{}", js),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
