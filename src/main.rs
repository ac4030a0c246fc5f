use clap::Parser;
use plasmid_analyzer::cli::{Args, Commands};
use plasmid_analyzer::commands;
use plasmid_analyzer::config::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let args = Args::parse();

    let result = match args.config.as_deref() {
        Some(path) => Config::from_path(path),
        None => Ok(Config::load()),
    }
    .and_then(|config| match args.command {
        Commands::Serve {
            host,
            port,
            max_upload_mb,
            upload_dir,
        } => commands::serve::run(config, host, port, max_upload_mb, upload_dir),
        Commands::Analyze {
            file,
            format,
            pretty,
            quiet,
        } => commands::analyze::run(&file, format, pretty, quiet),
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
