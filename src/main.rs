mod cli;
mod error;
mod fmt;
mod history;
mod models;
mod settings;
mod submit;
mod template;
mod validator;
mod workbook;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            api_url,
            token,
            data_dir,
        } => cli::init::run(api_url, token, data_dir),
        Commands::Validate { file, report } => cli::validate::run(&file, report.as_deref()),
        Commands::Upload {
            file,
            create_hierarchy,
            overwrite,
            dry_run,
            force,
            api_url,
        } => cli::upload::run(
            &file,
            create_hierarchy,
            overwrite,
            dry_run,
            force,
            api_url.as_deref(),
        ),
        Commands::Sample { output } => cli::sample::run(output.as_deref()),
        Commands::History => cli::history::run(),
        Commands::Status => cli::status::run(),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
