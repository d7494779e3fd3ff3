mod logging;

use clap::{Parser, Subcommand};
use simple_folio::config::{self, Profile};
use simple_folio::github::{API_BASE, GitHubClient};
use simple_folio::page::Document;
use simple_folio::{generate, init, output, projects};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Static portfolio page populated from your GitHub repositories")]
#[command(long_about = "\
Static portfolio page populated from your GitHub repositories

Personal details come from an optional site.config.json in the source
directory. Projects are the user's public repositories, most recently
updated first, with featured repositories moved to the front.

site.config.json (every key optional):

  {
    \"username\": \"acme\",              # GitHub account to list
    \"name\": \"Ada Lovelace\",          # Hero heading uses the first word
    \"tagline\": \"I build engines.\",
    \"about\": \"...\",
    \"email\": \"ada@example.com\",      # Sets the contact mailto: link
    \"featured\": [\"engine\"]           # Shown first, exact names
  }

Missing or invalid config falls back to defaults. If GitHub can't be
reached the page still builds, with a notice in place of the projects.

Run 'simple-folio gen-config' to print a config with every default.")]
#[command(version)]
struct Cli {
    /// Directory containing site.config.json
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// GitHub API root
    #[arg(long, default_value = API_BASE, global = true)]
    api_base: String,

    /// Log filter directive, e.g. `info` or `simple_folio=debug`
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Populate the page and write index.html
    Build,
    /// Load and resolve site.config.json without touching the network
    Check,
    /// Fetch and print the projects that would be shown
    Projects,
    /// Print a stock site.config.json with every default filled in
    GenConfig,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match cli.command {
        Command::Build => {
            let client = GitHubClient::with_base_url(&cli.api_base)?;
            let mut page = Document::standard();
            let report = init::init(&cli.source, &client, &mut page).await?;
            let index_path = generate::write_site(&page, &cli.output)?;
            output::print_build_output(&report, &index_path);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = match config::try_load_config(&cli.source).await {
                Ok(site_config) => site_config,
                Err(err) => {
                    println!("{}: {err}, using defaults", config::CONFIG_FILE);
                    config::SiteConfig::default()
                }
            };
            output::print_profile(&Profile::resolve(&site_config));
            println!("==> Check complete");
        }
        Command::Projects => {
            let site_config = config::load_config(&cli.source).await;
            let profile = Profile::resolve(&site_config);
            let client = GitHubClient::with_base_url(&cli.api_base)?;
            let mut page = Document::standard();
            let outcome = projects::render_projects(
                &client,
                &mut page,
                &profile.username,
                &profile.featured,
            )
            .await?;
            output::print_projects(&outcome);
        }
        Command::GenConfig => {
            println!("{}", config::stock_config_json());
        }
    }

    Ok(())
}
