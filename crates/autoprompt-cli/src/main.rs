//! AutoPrompt CLI - Test automation prompts from the terminal
//!
//! Thin client over the AutoPrompt HTTP API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;

use api::{AutoPromptClient, GeneratePromptRequest, HistoryRecord};
use config::Config;

#[derive(Parser)]
#[command(name = "autoprompt")]
#[command(about = "AutoPrompt CLI - Test automation prompt generation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store API key and server URL
    Login {
        /// API key (will prompt if not provided; leave empty for open servers)
        #[arg(short, long)]
        key: Option<String>,
        /// Server base URL
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Generate a prompt with the AI provider
    Generate(GenerateArgs),

    /// Print a built-in template
    Template {
        /// Template name (e.g., "web-e2e", "api", "unit")
        name: String,
    },

    /// List built-in template names
    Templates,

    /// Show stored prompts
    History {
        /// Window size in days
        #[arg(short, long, default_value = "7")]
        days: u32,
        /// Only records with this template type (e.g., "custom", "api")
        #[arg(short, long, conflicts_with_all = ["app_type", "test_type"])]
        template: Option<String>,
        /// Only records with this app type (requires --test-type)
        #[arg(long, requires = "test_type")]
        app_type: Option<String>,
        /// Only records with this test type (requires --app-type)
        #[arg(long, requires = "app_type")]
        test_type: Option<String>,
    },

    /// Show usage statistics
    Stats {
        /// Window size in days
        #[arg(short, long, default_value = "7")]
        days: u32,
    },

    /// Show current configuration
    Config,
}

#[derive(Args)]
struct GenerateArgs {
    /// Application type (e.g., web, mobile, api)
    #[arg(long)]
    app_type: String,
    /// Test type (e.g., e2e, unit, integration)
    #[arg(long)]
    test_type: String,
    /// Test framework (e.g., cypress, jest, pytest)
    #[arg(long)]
    framework: String,
    /// Feature under test
    #[arg(long)]
    feature_name: String,
    /// Programming language
    #[arg(short, long)]
    language: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    user_story: Option<String>,
    #[arg(long)]
    scenarios: Option<String>,
    #[arg(long)]
    test_data: Option<String>,
    #[arg(long)]
    environment: Option<String>,
    #[arg(long)]
    constraints: Option<String>,
    #[arg(long)]
    notes: Option<String>,
    /// Requirement (repeatable, order preserved)
    #[arg(short = 'r', long = "requirement")]
    requirements: Vec<String>,
    /// Show metadata on stderr
    #[arg(long)]
    verbose: bool,
}

impl From<GenerateArgs> for GeneratePromptRequest {
    fn from(args: GenerateArgs) -> Self {
        Self {
            app_type: args.app_type,
            test_type: args.test_type,
            framework: args.framework,
            feature_name: args.feature_name,
            programming_language: args.language,
            feature_description: args.description,
            user_story: args.user_story,
            scenarios: args.scenarios,
            test_data: args.test_data,
            environment: args.environment,
            constraints: args.constraints,
            additional_notes: args.notes,
            requirements: args.requirements,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key, url } => cmd_login(key, url).await,
        Commands::Generate(args) => cmd_generate(args).await,
        Commands::Template { name } => cmd_template(name).await,
        Commands::Templates => cmd_templates().await,
        Commands::History {
            days,
            template,
            app_type,
            test_type,
        } => cmd_history(days, template, app_type.zip(test_type)).await,
        Commands::Stats { days } => cmd_stats(days).await,
        Commands::Config => cmd_config(),
    }
}

fn client() -> Result<AutoPromptClient> {
    let config = Config::load()?;
    Ok(AutoPromptClient::new(&config.base_url, config.api_key.as_deref()))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>, url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(url) = url {
        config.base_url = url;
    }

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .allow_empty_password(true)
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = AutoPromptClient::new(&config.base_url, Some(&api_key));
    print!("Testing connection to {}... ", config.base_url);

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to AutoPrompt API. Check the URL.");
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} Configuration saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

async fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let verbose = args.verbose;
    let request = GeneratePromptRequest::from(args);
    let resp = client()?.generate(&request).await?;

    if verbose {
        // Metadata to stderr so stdout is clean for piping
        eprintln!(
            "{} {} ({} / {}) [{}]",
            "Prompt for".dimmed(),
            request.feature_name.cyan(),
            request.app_type,
            request.test_type,
            resp.template_type.green()
        );
        eprintln!("{}", "---".dimmed());
    }

    if resp.generated_prompt.starts_with("Error: ") {
        eprintln!("{} AI generation failed (recorded in history)", "⚠".yellow());
    }

    println!("{}", resp.generated_prompt);

    Ok(())
}

async fn cmd_template(name: String) -> Result<()> {
    let resp = client()?.template(&name).await?;
    println!("{}", resp.generated_prompt);
    Ok(())
}

async fn cmd_templates() -> Result<()> {
    let names = client()?.templates().await?;

    println!("{}", "Templates:".bold());
    for name in names {
        println!("  {}", name.cyan());
    }

    Ok(())
}

async fn cmd_history(
    days: u32,
    template: Option<String>,
    types: Option<(String, String)>,
) -> Result<()> {
    let client = client()?;

    let (records, scope) = match (template, types) {
        (Some(template), _) => (
            client.history_by_template(&template).await?,
            format!("template '{}'", template),
        ),
        (None, Some((app_type, test_type))) => (
            client.history_by_type(&app_type, &test_type).await?,
            format!("{} / {}", app_type, test_type),
        ),
        (None, None) => (client.history(days).await?, format!("last {} days", days)),
    };

    if records.is_empty() {
        println!("No prompts found ({}).", scope);
        return Ok(());
    }

    println!(
        "{} prompts ({}):",
        records.len().to_string().green(),
        scope.cyan()
    );
    for record in &records {
        println!("{}", format_record(record));
    }

    Ok(())
}

async fn cmd_stats(days: u32) -> Result<()> {
    let stats = client()?.stats(days).await?;

    println!("{} ({})", "Stats:".bold(), stats.period.cyan());
    println!("  Total prompts:  {}", stats.total_prompts.to_string().green());
    println!("  Recent prompts: {}", stats.recent_prompts.to_string().green());

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );

    Ok(())
}

fn format_record(record: &HistoryRecord) -> String {
    let label = record.template_type.as_deref().unwrap_or("-");
    let preview = record
        .generated_prompt
        .as_deref()
        .map(|p| truncate_string(&p.replace('\n', " "), 60))
        .unwrap_or_default();

    format!(
        "  {} {} [{}] {} ({}/{}, {} {})\n    {}",
        format!("#{}", record.id).dimmed(),
        record.created_at.dimmed(),
        label.green(),
        record.feature_name.cyan(),
        record.app_type,
        record.test_type,
        record.framework,
        record.programming_language,
        preview.dimmed()
    )
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}
