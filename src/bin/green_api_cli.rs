//! green-api-cli - smoke checks against a running Green Matchers backend
//!
//! Usage:
//!   green-api-cli health                          Probe the /health endpoint
//!   green-api-cli stats                           Fetch dashboard counters
//!   green-api-cli login <username> <password>     Obtain a session token
//!   green-api-cli search <skill> [skill...]       Keyword job search
//!   green-api-cli translate <lang> <text...>      Translate a phrase

use anyhow::Context;
use green_matchers_api::types::{JobSearchRequest, LoginRequest, TranslateRequest};
use green_matchers_api::{ApiClient, ApiClientBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "health" => cmd_health(&args[2..]).await,
        "stats" => cmd_stats(&args[2..]).await,
        "login" => cmd_login(&args[2..]).await,
        "search" => cmd_search(&args[2..]).await,
        "translate" => cmd_translate(&args[2..]).await,
        "version" | "--version" | "-V" => {
            println!("green-api-cli {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"green-api-cli - Green Matchers backend smoke checks

USAGE:
    green-api-cli <COMMAND> [ARGS]

COMMANDS:
    health                          Probe the /health endpoint
    stats                           Fetch dashboard counters
    login <username> <password>     Obtain a session token
    search <skill> [skill...]       Keyword job search (token via GREEN_API_TOKEN)
    translate <lang> <text...>      Translate a phrase (token via GREEN_API_TOKEN)
    version                         Show version information
    help                            Show this help message

ENVIRONMENT:
    GREEN_API_BASE_URL              Backend base URL (default http://localhost:8000)
    GREEN_API_TIMEOUT_SECS          Request timeout in seconds
    GREEN_API_TOKEN                 Session token for authenticated commands"#
    );
}

fn build_client() -> anyhow::Result<ApiClient> {
    let mut builder = ApiClientBuilder::new();
    if let Ok(token) = std::env::var("GREEN_API_TOKEN") {
        if !token.trim().is_empty() {
            builder = builder.token(token);
        }
    }
    builder.build().context("failed to build API client")
}

async fn cmd_health(_args: &[String]) -> anyhow::Result<()> {
    let client = build_client()?;
    let health = client.system().health().await?;
    println!("{}", serde_json::to_string_pretty(&health)?);
    Ok(())
}

async fn cmd_stats(_args: &[String]) -> anyhow::Result<()> {
    let client = build_client()?;
    let stats = client.system().stats().await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

async fn cmd_login(args: &[String]) -> anyhow::Result<()> {
    let (username, password) = match args {
        [u, p, ..] => (u.as_str(), p.as_str()),
        _ => anyhow::bail!("usage: green-api-cli login <username> <password>"),
    };

    let client = build_client()?;
    let session = client
        .auth()
        .login(&LoginRequest::new(username, password))
        .await?;
    println!("{}", session.access_token);
    Ok(())
}

async fn cmd_search(args: &[String]) -> anyhow::Result<()> {
    if args.is_empty() {
        anyhow::bail!("usage: green-api-cli search <skill> [skill...]");
    }

    let client = build_client()?;
    let request = JobSearchRequest::new(args.iter().map(String::as_str));
    let results = client.jobs().search(&request).await?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

async fn cmd_translate(args: &[String]) -> anyhow::Result<()> {
    let (lang, text) = match args {
        [lang, rest @ ..] if !rest.is_empty() => (lang.as_str(), rest.join(" ")),
        _ => anyhow::bail!("usage: green-api-cli translate <lang> <text...>"),
    };

    let client = build_client()?;
    let result = client
        .translate()
        .translate(&TranslateRequest::new(text, lang))
        .await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
