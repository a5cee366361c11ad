//! mcpconf - MCP client config generator
//!
//! Usage:
//!   mcpconf clients                   # List supported clients
//!   mcpconf show cursor               # Show one client
//!   mcpconf render --client cursor \
//!       --name docs --url https://example.com/mcp
//!   mcpconf render --all --name fs -- npx -y @mcp/fs
//!   mcpconf demo                      # Render a sample server

mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcpconf_core::prelude::*;

use crate::config::{UserConfig, load_server_file, parse_key_values};

#[derive(Parser)]
#[command(name = "mcpconf")]
#[command(about = "Generate MCP server config for every client", long_about = None)]
struct Cli {
    /// Path to config file (default: <config dir>/mcpconf/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported clients
    #[command(alias = "ls")]
    Clients {
        /// Only clients that accept this transport (remote/http, local/stdio)
        #[arg(long, short)]
        transport: Option<String>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        format: ListFormat,
    },

    /// Show details for one client
    Show {
        /// Client slug, e.g. claude-desktop
        slug: String,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        format: ListFormat,
    },

    /// Render a server's config for one or more clients
    Render(Box<RenderArgs>),

    /// Render a sample server for a handful of popular clients
    Demo {
        /// Use the sample stdio server instead of the HTTP one
        #[arg(long)]
        stdio: bool,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum ListFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum RenderFormat {
    /// Config text, ready to paste
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Args)]
struct RenderArgs {
    /// Target client slug (repeatable; defaults to `clients` from config)
    #[arg(long = "client", short, value_name = "SLUG")]
    clients: Vec<String>,
    /// Render for every client that supports the server's transport
    #[arg(long, conflicts_with = "clients")]
    all: bool,
    /// Server preset name from the config file
    #[arg(long, short)]
    server: Option<String>,
    /// Read the server description from a .json or .toml file
    #[arg(long, short)]
    file: Option<PathBuf>,
    /// Server name (inline definition)
    #[arg(long, short)]
    name: Option<String>,
    /// HTTP URL (inline remote server)
    #[arg(long, short)]
    url: Option<String>,
    /// HTTP header (KEY=VALUE)
    #[arg(long = "header", value_name = "KEY=VALUE")]
    headers: Vec<String>,
    /// Environment variable for stdio servers (KEY=VALUE)
    #[arg(long, value_name = "KEY=VALUE")]
    env: Vec<String>,
    /// Stdio command and arguments (after --)
    #[arg(last = true)]
    command: Vec<String>,
    /// Output format
    #[arg(short = 'o', long, default_value = "text")]
    format: RenderFormat,
}

fn main() -> Result<()> {
    // Logs go to stderr so rendered config on stdout stays copy-pasteable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcpconf=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Clients { transport, format } => run_clients(transport.as_deref(), format),
        Commands::Show { slug, format } => run_show(&slug, format),
        Commands::Render(args) => {
            let user_config = UserConfig::load(cli.config.as_deref())?;
            run_render(*args, &user_config)
        }
        Commands::Demo { stdio } => {
            run_demo(stdio);
            Ok(())
        }
    }
}

fn run_clients(transport: Option<&str>, format: ListFormat) -> Result<()> {
    let clients: Vec<&ClientDescriptor> = match transport {
        Some(t) => clients_supporting(t.parse::<TransportKind>()?),
        None => list_clients().iter().collect(),
    };

    match format {
        ListFormat::Table => print_clients_table(&clients),
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&clients)?),
    }
    Ok(())
}

fn run_show(slug: &str, format: ListFormat) -> Result<()> {
    let client = find_client(slug).ok_or_else(|| TransformError::unknown_client(slug))?;

    match format {
        ListFormat::Table => {
            println!("Name:     {}", client.display_name);
            println!("Slug:     {}", client.slug);
            println!("Format:   {}", client.format);
            println!("Remote:   {}", yes_no(client.supports_remote));
            println!("Local:    {}", yes_no(client.supports_local));
            println!("Docs:     {}", client.docs_url.unwrap_or("-"));
        }
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(client)?),
    }
    Ok(())
}

fn run_render(args: RenderArgs, user_config: &UserConfig) -> Result<()> {
    let server = resolve_server(&args, user_config)?;

    let outcomes: Vec<(&ClientDescriptor, Result<TransformResult, TransformError>)> = if args.all
    {
        clients_supporting(server.transport())
            .into_iter()
            .map(|client| (client, transform(&server, client.slug)))
            .collect()
    } else {
        let slugs = if args.clients.is_empty() {
            user_config.default_clients()
        } else {
            args.clients.clone()
        };
        if slugs.is_empty() {
            anyhow::bail!(
                "No target clients. Pass --client <slug>, use --all, or set `clients` in the config file"
            );
        }

        let mut outcomes = Vec::with_capacity(slugs.len());
        for slug in &slugs {
            let client = find_client(slug).ok_or_else(|| TransformError::unknown_client(slug))?;
            outcomes.push((client, transform(&server, slug)));
        }
        outcomes
    };

    if let [(client, Err(e))] = outcomes.as_slice() {
        anyhow::bail!("Failed to render config for {}: {e}", client.display_name);
    }

    match args.format {
        RenderFormat::Text => print_render_text(&outcomes),
        RenderFormat::Json => print_render_json(&outcomes)?,
    }

    let failed = outcomes.iter().filter(|(_, r)| r.is_err()).count();
    if failed > 0 {
        anyhow::bail!(
            "{} of {} clients could not render this server",
            failed,
            outcomes.len()
        );
    }
    Ok(())
}

/// Pick the server: `--file`, then `--server`, then inline flags.
fn resolve_server(args: &RenderArgs, user_config: &UserConfig) -> Result<McpServer> {
    if let Some(path) = &args.file {
        tracing::debug!("Reading server from {}", path.display());
        return load_server_file(path);
    }

    if let Some(preset) = &args.server {
        return user_config
            .server(preset)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Server preset not found in config: {}", preset));
    }

    let name = args
        .name
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Missing server: pass --file, --server, or --name"))?;

    match (&args.url, args.command.split_first()) {
        (Some(_), Some(_)) => {
            anyhow::bail!("Pass either --url (remote) or a command after -- (local), not both")
        }
        (Some(url), None) => {
            if !args.env.is_empty() {
                anyhow::bail!("--env only applies to local (stdio) servers");
            }
            Ok(McpServer::http(
                name.as_str(),
                url.as_str(),
                parse_key_values(&args.headers, "header")?,
            ))
        }
        (None, Some((command, rest))) => {
            if !args.headers.is_empty() {
                anyhow::bail!("--header only applies to remote (HTTP) servers");
            }
            Ok(McpServer::stdio(
                name.as_str(),
                command.as_str(),
                rest.to_vec(),
                parse_key_values(&args.env, "env")?,
            ))
        }
        (None, None) => anyhow::bail!("Missing transport: pass --url <URL> or -- <command> [args...]"),
    }
}

fn run_demo(stdio: bool) {
    const DEMO_CLIENTS: [&str; 6] = [
        "claude-desktop",
        "cursor",
        "vs-code",
        "windsurf",
        "claude-code",
        "cline",
    ];

    let server = if stdio {
        let mut env = indexmap::IndexMap::new();
        env.insert("API_KEY".to_string(), "secret".to_string());
        McpServer::stdio(
            "my-server",
            "npx",
            vec!["-y".to_string(), "@example/mcp-server".to_string()],
            env,
        )
    } else {
        let mut headers = indexmap::IndexMap::new();
        headers.insert(
            "Authorization".to_string(),
            "Bearer YOUR_API_KEY".to_string(),
        );
        McpServer::http("playbooks", "https://playbooks.com/api/mcp", headers)
    };

    let rule = "=".repeat(60);
    for slug in DEMO_CLIENTS {
        println!();
        println!("{rule}");
        println!("Client: {slug}");
        println!("{rule}");

        match transform(&server, slug) {
            Ok(result) => {
                println!("Format: {}", result.format);
                println!();
                println!("{}", result.config);
            }
            Err(e) => println!("Error: {e}"),
        }
    }
}

fn print_clients_table(clients: &[&ClientDescriptor]) {
    if clients.is_empty() {
        println!("No clients match.");
        return;
    }

    println!(
        "{:<22} {:<24} {:<6} {:<7} {:<6}",
        "Slug", "Name", "Format", "Remote", "Local"
    );
    println!("{}", "-".repeat(69));

    for client in clients {
        println!(
            "{:<22} {:<24} {:<6} {:<7} {:<6}",
            client.slug,
            client.display_name,
            client.format,
            yes_no(client.supports_remote),
            yes_no(client.supports_local)
        );
    }
}

fn print_render_text(outcomes: &[(&ClientDescriptor, Result<TransformResult, TransformError>)]) {
    // A single target prints bare config so it can be piped straight into a file
    if let [(_, Ok(result))] = outcomes {
        println!("{}", result.config);
        return;
    }

    for (i, (client, outcome)) in outcomes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match outcome {
            Ok(result) => {
                println!("# {} ({}, {})", client.display_name, client.slug, result.format);
                println!("{}", result.config);
            }
            Err(e) => {
                println!("# {} ({})", client.display_name, client.slug);
                println!("# Error: {e}");
            }
        }
    }
}

fn print_render_json(
    outcomes: &[(&ClientDescriptor, Result<TransformResult, TransformError>)],
) -> Result<()> {
    let output: Vec<_> = outcomes
        .iter()
        .map(|(client, outcome)| match outcome {
            Ok(result) => serde_json::to_value(result),
            Err(e) => Ok(serde_json::json!({
                "client": client,
                "error": e.to_string(),
            })),
        })
        .collect::<Result<_, _>>()?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn render_args(args: &[&str]) -> RenderArgs {
        let mut argv = vec!["mcpconf", "render"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Render(args) => *args,
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn render_http_parses() {
        let args = render_args(&[
            "--client",
            "cursor",
            "--name",
            "docs",
            "--url",
            "https://example.com/mcp",
            "--header",
            "Authorization=Bearer x",
        ]);
        assert_eq!(args.clients, vec!["cursor"]);
        assert_eq!(args.headers, vec!["Authorization=Bearer x"]);
    }

    #[test]
    fn render_stdio_command_after_separator() {
        let args = render_args(&["--name", "fs", "--", "npx", "-y", "@mcp/fs"]);
        assert_eq!(args.command, vec!["npx", "-y", "@mcp/fs"]);
    }

    #[test]
    fn render_all_conflicts_with_client() {
        let result = Cli::try_parse_from(["mcpconf", "render", "--all", "--client", "cursor"]);
        assert!(result.is_err());
    }

    #[test]
    fn clients_transport_filter_parses() {
        let cli = Cli::try_parse_from(["mcpconf", "clients", "--transport", "stdio", "-o", "json"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Clients { .. }));
    }

    #[test]
    fn resolve_inline_http_server() {
        let args = render_args(&[
            "--name",
            "docs",
            "--url",
            "https://example.com/mcp",
            "--header",
            "X-Key=1",
        ]);
        let server = resolve_server(&args, &UserConfig::default()).unwrap();
        match server {
            McpServer::Http { name, url, headers } => {
                assert_eq!(name, "docs");
                assert_eq!(url, "https://example.com/mcp");
                assert_eq!(headers.get("X-Key").map(String::as_str), Some("1"));
            }
            other => panic!("expected http server, got {other:?}"),
        }
    }

    #[test]
    fn resolve_inline_stdio_server() {
        let args = render_args(&["--name", "fs", "--env", "ROOT=/tmp", "--", "npx", "-y"]);
        let server = resolve_server(&args, &UserConfig::default()).unwrap();
        match server {
            McpServer::Stdio {
                command, args, env, ..
            } => {
                assert_eq!(command, "npx");
                assert_eq!(args, vec!["-y"]);
                assert_eq!(env.get("ROOT").map(String::as_str), Some("/tmp"));
            }
            other => panic!("expected stdio server, got {other:?}"),
        }
    }

    #[test]
    fn resolve_rejects_url_and_command() {
        let args = render_args(&["--name", "x", "--url", "https://a", "--", "npx"]);
        assert!(resolve_server(&args, &UserConfig::default()).is_err());
    }

    #[test]
    fn resolve_requires_transport() {
        let args = render_args(&["--name", "x"]);
        let err = resolve_server(&args, &UserConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Missing transport"));
    }

    #[test]
    fn resolve_preset_wins_over_inline() {
        let config = UserConfig::parse_str(
            "[[servers]]\ntype = \"http\"\nname = \"docs\"\nurl = \"https://preset.example.com\"\n",
        )
        .unwrap();
        let args = render_args(&["--server", "docs", "--name", "inline", "--url", "https://x"]);

        let server = resolve_server(&args, &config).unwrap();
        assert_eq!(server.name(), "docs");
    }

    #[test]
    fn resolve_missing_preset_fails() {
        let args = render_args(&["--server", "nope"]);
        let err = resolve_server(&args, &UserConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Server preset not found"));
    }
}
