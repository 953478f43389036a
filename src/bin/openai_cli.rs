//! openai-cli: 模型查询与编辑请求的命令行工具
//!
//! Usage:
//!   openai-cli models                                   List models available to the account
//!   openai-cli model <id>                               Show one model
//!   openai-cli presets                                  List built-in model presets
//!   openai-cli edit <input> <instruction> [--model <id>]  Run an edit (deprecated endpoint)

use anyhow::{bail, Context};
use openai_rest::models::presets;
use openai_rest::{Model, OpenAiClient};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let result = match args[1].as_str() {
        "models" => cmd_models(&cancel).await,
        "model" => cmd_model(&args[2..], &cancel).await,
        "presets" => {
            cmd_presets();
            Ok(())
        }
        "edit" => cmd_edit(&args[2..], &cancel).await,
        "version" | "--version" | "-V" => {
            println!("openai-cli {}", env!("CARGO_PKG_VERSION"));
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
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"openai-cli: OpenAI REST 命令行工具

USAGE:
    openai-cli <COMMAND> [OPTIONS]

COMMANDS:
    models                                 List models available to the account
    model <id>                             Show details for one model
    presets                                List built-in model presets
    edit <input> <instruction> [--model <id>]
                                           Run an edit (deprecated endpoint)
    version                                Show version information
    help                                   Show this help message

ENVIRONMENT:
    OPENAI_API_KEY                         API key (required for network commands)
    OPENAI_ORGANIZATION_ID                 Organization id (optional, must start with org-)
    OPENAI_BASE_URL                        Override the API root
    OPENAI_HTTP_TIMEOUT_SECS               Request timeout in seconds (default 60)
    RUST_LOG                               Log filter (default warn)"#
    );
}

async fn cmd_models(cancel: &CancellationToken) -> anyhow::Result<()> {
    let client = OpenAiClient::from_env().context("failed to configure client")?;
    let mut models = client.models().list_models_with_cancel(cancel).await?;
    models.sort_by(|a, b| a.id().cmp(b.id()));
    println!("Found {} models", models.len());
    for model in &models {
        print_model_line(model);
    }
    Ok(())
}

async fn cmd_model(args: &[String], cancel: &CancellationToken) -> anyhow::Result<()> {
    let Some(id) = args.first() else {
        bail!("usage: openai-cli model <id>");
    };
    let client = OpenAiClient::from_env().context("failed to configure client")?;
    let model = client.models().retrieve_model_with_cancel(id, cancel).await?;
    print_model_line(&model);
    if let Some(root) = model.root() {
        println!("  root:   {root}");
    }
    if let Some(parent) = model.parent() {
        println!("  parent: {parent}");
    }
    for permission in model.permissions() {
        println!(
            "  permission {}: sampling={} fine_tuning={} view={}",
            permission.id.as_deref().unwrap_or("-"),
            permission.allow_sampling,
            permission.allow_fine_tuning,
            permission.allow_view,
        );
    }
    Ok(())
}

fn cmd_presets() {
    for model in presets::all() {
        println!("{:<28} {}", model.id(), model.owned_by().unwrap_or("-"));
    }
}

#[allow(deprecated)]
async fn cmd_edit(args: &[String], cancel: &CancellationToken) -> anyhow::Result<()> {
    let mut positional = Vec::new();
    let mut model = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--model" {
            let id = iter.next().context("--model requires a value")?;
            model = Some(Model::from_id(id)?);
        } else {
            positional.push(arg.as_str());
        }
    }
    let [input, instruction] = positional[..] else {
        bail!("usage: openai-cli edit <input> <instruction> [--model <id>]");
    };
    let model = model.or_else(|| presets::get(presets::DAVINCI_EDIT).cloned());

    let client = OpenAiClient::from_env().context("failed to configure client")?;
    let text = client
        .edits()
        .create_edit_text_with_cancel(input, instruction, None, None, None, model.as_ref(), cancel)
        .await?;
    println!("{}", text.trim_end());
    Ok(())
}

fn print_model_line(model: &Model) {
    let created = model
        .created_at()
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{:<40} owner: {:<20} created: {}",
        model.id(),
        model.owned_by().unwrap_or("-"),
        created
    );
}
