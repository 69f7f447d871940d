use std::io::{self, Write};

use anyhow::Context;
use colored::Colorize;
use propstore_console::{Console, ConsoleConfig, Flow};
use propstore_registry::{infer_kind, Registry};
use tracing::info;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let mut registry = config.build_registry();
    info!(name = registry.name(), count = registry.count(), "registry ready");

    match cli.command {
        None | Some(Command::Console(_)) => cmd_console(&mut registry, &config)?,
        Some(Command::Exec(args)) => cmd_exec(&mut registry, &config, args, &cli.format)?,
        Some(Command::Infer(args)) => cmd_infer(args, &cli.format)?,
    }

    registry.save().context("saving registry")?;
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<ConsoleConfig> {
    let mut config = match &cli.config {
        Some(path) => ConsoleConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ConsoleConfig::default(),
    };
    if let Some(name) = &cli.name {
        config.store_name = name.clone();
    }
    if cli.no_seed {
        config.seed.clear();
    }
    Ok(config)
}

fn cmd_console(registry: &mut Registry, config: &ConsoleConfig) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Console::with_config(registry, config).run(stdin.lock(), &mut stdout)?;
    Ok(())
}

fn cmd_exec(
    registry: &mut Registry,
    config: &ConsoleConfig,
    args: ExecArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    {
        let mut console = Console::with_config(registry, config);
        for line in &args.lines {
            if console.execute(line, &mut stdout)? == Flow::Exit {
                break;
            }
        }
    }

    if let OutputFormat::Json = format {
        let json = serde_json::to_string_pretty(&registry.snapshot())?;
        writeln!(stdout, "{json}")?;
    }
    Ok(())
}

fn cmd_infer(args: InferArgs, format: &OutputFormat) -> anyhow::Result<()> {
    for value in &args.values {
        let kind = infer_kind(value);
        match format {
            OutputFormat::Text => println!("{} {}", value.bold(), kind.to_string().cyan()),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "value": value, "kind": kind }))
            }
        }
    }
    Ok(())
}
