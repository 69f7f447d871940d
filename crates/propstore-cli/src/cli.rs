use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "propstore",
    about = "propstore — typed property registry console",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with store name, prompt, and seed properties
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the store name
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Start with an empty registry
    #[arg(long, global = true)]
    pub no_seed: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive console on stdin (default)
    Console(ConsoleArgs),
    /// Run each argument as one console line
    Exec(ExecArgs),
    /// Show the kind a value would be defined with
    Infer(InferArgs),
}

#[derive(Args)]
pub struct ConsoleArgs {}

#[derive(Args)]
pub struct ExecArgs {
    #[arg(required = true)]
    pub lines: Vec<String>,
}

#[derive(Args)]
pub struct InferArgs {
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_subcommand() {
        let cli = Cli::try_parse_from(["propstore"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.no_seed);
    }

    #[test]
    fn parse_console() {
        let cli = Cli::try_parse_from(["propstore", "console"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Console(_))));
    }

    #[test]
    fn parse_exec_lines() {
        let cli = Cli::try_parse_from(["propstore", "exec", "SET n=1", "GET n"]).unwrap();
        if let Some(Command::Exec(args)) = cli.command {
            assert_eq!(args.lines, vec!["SET n=1", "GET n"]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_exec_requires_lines() {
        assert!(Cli::try_parse_from(["propstore", "exec"]).is_err());
    }

    #[test]
    fn parse_infer_negative_value() {
        let cli = Cli::try_parse_from(["propstore", "infer", "-5", "abc"]).unwrap();
        if let Some(Command::Infer(args)) = cli.command {
            assert_eq!(args.values, vec!["-5", "abc"]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "propstore", "exec", "GET *", "--name", "beta", "--no-seed", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.no_seed);
        assert_eq!(cli.name.as_deref(), Some("beta"));
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::try_parse_from(["propstore", "--config", "props.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("props.toml")));
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["propstore", "--format", "json", "exec", "COUNT"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
