use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use petmatch::connector::api::{Container, ContainerConfig, Router};
use petmatch::Commands;

#[derive(Parser)]
#[command(name = "petmatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, default_value = "~/.petmatch")]
    data_dir: String,

    /// Keep settings in memory for this run only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        data_dir: expand_tilde(&cli.data_dir),
        ephemeral: cli.ephemeral,
    })
    .await?;
    let router = Router::new(&container);

    let output = router.route(cli.command).await?;
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    let home = std::env::var_os("HOME").map(|h| h.to_string_lossy().to_string());
    expand_tilde_with(path, home.as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    match home {
        Some(home) if path == "~" => home.to_string(),
        Some(home) if path.starts_with("~/") => path.replacen('~', home, 1),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use petmatch::{ConfigAction, OutputFormat};

    #[test]
    fn recommend_requires_an_answer() {
        assert!(Cli::try_parse_from(["petmatch", "recommend"]).is_err());
    }

    #[test]
    fn recommend_collects_repeated_answers() {
        let cli = Cli::try_parse_from([
            "petmatch",
            "recommend",
            "-a",
            "living_space=small_apt",
            "--answer",
            "allergies=no",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Recommend { answers, format } => {
                assert_eq!(answers, ["living_space=small_apt", "allergies=no"]);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn config_set_rejects_prompt_with_default_prompt() {
        let res = Cli::try_parse_from([
            "petmatch",
            "config",
            "set",
            "--system-prompt",
            "x",
            "--default-prompt",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["petmatch", "config", "show", "--ephemeral", "-v"]).unwrap();
        assert!(cli.ephemeral);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Show
            }
        ));
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = Some("/home/pet");
        assert_eq!(expand_tilde_with("~/.petmatch", home), "/home/pet/.petmatch");
        assert_eq!(expand_tilde_with("~", home), "/home/pet");
        assert_eq!(expand_tilde_with("/tmp/x", home), "/tmp/x");
        assert_eq!(expand_tilde_with("~/.petmatch", None), "~/.petmatch");
    }
}
