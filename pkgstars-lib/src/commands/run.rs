//! Command dispatch logic for pkgstars

use super::{InitArgs, LookupArgs, SweepArgs, init_config, lookup_repository, process_registry};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "pkgstars", author, version, long_about = None)]
#[command(about = "Collect GitHub repository statistics for the packages of a registry")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: PkgstarsSubcommand,
}

#[derive(Subcommand, Debug)]
enum PkgstarsSubcommand {
    /// Show the statistics of a single repository
    Lookup(Box<LookupArgs>),
    /// Fetch statistics for every GitHub-hosted package of a registry
    Sweep(Box<SweepArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        PkgstarsSubcommand::Lookup(lookup_args) => lookup_repository(host, lookup_args).await,
        PkgstarsSubcommand::Sweep(sweep_args) => process_registry(host, sweep_args).await,
        PkgstarsSubcommand::Init(init_args) => init_config(host, init_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sweep_arguments() {
        let cli = Cli::parse_from([
            "pkgstars",
            "sweep",
            "--registry",
            "General",
            "--max-candidates",
            "10",
            "--delay-secs",
            "-1",
            "--progress",
        ]);

        match cli.command {
            PkgstarsSubcommand::Sweep(args) => {
                assert_eq!(args.registry, "General");
                assert_eq!(args.max_candidates, Some(10));
                assert_eq!(args.delay_secs, Some(-1.0));
                assert!(args.progress);
                assert!(args.output.is_none());
            }
            other => panic!("expected sweep, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_lookup_arguments() {
        let cli = Cli::parse_from(["pkgstars", "lookup", "JuliaLang", "Julia", "--github-token", "t0ken"]);

        match cli.command {
            PkgstarsSubcommand::Lookup(args) => {
                assert_eq!(args.owner, "JuliaLang");
                assert_eq!(args.repo, "Julia");
                assert_eq!(args.common.github_token.as_deref(), Some("t0ken"));
            }
            other => panic!("expected lookup, got {other:?}"),
        }
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    async fn test_run_init_writes_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("pkgstars.toml");
        let mut host = TestHost::default();

        run(&mut host, ["pkgstars", "init", path.to_str().unwrap()]).await.unwrap();

        assert!(path.exists());
        assert!(host.output_str().contains("Generated default configuration file"));
    }
}
