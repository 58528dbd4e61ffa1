use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::reports::generate_record;
use clap::Parser;
use ohno::IntoAppError;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Repository owner (user or organization)
    #[arg(value_name = "OWNER")]
    pub owner: String,

    /// Repository name
    #[arg(value_name = "REPO")]
    pub repo: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Look up a single repository and print its statistics.
///
/// Lookup failures are returned to the caller as-is; nothing is retried.
pub async fn lookup_repository<H: Host>(host: &mut H, args: &LookupArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    let record = common
        .client
        .fetch_repository(&args.owner, &args.repo)
        .await
        .into_app_err_with(|| format!("looking up {}/{}", args.owner, args.repo))?;

    let mut output = String::new();
    generate_record(&record, common.use_colors_for_output(), &mut output)?;
    let _ = write!(host.output(), "{output}");

    Ok(())
}
