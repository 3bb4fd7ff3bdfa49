//! `waymark check` command implementation.

use std::path::PathBuf;

use clap::Args;
use waymark_config::CliSettings;
use waymark_nav::{CheckReport, check_site};
use waymark_pages::{FsPageIndex, PageIndex};

use super::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Skip checking that entries point at existing pages.
    #[arg(long)]
    no_pages: bool,

    /// Print the report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::CheckFailed`] if any error-severity issue is found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let settings = CliSettings {
            source_dir: self.source_dir,
            ..Default::default()
        };
        let config = self.common.load(Some(&settings))?;
        let registry = config.navigation_registry()?;
        let redirects = config.redirect_table()?;
        tracing::info!(
            config = ?config.config_path,
            mounts = registry.len(),
            redirects = redirects.rules().len(),
            pages = !self.no_pages,
            "Checking navigation"
        );

        let index = FsPageIndex::new(config.docs_resolved.source_dir.clone());
        let pages: Option<&dyn PageIndex> = if self.no_pages { None } else { Some(&index) };
        let report = check_site(&registry, &redirects, pages)?;

        if self.json {
            output.data(&serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&output, &report);
        }

        let errors = report.errors().count();
        if errors > 0 {
            return Err(CliError::CheckFailed(errors));
        }
        output.success(&format!(
            "Checked {} mount(s) and {} redirect(s)",
            registry.len(),
            redirects.rules().len()
        ));
        Ok(())
    }
}

fn print_report(output: &Output, report: &CheckReport) {
    for issue in report.errors() {
        output.error(&format!("error: {issue}"));
    }
    for issue in report.warnings() {
        output.warning(&format!("warning: {issue}"));
    }
}
