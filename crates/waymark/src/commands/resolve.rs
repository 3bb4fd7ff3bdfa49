//! `waymark resolve` command implementation.

use clap::Args;

use super::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Requested path (e.g., /docs/). Matched exactly.
    path: String,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NoRedirect`] if no rule matches.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.common.load(None)?;
        let redirects = config.redirect_table()?;

        let target = redirects
            .resolve(&self.path)
            .ok_or_else(|| CliError::NoRedirect(self.path.clone()))?;
        Output::new().data(target);
        Ok(())
    }
}
