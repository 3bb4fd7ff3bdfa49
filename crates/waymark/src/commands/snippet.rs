//! `waymark snippet` command implementation.

use clap::Args;
use waymark_analytics::{render_script_tag, render_snippet};

use super::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the snippet command.
#[derive(Args)]
pub(crate) struct SnippetArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Wrap the snippet in a `<script>` element.
    #[arg(long)]
    tag: bool,
}

impl SnippetArgs {
    /// Execute the snippet command.
    ///
    /// # Errors
    ///
    /// Returns an error if `[analytics]` is missing or invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.common.load(None)?;
        let analytics = config
            .analytics()?
            .ok_or_else(|| CliError::Validation("[analytics] section required in config".into()))?;

        let rendered = if self.tag {
            render_script_tag(analytics)
        } else {
            render_snippet(analytics)
        };
        Output::new().data(rendered.trim_end());
        Ok(())
    }
}
