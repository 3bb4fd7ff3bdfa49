//! `waymark nav` command implementation.

use clap::Args;
use waymark_nav::{NavigationEntry, NavigationItem, NavigationTree, Sidebar};
use waymark_pages::FsPageIndex;

use super::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Mount path (e.g., /docs/). Lists mounts when omitted.
    mount: Option<String>,

    /// Resolve derived titles from the markdown sources.
    #[arg(long)]
    resolve: bool,

    /// Print as JSON.
    #[arg(long)]
    json: bool,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if the mount is unknown or the page index fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load(None)?;
        let registry = config.navigation_registry()?;

        let Some(mount) = self.mount else {
            for mount in registry.mounts() {
                output.data(mount);
            }
            return Ok(());
        };

        if self.resolve {
            let index = FsPageIndex::new(config.docs_resolved.source_dir.clone());
            let sidebar = registry.sidebar(&mount, &index)?;
            if self.json {
                output.data(&serde_json::to_string_pretty(&sidebar)?);
            } else {
                output.data(&render_sidebar(&sidebar));
            }
        } else {
            let tree = registry.load(&mount)?;
            if self.json {
                output.data(&serde_json::to_string_pretty(&tree)?);
            } else {
                output.data(&render_tree(&tree));
            }
        }
        Ok(())
    }
}

/// Indented text view of a tree in authored order.
fn render_tree(tree: &NavigationTree) -> String {
    let entry_line = |indent: &str, entry: &NavigationEntry| match entry.explicit_title() {
        Some(title) => format!("{indent}{} ({title})", tree.link(&entry.path)),
        None => format!("{indent}{}", tree.link(&entry.path)),
    };

    let mut lines = vec![tree.mount.clone()];
    for item in &tree.items {
        match item {
            NavigationItem::Entry(entry) => lines.push(entry_line("  ", entry)),
            NavigationItem::Section(section) => {
                lines.push(format!("  {}", section.title));
                lines.extend(section.children.iter().map(|e| entry_line("    ", e)));
            }
        }
    }
    lines.join("\n")
}

fn render_sidebar(sidebar: &Sidebar) -> String {
    let mut lines = vec![sidebar.mount.clone()];
    for section in &sidebar.sections {
        let indent = match &section.title {
            Some(title) => {
                lines.push(format!("  {title}"));
                "    "
            }
            None => "  ",
        };
        for item in &section.items {
            lines.push(format!("{indent}{} -> {}", item.title, item.link));
        }
    }
    lines.join("\n")
}
