//! Export command: render every page to static HTML files.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use pagekit_config::{CliSettings, Config, ExportConfig};
use pagekit_site::{SiteMap, render_document};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `export` command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Output directory for rendered pages.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Path to the configuration file.
    #[arg(long, env = "PAGEKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ExportArgs {
    /// Run the export.
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            output_dir: self.out.clone(),
            base_path: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        let site = SiteMap::bundled();
        output.info(&format!("Exporting {} pages", site.len()));

        let written = export_site(&site, &config.export_resolved)?;
        output.success(&format!(
            "Exported {} pages to {}",
            written.len(),
            config.export_resolved.output_dir.display()
        ));
        Ok(())
    }
}

/// Render every page in the site map to `<root>/<route>/index.html`.
///
/// The site root is the output directory joined with the configured base
/// path. Returns the written file paths in export order.
fn export_site(site: &SiteMap, export: &ExportConfig) -> Result<Vec<PathBuf>, CliError> {
    let root = site_root(export);
    let mut written = Vec::with_capacity(site.len());

    for page in site.iter() {
        let page_dir = match page.path().trim_start_matches('/') {
            "" => root.clone(),
            rest => root.join(rest),
        };
        fs::create_dir_all(&page_dir)?;

        let file = page_dir.join("index.html");
        fs::write(&file, render_document(page))?;
        tracing::info!(route = %page.path(), file = %file.display(), "page exported");
        written.push(file);
    }

    Ok(written)
}

/// Output directory joined with the base path, if one is configured.
fn site_root(export: &ExportConfig) -> PathBuf {
    match export.base_path.trim_start_matches('/') {
        "" => export.output_dir.clone(),
        rest => export.output_dir.join(rest),
    }
}
