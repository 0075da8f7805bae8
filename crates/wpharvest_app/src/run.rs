use std::process::ExitCode;

use anyhow::{Context, Result};
use engine_logging::engine_info;
use wpharvest_engine::{
    export_csv, harvest, validate_site, ExportSummary, ProgressSink, ReqwestTransport,
};

use crate::cli::Cli;
use crate::config::HarvestConfig;

/// What a successful run produced.
#[derive(Debug)]
pub enum RunOutcome {
    /// The site had no published articles; no file was written.
    NothingToExport,
    Exported {
        summary: ExportSummary,
        fetch_errors: usize,
    },
}

/// Validates the site, harvests it and writes the CSV.
///
/// A site that fails validation aborts the run before any collection is
/// requested.
pub async fn export_site(
    cli: &Cli,
    config: &HarvestConfig,
    sink: &dyn ProgressSink,
) -> Result<RunOutcome> {
    let probe = ReqwestTransport::new(&config.probe_settings())
        .context("failed to build the HTTP client")?;
    let site = validate_site(&probe, &cli.site_url)
        .await
        .with_context(|| format!("{} is not a usable WordPress site", cli.site_url))?;
    engine_info!("exporting articles from {}", site);

    let settings = config.fetch_settings();
    let transport =
        ReqwestTransport::new(&settings).context("failed to build the HTTP client")?;
    let options = cli.export_options();

    let report = harvest(&transport, &site, &options, settings.per_page, sink).await;
    if report.is_empty() {
        engine_info!("skipping export for {}", site);
        return Ok(RunOutcome::NothingToExport);
    }

    let filename = cli.output_file.as_deref().unwrap_or(&config.output_file);
    let summary = export_csv(&cli.output_dir, filename, &report.rows, &options)
        .with_context(|| format!("failed to write {filename}"))?;
    Ok(RunOutcome::Exported {
        summary,
        fetch_errors: report.errors.len(),
    })
}

/// Prints the outcome and maps it to the process exit code.
pub fn finish(result: Result<RunOutcome>) -> ExitCode {
    match result {
        Ok(RunOutcome::NothingToExport) => ExitCode::SUCCESS,
        Ok(RunOutcome::Exported {
            summary,
            fetch_errors,
        }) => {
            println!(
                "Wrote {} articles to {}",
                summary.row_count,
                summary.output_path.display()
            );
            if fetch_errors > 0 {
                eprintln!("{fetch_errors} fetch error(s) occurred; the export may be incomplete.");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
