//! CLI command implementations
//!
//! All commands begin by loading the catalogue; a missing or corrupt
//! file aborts with a fatal diagnostic before anything is served or
//! written.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::catalogue::{Catalogue, CatalogueLoader, SourceClass};
use crate::export;
use crate::filter::{apply_filters, FilterCriteria};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Logger, Severity};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the requested command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatches a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { data_dir, port } => serve(&data_dir, port),
        Command::Verify { data_dir } => verify(&data_dir),
        Command::Export {
            data_dir,
            threshold,
            classes,
            require_explanation,
            out,
        } => export_csv(&data_dir, threshold, &classes, require_explanation, &out),
    }
}

fn load_catalogue(data_dir: &Path) -> CliResult<Catalogue> {
    let catalogue = CatalogueLoader::new(data_dir).load().map_err(|e| {
        Logger::log_stderr(
            Severity::Fatal,
            "startup_failed",
            &[
                ("data_dir", &data_dir.display().to_string()),
                ("reason", &e.to_string()),
            ],
        );
        e
    })?;
    Logger::log(
        Severity::Info,
        "catalogue_loaded",
        &[
            ("sources", &catalogue.classification().len().to_string()),
            ("explained", &catalogue.contributions().len().to_string()),
        ],
    );
    Ok(catalogue)
}

/// Serves the dashboard API over the loaded catalogue
pub fn serve(data_dir: &Path, port: u16) -> CliResult<()> {
    let catalogue = load_catalogue(data_dir)?;

    let config = HttpServerConfig::with_port(port);
    let server = HttpServer::with_config(Arc::new(catalogue), config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::ServerFailed(format!("failed to create tokio runtime: {e}")))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::ServerFailed(e.to_string()))
    })?;

    Ok(())
}

/// Loads and validates the catalogue, printing a summary
pub fn verify(data_dir: &Path) -> CliResult<()> {
    let catalogue = load_catalogue(data_dir)?;

    println!("Catalogue at {} is consistent", data_dir.display());
    println!("  sources:            {}", catalogue.classification().len());
    println!("  with explanations:  {}", catalogue.contributions().len());
    println!(
        "  feature columns:    {}",
        catalogue.feature_values().columns().len()
    );
    Ok(())
}

/// One-shot filter + export.
///
/// An omitted `--classes` flag means all classes; the engine itself
/// treats an empty set as matching nothing, so the widening happens
/// here at the CLI boundary.
pub fn export_csv(
    data_dir: &Path,
    threshold: f64,
    classes: &[String],
    require_explanation: bool,
    out: &Path,
) -> CliResult<()> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(CliError::InvalidArgument(format!(
            "threshold {threshold} outside [0, 1]"
        )));
    }

    let allowed: Vec<SourceClass> = if classes.is_empty() {
        SourceClass::ALL.to_vec()
    } else {
        classes
            .iter()
            .map(|c| {
                c.parse::<SourceClass>()
                    .map_err(|e| CliError::InvalidArgument(e.to_string()))
            })
            .collect::<CliResult<_>>()?
    };

    let catalogue = load_catalogue(data_dir)?;

    let mut criteria = FilterCriteria::new(threshold).with_classes(allowed);
    if require_explanation {
        criteria = criteria.with_explanation_required();
    }

    let rows = apply_filters(catalogue.classification(), &criteria);
    fs::write(out, export::encode_classification(&rows))?;

    Logger::log(
        Severity::Info,
        "export_written",
        &[
            ("path", &out.display().to_string()),
            ("rows", &rows.len().to_string()),
        ],
    );
    println!("Wrote {} rows to {}", rows.len(), out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_fixture(dir: &Path) {
        fs::write(
            dir.join("classification.csv"),
            "name,ra,dec,class 1,CMP1,class 2,CMP2,SHAP\n\
             a,10.0,0.0,AGN,0.95,STAR,0.02,false\n\
             b,20.0,0.0,STAR,0.7,AGN,0.2,false\n",
        )
        .unwrap();
        fs::write(dir.join("contributions.csv"), "name,hardness_shap\n").unwrap();
        fs::write(dir.join("feature_values.csv"), "name,hardness\n").unwrap();
    }

    #[test]
    fn test_verify_ok() {
        let tmp = TempDir::new().unwrap();
        write_fixture(tmp.path());
        assert!(verify(tmp.path()).is_ok());
    }

    #[test]
    fn test_verify_missing_catalogue_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(verify(tmp.path()).is_err());
    }

    #[test]
    fn test_export_filters_and_writes() {
        let tmp = TempDir::new().unwrap();
        write_fixture(tmp.path());
        let out = tmp.path().join("out.csv");

        export_csv(tmp.path(), 0.8, &[], false, &out).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        let rows = export::parse_classification(&text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "a");
    }

    #[test]
    fn test_export_rejects_bad_threshold() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out.csv");
        let err = export_csv(tmp.path(), 1.5, &[], false, &out).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_export_rejects_unknown_class() {
        let tmp = TempDir::new().unwrap();
        write_fixture(tmp.path());
        let out = tmp.path().join("out.csv");
        let err =
            export_csv(tmp.path(), 0.5, &["QUASAR".to_string()], false, &out).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }
}
