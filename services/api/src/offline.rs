use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use site_audit::audit::AuditService;
use site_audit::error::AppError;

use crate::infra::{InMemoryPaymentLedger, InMemoryReportRepository};

#[derive(Args, Debug)]
pub(crate) struct AuditFileArgs {
    /// Path to the HTML file to audit
    pub(crate) file: PathBuf,
    /// URL to record alongside the report (labelling only, nothing is fetched)
    #[arg(long, default_value = "file://local")]
    pub(crate) url: String,
    /// Print the full report rather than the locked preview
    #[arg(long)]
    pub(crate) unlocked: bool,
}

pub(crate) fn run_audit_file(args: AuditFileArgs) -> Result<(), AppError> {
    let html = std::fs::read_to_string(&args.file)?;

    let repository = Arc::new(InMemoryReportRepository::default());
    let payments = Arc::new(InMemoryPaymentLedger::default());
    let service = AuditService::new(repository, payments)?;

    let mut payload = service.scan(&args.url, &html)?;
    if args.unlocked {
        service.record_payment(&payload.report_id, "operator@localhost.local", "cli")?;
        payload = service.unlock(&payload.report_id)?;
    }

    let rendered = serde_json::to_string_pretty(&payload)
        .map_err(|err| AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, err)))?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_file_round_trips_a_sample_page() {
        let dir = std::env::temp_dir();
        let path = dir.join("site-audit-offline-test.html");
        std::fs::write(
            &path,
            "<html lang=\"en\"><head><title>Corner Cafe</title></head><body><h1>Corner Cafe</h1></body></html>",
        )
        .expect("sample file writes");

        let args = AuditFileArgs {
            file: path.clone(),
            url: "file://local".to_string(),
            unlocked: true,
        };
        run_audit_file(args).expect("offline audit succeeds");
        std::fs::remove_file(path).ok();
    }
}
