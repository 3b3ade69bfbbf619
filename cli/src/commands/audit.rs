use anyhow::Context;
use colored::*;
use indicatif::ProgressStyle;
use tracing::{Instrument, info, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use nsprune_common::config::Config;
use nsprune_core::audit::{AuditReport, AuditService};
use nsprune_protocols::NitroClient;

use crate::terminal::{colors, print};

const TICKS: &[&str] = &["▁▁▁▁▁", "▁▂▂▂▁", "▁▄▂▄▁", "▂▄▆▄▂", "▄▆█▆▄", "▂▄▆▄▂", "▁▄▂▄▁", "▁▂▂▂▁"];

pub async fn audit(cfg: &Config) -> anyhow::Result<()> {
    print::header("contacting appliance");

    let client = NitroClient::new(cfg).context("could not set up the HTTP client")?;
    info!("Connecting to {}", client.base_url());

    let span = info_span!("audit", indicatif.pb_show = true);
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        span.pb_set_style(&style.tick_strings(TICKS));
    }
    span.pb_set_message(&format!("Reading running configuration of {}", cfg.device));

    let service = AuditService::new(Box::new(client));
    let report = service.run(cfg).instrument(span).await?;

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &AuditReport) {
    print::header("audit summary");
    print::aligned_lines(&[
        ("IP-named servers", report.servers.to_string()),
        ("Service addresses", report.services.to_string()),
        ("Group members", report.group_members.to_string()),
        ("Potential stale", report.stale.len().to_string()),
    ]);

    let path = report.artifact.display().to_string();
    print::print_status(format!("Wrote {}", path.color(colors::ACCENT)));

    if report.stale.is_empty() {
        info!("No stale servers found, the script is empty");
        return;
    }

    print::fat_separator();
    print::print_status(format!(
        "Review the file, copy it to the appliance and run {}",
        format!("batch -f <path>/{}", file_name(report)).bold()
    ));
}

fn file_name(report: &AuditReport) -> String {
    report
        .artifact
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
