use anyhow::Context;
use clap::Parser;
use img_size_classifier::cli::{Cli, ServiceKind};
use img_size_classifier::interrupt::install_interrupt_handler;
use img_size_classifier::{
    ClassifierError, ClassifierService, ClassifierSettings, ImageCrateConverter,
    InventoryService, RunReport, SizeClassifierService, TerminalChart, DONE_BANNER,
    INTERRUPTED_BANNER, TITLE_BANNER,
};
use shared_utils::logging::{init_logging, log_operation_end, LogConfig};
use shared_utils::{
    install_panic_handler, print_error, print_info, print_stage, print_success,
    print_summary_report, print_warning, report_error,
};
use std::io;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn};

fn setup_logging(cli: &Cli, settings: &ClassifierSettings) -> anyhow::Result<()> {
    let mut config = LogConfig::new().with_level(settings.level_for_verbosity(cli.verbose));
    if let Some(dir) = &cli.log_dir {
        config = config.with_log_dir(dir);
    }
    init_logging("img_size_classifier", config).context("Failed to initialise logging")
}

fn run(cli: &Cli, settings: ClassifierSettings) -> Result<RunReport, ClassifierError> {
    let request = cli.request();
    let mut service: Box<dyn ClassifierService> = match cli.service {
        ServiceKind::Size => {
            let converter = ImageCrateConverter::new(settings.jpeg_quality);
            Box::new(
                SizeClassifierService::new(
                    settings,
                    converter,
                    TerminalChart::default(),
                    io::stdin().lock(),
                    io::stdout(),
                )
                .show_progress(true),
            )
        }
        ServiceKind::Inventory => Box::new(InventoryService::new(settings, io::stdout())),
    };

    info!(service = service.name(), path = %request.work_dir.display(), "Starting run");
    print_stage(&format!("Service: {}", service.name()));

    let started = Instant::now();
    let result = service.execute(&request);
    log_operation_end(service.name(), started.elapsed(), result.is_ok());
    result
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = ClassifierSettings::default();

    if let Err(e) = setup_logging(&cli, &settings) {
        eprintln!("⚠️ {:#}", e);
    }
    install_panic_handler();
    if let Err(e) = install_interrupt_handler() {
        warn!(error = %e, "Could not install Ctrl-C handler");
    }

    println!("{}", TITLE_BANNER);

    match run(&cli, settings) {
        Ok(report) => {
            if report.classification.is_some() {
                print_summary_report(
                    &report.batch,
                    report.duration,
                    report.input_bytes,
                    report.jpeg_bytes,
                    "Image Size Classifier",
                );
            }
            let copied: usize = report.exports.iter().map(|e| e.copied()).sum();
            if copied > 0 {
                print_success(&format!(
                    "{} image(s) exported into {} folder(s)",
                    copied,
                    report.exports.len()
                ));
            } else if report.classification.is_some() {
                print_info("No images exported");
            }
            info!(
                service = report.service,
                files = report.files,
                exports = report.exports.len(),
                "Run finished"
            );
            println!("{}", DONE_BANNER);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_interrupt() => {
            warn!("Run interrupted");
            print_warning(&e.user_message());
            println!();
            println!("{}", INTERRUPTED_BANNER);
            ExitCode::FAILURE
        }
        Err(e) => {
            print_error(&e.user_message());
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
