//! Command handlers

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use lca_app::app::{parse_quantity, run_batch, AnalysisService};
use lca_app::config::Config;
use lca_domain::repository::{AnalysisHistoryRepository, ImpactTable};
use lca_infra::load_requests_from_csv;
use lca_types::{Error, OutputFormat, Result};
use tracing::{debug, info, warn};

use crate::cli::{Cli, Commands};
use crate::output::{
    render_batch_summary, render_comparison, render_history, render_materials, render_result,
    render_stats,
};

/// Execute CLI command
pub fn execute(cli: Cli, config: Config) -> Result<()> {
    let output_format = cli.format.unwrap_or(config.output_format);
    let service = AnalysisService::new();

    match cli.command {
        Commands::Materials => {
            print!("{}", render_materials(output_format, &service.materials())?);
            Ok(())
        }

        Commands::Analyze { material, quantity } => {
            cmd_analyze(&service, &material, &quantity, output_format, config.history_limit)
        }

        Commands::Compare { metal, quantity } => {
            let quantity = parse_quantity(&quantity)?;
            let comparison = service.compare(&metal, quantity)?;
            print!("{}", render_comparison(output_format, &comparison)?);
            Ok(())
        }

        Commands::Batch { csv, jobs } => {
            // Use CLI jobs if specified, otherwise default 4. 0 = auto CPU count.
            let job_count = match jobs {
                Some(0) => num_cpus::get(),
                Some(n) => n,
                None => 4,
            };
            cmd_batch(&service, csv, job_count, output_format, config.history_limit)
        }

        Commands::Session => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_session(
                &service,
                stdin.lock(),
                stdout.lock(),
                output_format,
                config.history_limit,
            )
        }

        Commands::Config {
            show,
            set_output,
            set_history_limit,
            set_log_filter,
            reset,
        } => cmd_config(show, set_output, set_history_limit, set_log_filter, reset),
    }
}

fn cmd_analyze(
    service: &AnalysisService,
    material: &str,
    quantity: &str,
    output_format: OutputFormat,
    history_limit: usize,
) -> Result<()> {
    let result = service.analyze_input(material, quantity)?;
    print!("{}", render_result(output_format, &result)?);

    if output_format == OutputFormat::Table {
        println!();
        print!("{}", render_history(output_format, &service.history()?, history_limit)?);
    }
    Ok(())
}

fn cmd_batch(
    service: &AnalysisService,
    csv: PathBuf,
    jobs: usize,
    output_format: OutputFormat,
    history_limit: usize,
) -> Result<()> {
    let requests = load_requests_from_csv(&csv)?;

    if requests.is_empty() {
        return Err(Error::BatchInput(format!(
            "No analysis rows found in {}",
            csv.display()
        )));
    }

    info!(rows = requests.len(), jobs, "starting batch");

    let pb = ProgressBar::new(requests.len() as u64);
    pb.set_style(batch_progress_style());

    let summary = run_batch(service, &requests, jobs, |outcome| {
        pb.set_message(outcome.request.material.clone());
        pb.inc(1);
    });
    pb.finish_with_message("Complete");

    print!("{}", render_batch_summary(output_format, &summary)?);
    if output_format == OutputFormat::Table {
        println!();
        print!("{}", render_history(output_format, &service.history()?, history_limit)?);
    }
    Ok(())
}

const BATCH_PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}";

fn batch_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(BATCH_PROGRESS_TEMPLATE)
        .unwrap_or_else(|e| {
            warn!(error = %e, "progress template rejected, using default bar");
            ProgressStyle::default_bar()
        })
        .progress_chars("#>-")
}

const SESSION_HELP: &str = "\
Enter '<material> <quantity>' to analyze (e.g. 'steel_recycled 12.5').
Other commands: materials, history, stats, help, quit";

/// Read analysis requests line by line until EOF or `quit`
///
/// Errors on individual lines are reported and the session continues.
pub fn run_session<T, H, R, W>(
    service: &AnalysisService<T, H>,
    input: R,
    mut output: W,
    output_format: OutputFormat,
    history_limit: usize,
) -> Result<()>
where
    T: ImpactTable,
    H: AnalysisHistoryRepository,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", SESSION_HELP)?;

    for line in input.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(first) = parts.next() else {
            continue;
        };

        let rendered = match first {
            "quit" | "exit" => break,
            "help" => Ok(format!("{}\n", SESSION_HELP)),
            "materials" => render_materials(output_format, &service.materials()),
            "history" => service
                .history()
                .and_then(|records| render_history(output_format, &records, history_limit)),
            "stats" => service
                .stats()
                .and_then(|stats| render_stats(output_format, &stats)),
            material => match (parts.next(), parts.next()) {
                (Some(quantity), None) => service
                    .analyze_input(material, quantity)
                    .and_then(|result| render_result(output_format, &result)),
                _ => Err(Error::InvalidInput(format!(
                    "expected '<material> <quantity>', got '{}'",
                    line.trim()
                ))),
            },
        };

        match rendered {
            Ok(text) => write!(output, "{}", text)?,
            Err(e) => {
                debug!(error = %e, "session line rejected");
                writeln!(output, "Error: {}", e)?;
            }
        }
        output.flush()?;
    }

    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_history_limit: Option<usize>,
    set_log_filter: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(limit) = set_history_limit {
        config.history_limit = limit;
        modified = true;
    }

    if let Some(filter) = set_log_filter {
        config.log_filter = filter;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
