// Main application entry point.
// Parses the command line, sets up logging, converts every input and
// maps the outcome to an exit status.

use clock_interval::cli;
use clock_interval::config::Config;
use clock_interval::output::{self, Record};
use clock_interval::telemetry;
use std::io::{self, BufRead, Write};
use std::process::exit;
use tracing::{debug, info};

/// All inputs converted (blank inputs count as converted).
const EXIT_OK: i32 = 0;
/// At least one input could not be converted.
const EXIT_CONVERSION_FAILED: i32 = 1;
/// Reading stdin or writing stdout failed.
const EXIT_IO_ERROR: i32 = 2;

#[derive(Debug, Default)]
struct RunSummary {
    converted: u64,
    absent: u64,
    failed: u64,
}

impl RunSummary {
    fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            EXIT_CONVERSION_FAILED
        } else {
            EXIT_OK
        }
    }
}

fn main() {
    let args = cli::parse_args();
    let cfg = Config::from(&args);
    telemetry::init_tracing(&cfg);

    let mut summary = RunSummary::default();
    let code = match run(&cfg, &mut summary) {
        Ok(()) => {
            info!(
                converted = summary.converted,
                absent = summary.absent,
                failed = summary.failed,
                "Finished"
            );
            summary.exit_code()
        }
        // A closed stdout ends the run early; failures seen so far still count.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!(failed = summary.failed, "stdout closed early, stopping");
            summary.exit_code()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_IO_ERROR
        }
    };
    exit(code);
}

fn run(cfg: &Config, summary: &mut RunSummary) -> io::Result<()> {
    let mut stdout_locked = io::stdout().lock();

    let mut handle = |raw: &str| -> io::Result<()> {
        let record = output::convert(cfg.mode, raw);
        match &record {
            Record::Error { error, .. } => {
                summary.failed += 1;
                eprintln!("Error: {:?}: {error}", record.input());
            }
            Record::Absent { .. } => summary.absent += 1,
            _ => {
                summary.converted += 1;
                debug!(?record, "converted");
            }
        }
        record.write_to(&mut stdout_locked, cfg.json)
    };

    if cfg.reads_stdin() {
        debug!("No values on the command line, reading stdin");
        for line in io::stdin().lock().lines() {
            handle(&line?)?;
        }
    } else {
        for value in &cfg.values {
            handle(value)?;
        }
    }

    stdout_locked.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_reflects_failures_seen_before_stopping() {
        let mut summary = RunSummary::default();
        assert_eq!(summary.exit_code(), EXIT_OK);
        summary.absent += 1;
        assert_eq!(summary.exit_code(), EXIT_OK);
        summary.failed += 1;
        assert_eq!(summary.exit_code(), EXIT_CONVERSION_FAILED);
    }
}
