use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use clap_complete_nushell::Nushell;
use clap_mangen::Man;
use clock_interval::cli::Args; // Import Args from the library

use std::io::Write;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process::Command,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct XtaskArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate man page and shell completions.
    GenerateDocs,
    /// Run cargo check.
    Check,
    /// Run cargo test.
    Test,
    /// Run cargo clippy.
    Clippy,
    /// Run cargo fmt --check.
    FmtCheck,
}

fn main() -> Result<()> {
    let args = XtaskArgs::parse();

    match args.command {
        Commands::GenerateDocs => generate_docs().context("Failed to generate docs"),
        Commands::Check => run_cargo("check", &["--all-targets"]).context("cargo check failed"),
        Commands::Test => run_cargo("test", &[]).context("cargo test failed"),
        Commands::Clippy => run_cargo("clippy", &["--all-targets", "--", "-D", "warnings"])
            .context("cargo clippy failed"),
        Commands::FmtCheck => run_cargo("fmt", &["--", "--check"]).context("cargo fmt failed"),
    }
}

fn run_cargo(command: &str, args: &[&str]) -> Result<()> {
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let mut cmd = Command::new(cargo);
    cmd.arg(command);
    cmd.args(args);
    // Run in the project root
    cmd.current_dir(project_root()?);

    let status = cmd
        .status()
        .with_context(|| format!("Failed to execute cargo {command}"))?;

    if !status.success() {
        anyhow::bail!("cargo {command} command failed");
    }
    Ok(())
}

fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask manifest has no parent directory")
}

fn generate_docs() -> Result<()> {
    let docs_dir = project_root()?.join("docs");
    let man_dir = docs_dir.join("man");
    let completions_dir = docs_dir.join("completions");

    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;
    fs::create_dir_all(&completions_dir).context("Failed to create completions directory")?;

    let cmd = Args::command();
    let bin_name = cmd.get_name().to_string();

    let man_path = man_dir.join(format!("{bin_name}.1"));
    println!("Generating man page: {man_path:?}");
    generate_man_page(&cmd, &man_path)?;

    generate_completions(&cmd, &completions_dir)?;

    println!(
        "Successfully generated man page and completions in: {}",
        docs_dir.display()
    );
    Ok(())
}

// --- Man Page Content Constants ---
// Note: Using roff formatting. \fB...\fR = bold, \fI...\fR = italic, \- = hyphen, \(bu = bullet

const MAN_FORMATS: &str = r#"
The \fB\-\-units\fR option of \fBformat\fR selects the fields written:
.TP
.B hour\-min\-sec
\fIH\fR:\fIMM\fR:\fISS\fR, e.g. 10:04:09. The default.
.TP
.B min\-sec
\fIMM\fR:\fISS\fR, e.g. 604:09. Minutes keep counting past the hour.
.TP
.B hour\-min\-sec\-ms
\fIH\fR:\fIMM\fR:\fISS\fR.\fImmm\fR, e.g. 10:04:09.689.
.TP
.B min\-sec\-ms
\fIMM\fR:\fISS\fR.\fImmm\fR, e.g. 604:09.689.
.PP
The leading field is never wrapped. Trailing fields are zero\-padded to two digits, milliseconds to three. Milliseconds are truncated, not rounded. Negative values get a single leading \-. NaN and infinities are printed as \fBNaN\fR, \fBinf\fR and \fB\-inf\fR.
"#;

const MAN_PARSING: &str = r#"
\fBparse\fR reads up to four fields separated by \fB:\fR and \fB.\fR from right to left: milliseconds (after a \fB.\fR, or the fourth field), seconds, minutes, hours. A single leading \- negates the value.
.PP
Milliseconds are normalized to exactly three digits: \fB.4\fR means 400 ms and \fB.4567\fR is truncated to 456 ms.
.PP
By default fields beyond their range are carried arithmetically, so \fB0:75:00\fR reads as 4500 seconds. With \fB\-\-strict\fR, minutes and seconds above 59 are rejected unless they are the leading field.
.PP
Empty input lines produce an empty output line and are not errors.
"#;

const MAN_EXAMPLES: &str = r#"
.PP
.B Format seconds with milliseconds:
.IP
.nf
{bin_name} format \-\-units hour\-min\-sec\-ms 37489.632
10:24:49.632
.fi
.PP
.B Parse clock strings from a file, one per line, as JSON:
.IP
.nf
{bin_name} \-\-json parse < durations.txt
.fi
.PP
.B Show a parsed value in human\-readable form:
.IP
.nf
{bin_name} parse \-\-humanize 1:02:03
3723    1h 2m 3s
.fi
.PP
.B Parse a negative clock string (values starting with \- go after \-\-):
.IP
.nf
{bin_name} parse \-\- \-01:05
\-65
.fi
"#;

const MAN_EXIT_STATUS: &str = r#"
.TP
.B 0
Every input was converted (blank inputs count as converted).
.TP
.B 1
At least one input could not be converted. The others were still written.
.TP
.B 2
Reading standard input or writing standard output failed, or the command line was invalid.
"#;

const MAN_ENVIRONMENT: &str = r#"
.TP
.B RUST_LOG
Log filter directive used when \fB\-\-log\-filter\fR is not given. Logs go to standard error.
"#;

/// Generates the man page with custom sections.
fn generate_man_page(cmd: &clap::Command, path: &Path) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let date = chrono::Local::now().format("%B %d, %Y").to_string();
    let app_name_uppercase = cmd.get_name().to_uppercase();
    let bin_name = cmd.get_name();

    let mut buffer: Vec<u8> = Vec::new();

    writeln!(buffer, r#".TH "{app_name_uppercase}" 1 "{date}" "{version}" "User Commands""#)?;
    Man::new(cmd.clone()).render(&mut buffer)?;

    let custom_sections = [
        ("FORMATS", MAN_FORMATS),
        ("PARSING", MAN_PARSING),
        ("EXAMPLES", MAN_EXAMPLES),
        ("EXIT STATUS", MAN_EXIT_STATUS),
        ("ENVIRONMENT", MAN_ENVIRONMENT),
    ];

    for (title, content_template) in custom_sections {
        writeln!(buffer, ".SH {title}")?;
        writeln!(buffer, "{}", content_template.replace("{bin_name}", bin_name))?;
    }

    fs::write(path, buffer).with_context(|| format!("Failed to write man page to {path:?}"))?;
    Ok(())
}

/// Generates shell completion files.
fn generate_completions(cmd: &clap::Command, completions_dir: &Path) -> Result<()> {
    let bin_name = cmd.get_name().to_string();
    let shells = [
        (Shell::Bash, "bash"),
        (Shell::Elvish, "elv"),
        (Shell::Fish, "fish"),
        (Shell::PowerShell, "ps1"),
        (Shell::Zsh, "zsh"),
    ];

    for (shell, ext) in shells {
        let completions_path = completions_dir.join(format!("{bin_name}.{ext}"));
        println!("Generating completion file: {completions_path:?}");
        let mut file = fs::File::create(&completions_path)
            .with_context(|| format!("Failed to create completion file: {completions_path:?}"))?;
        generate(shell, &mut cmd.clone(), bin_name.clone(), &mut file);
    }

    let nu_path = completions_dir.join(format!("{bin_name}.nu"));
    println!("Generating Nushell completion file: {nu_path:?}");
    let mut nu_file = fs::File::create(&nu_path)
        .with_context(|| format!("Failed to create Nushell completion file: {nu_path:?}"))?;
    generate(Nushell, &mut cmd.clone(), bin_name, &mut nu_file);

    Ok(())
}
