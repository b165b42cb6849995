//! medpost-guard - Medical-advertising compliance checks for healthcare posts
//!
//! Reads a post from stdin and prints its compliance report.
//!
//! # Usage
//!
//! ```bash
//! # Plain text in, text report out
//! echo 'Consulta com desconto!' | medpost-guard
//!
//! # JSON request in, JSON report out
//! echo '{"text":"Antes e depois","channel":"TikTok"}' | medpost-guard --json --format=json
//!
//! # Fail the pipeline when the post is not compliant
//! medpost-guard --fail-on-error < post.txt
//! ```

use std::env;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use medpost_guard::{
    audit::AuditLogger,
    config::{Config, OutputFormat},
    engine::ComplianceAnalyzer,
    input::{AnalysisRequest, Channel},
    rules::RuleSet,
};

/// Print version information
fn print_version() {
    println!("medpost-guard {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"medpost-guard - Medical-advertising compliance checks for healthcare posts

USAGE:
    medpost-guard [OPTIONS] < post.txt

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -c, --config PATH       Path to config file
    -C, --channel NAME      Channel: Instagram, Facebook, LinkedIn, TikTok
    -r, --rules PATH        Custom rules file (overrides config)
    -f, --format FORMAT     Output format: text, json (default: text)
    -j, --json              Read a JSON request {{"text": ..., "channel": ...}}
        --fail-on-error     Exit with status 1 when the post is not compliant

ENVIRONMENT:
    MEDPOST_GUARD_NO_AUDIT=1    Skip the audit log for this run

EXIT STATUS:
    0   report produced
    1   post not compliant (with --fail-on-error)
    2   invalid input or rules file
"#
    );
}

/// Parse command line arguments
#[derive(Default)]
struct Args {
    help: bool,
    version: bool,
    config_path: Option<String>,
    channel: Option<String>,
    rules_path: Option<String>,
    format: Option<String>,
    json_input: bool,
    fail_on_error: bool,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-j" | "--json" => result.json_input = true,
                "--fail-on-error" => result.fail_on_error = true,
                "-c" | "--config" | "-C" | "--channel" | "-r" | "--rules" | "-f" | "--format" => {
                    if i + 1 < args.len() {
                        let value = Some(args[i + 1].clone());
                        match args[i].as_str() {
                            "-c" | "--config" => result.config_path = value,
                            "-C" | "--channel" => result.channel = value,
                            "-r" | "--rules" => result.rules_path = value,
                            _ => result.format = value,
                        }
                        i += 1;
                    }
                }
                arg if arg.starts_with("--config=") => {
                    result.config_path = Some(arg.trim_start_matches("--config=").to_string());
                }
                arg if arg.starts_with("--channel=") => {
                    result.channel = Some(arg.trim_start_matches("--channel=").to_string());
                }
                arg if arg.starts_with("--rules=") => {
                    result.rules_path = Some(arg.trim_start_matches("--rules=").to_string());
                }
                arg if arg.starts_with("--format=") => {
                    result.format = Some(arg.trim_start_matches("--format=").to_string());
                }
                other => eprintln!("Warning: Ignoring unknown argument: {}", other),
            }
            i += 1;
        }

        result
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    // Load configuration
    let mut config = if let Some(ref path) = args.config_path {
        Config::load_from(std::path::Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        })
    } else {
        Config::load()
    };

    if let Some(ref path) = args.rules_path {
        config.rules.rules_file = Some(path.clone());
    }

    if let Some(ref name) = args.channel {
        match Channel::from_name(name) {
            Some(channel) => config.general.default_channel = channel,
            None => eprintln!(
                "Warning: Unknown channel {:?}, using {}",
                name, config.general.default_channel
            ),
        }
    }

    if let Some(ref name) = args.format {
        match OutputFormat::from_name(name) {
            Some(format) => config.output.format = format,
            None => eprintln!("Warning: Unknown format {:?}, using default", name),
        }
    }

    let analyzer = match build_analyzer(&config) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    // Read the post from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Error: Failed to read stdin: {}", e);
        return ExitCode::from(2);
    }

    let request = if args.json_input {
        match AnalysisRequest::from_json(&input) {
            Ok(request) => request,
            Err(e) => {
                eprintln!("Error: Failed to parse request: {}", e);
                return ExitCode::from(2);
            }
        }
    } else {
        AnalysisRequest {
            text: input,
            channel: None,
        }
    };

    let channel = request.channel_or(config.general.default_channel);
    let report = analyzer.analyze(&request.text, channel);

    // Log the analysis
    let audit_path = if config.general.audit_log && env::var("MEDPOST_GUARD_NO_AUDIT").is_err() {
        config.audit_path()
    } else {
        None
    };
    let mut logger = AuditLogger::new(audit_path.as_deref());
    if let Err(e) = logger.log_report(&request, channel, &report) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }

    let rendered = match config.output.format {
        OutputFormat::Json => report.to_json(),
        OutputFormat::Text => report.render_text(),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", rendered.trim_end());
    let _ = handle.flush();

    if args.fail_on_error && !report.is_compliant {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn build_analyzer(config: &Config) -> Result<ComplianceAnalyzer, Box<dyn std::error::Error>> {
    let rules: RuleSet = config.rule_set()?;
    Ok(ComplianceAnalyzer::new(rules)?)
}
