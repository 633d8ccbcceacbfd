use std::io::Read;
use std::process;

use clap::Parser;
use cron_rrule::handler;
use cron_rrule::{ClauseOrder, Frequency, Options, Validation};

#[derive(Parser)]
#[command(
    name = "cron-rrule",
    about = "Translate cron expressions into RFC 5545 recurrence rules",
    version
)]
struct Cli {
    /// Cron expression (e.g., "0 12 * * 1,3,5" or "0 15 10 * * ?")
    expression: Option<String>,

    /// Field validation: strict or lenient
    #[arg(long, env = "CRON_RRULE_VALIDATION", default_value = "strict")]
    validation: Validation,

    /// Order of BY* parts: reference or canonical
    #[arg(long, env = "CRON_RRULE_ORDER", default_value = "reference")]
    order: ClauseOrder,

    /// FREQ value used when no field implies one (e.g., daily)
    #[arg(long, env = "CRON_RRULE_DEFAULT_FREQ")]
    default_freq: Option<Frequency>,

    /// Output as JSON ({"rfc5545_rule": ...})
    #[arg(long)]
    json: bool,

    /// Validate expression without printing the rule
    #[arg(long)]
    check: bool,

    /// Explain how each field is read
    #[arg(long)]
    explain: bool,

    /// Read a JSON request body ({"cron_expression": ...}) from stdin
    #[arg(long, conflicts_with_all = ["expression", "check", "explain"])]
    request: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options::default()
            .with_validation(self.validation)
            .with_order(self.order)
            .with_default_frequency(self.default_freq)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.options();
    tracing::debug!(?options, "resolved options");

    if cli.request {
        process::exit(run_request(&options));
    }

    let expression = match cli.expression {
        Some(ref expr) => expr.as_str(),
        None => {
            eprintln!("error: no expression provided");
            process::exit(2);
        }
    };

    if cli.explain {
        match cron_rrule::explain(expression, &options) {
            Ok(explanation) => {
                println!("{explanation}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("{}", e.display_rich());
                process::exit(1);
            }
        }
    }

    let rule = match cron_rrule::translate_with(expression, &options) {
        Ok(rule) => rule,
        Err(e) => {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    };

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.json {
        let response = handler::ConvertResponse {
            rfc5545_rule: rule.to_string(),
        };
        match serde_json::to_string(&response) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{rule}");
    }
}

/// Answer one JSON request from stdin, returning the exit code.
fn run_request(options: &Options) -> i32 {
    let mut body = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut body) {
        eprintln!("error: failed to read request body: {e}");
        return 2;
    }

    let reply = handler::handle_request(&body, options);
    tracing::info!(status = reply.status(), "handled request");
    match reply.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: failed to serialize: {e}");
            return 1;
        }
    }
    if reply.is_success() {
        0
    } else {
        1
    }
}
