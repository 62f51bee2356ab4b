//! clickmap: list the clickable elements of a web page.

use clap::{Args, Parser, Subcommand};
use clickmap::cli::{extract_cmd, script_cmd, summary_cmd};
use clickmap::SummaryLimits;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clickmap", version, about = "List buttons, links and role=button elements of a page")]
struct Cli {
    /// Print machine-readable JSON to stdout.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress headers and footers.
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Disable ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract clickable elements from an HTML file (`-` for stdin).
    Extract {
        /// HTML file to read, or `-` for stdin.
        input: String,

        /// URL the page was loaded from; relative links resolve against it.
        #[arg(long, env = "CLICKMAP_BASE_URL")]
        base_url: Option<String>,
    },
    /// Summarize the content of an HTML file (`-` for stdin).
    Summary {
        /// HTML file to read, or `-` for stdin.
        input: String,

        #[command(flatten)]
        limits: LimitArgs,
    },
    /// Print the page-context extraction script.
    Script,
}

#[derive(Args)]
struct LimitArgs {
    /// Maximum headings listed.
    #[arg(long, default_value_t = SummaryLimits::default().headings)]
    max_headings: usize,

    /// Maximum paragraphs listed.
    #[arg(long, default_value_t = SummaryLimits::default().paragraphs)]
    max_paragraphs: usize,

    /// Maximum links listed.
    #[arg(long, default_value_t = SummaryLimits::default().links)]
    max_links: usize,

    /// Maximum keywords listed.
    #[arg(long, default_value_t = SummaryLimits::default().keywords)]
    max_keywords: usize,

    /// Characters of page text kept.
    #[arg(long, default_value_t = SummaryLimits::default().text_chars)]
    max_text: usize,
}

impl From<LimitArgs> for SummaryLimits {
    fn from(args: LimitArgs) -> Self {
        Self {
            headings: args.max_headings,
            paragraphs: args.max_paragraphs,
            links: args.max_links,
            keywords: args.max_keywords,
            text_chars: args.max_text,
            ..Self::default()
        }
    }
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clickmap=warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Output helpers read these; CLICKMAP_* set in the environment work too.
    if cli.json {
        std::env::set_var("CLICKMAP_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("CLICKMAP_QUIET", "1");
    }
    if cli.no_color {
        std::env::set_var("CLICKMAP_NO_COLOR", "1");
    }

    init_tracing(cli.log_json);

    let result = match cli.command {
        Command::Extract { input, base_url } => extract_cmd::run(&input, base_url.as_deref()),
        Command::Summary { input, limits } => summary_cmd::run(&input, &limits.into()),
        Command::Script => script_cmd::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("  error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
