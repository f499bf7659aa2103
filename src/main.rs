use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use env_logger::{Env, Target};

use govform::autocomplete::{
    FetchDecision, HttpLookup, Lookup, ResponseOutcome, StaticLookup, SuggestionFetcher, asset_tag,
};
use govform::config::{Config, load_config};
use govform::form::{load_form, render_form};
use govform::html::Markup;

const PLAYGROUND_LOG: &str = "govform-playground.log";

/// GOV.UK form fields: render declarative forms and exercise the autocomplete
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Config file (defaults to ~/.config/govform/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a form description (TOML or JSON) to HTML
    Render {
        form: PathBuf,
        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Prepend the autocomplete browser script
        #[arg(long)]
        script: bool,
    },
    /// Run one lookup against an endpoint and print the suggestions
    Lookup { endpoint: String, query: String },
    /// Interactive terminal front-end for one autocomplete field
    Playground(PlaygroundArgs),
}

#[derive(Args, Debug)]
struct PlaygroundArgs {
    /// Live lookup endpoint
    #[arg(long, conflicts_with = "fixture", required_unless_present = "fixture")]
    endpoint: Option<String>,
    /// JSON array of suggestions served in memory
    #[arg(long, value_name = "FILE")]
    fixture: Option<PathBuf>,
    /// Fixture delay per lookup, longer for shorter queries
    #[arg(long, default_value_t = 0, value_name = "N")]
    latency_ms: u64,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(&cli.command)?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            form,
            output,
            script,
        } => render(&form, output, script, &config),
        Command::Lookup { endpoint, query } => lookup(&endpoint, &query, &config),
        Command::Playground(args) => playground(args, &config),
    }
}

/// The playground owns the terminal, so its log lines go to a file instead
fn init_logging(command: &Command) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if matches!(command, Command::Playground(_)) {
        let path = std::env::temp_dir().join(PLAYGROUND_LOG);
        let file = fs::File::create(&path)
            .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn render(form: &Path, output: Option<PathBuf>, script: bool, config: &Config) -> Result<()> {
    let spec = load_form(form).wrap_err_with(|| format!("Failed to load {}", form.display()))?;
    let mut html = Markup::new();
    if script {
        html.push(&asset_tag());
        html.push_text("\n");
    }
    html.push(&render_form(&spec, config)?);

    match output {
        Some(path) => {
            fs::write(&path, format!("{}\n", html))
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn lookup(endpoint: &str, query: &str, config: &Config) -> Result<()> {
    let settings = &config.autocomplete;
    let mut fetcher = SuggestionFetcher::new(endpoint, settings.min_query_length);

    let (token, query) = match fetcher.on_query(query) {
        FetchDecision::TooShort => {
            println!("{}", settings.after_suggestions_text);
            return Ok(());
        }
        FetchDecision::Dispatch { token, query } => (token, query),
    };

    let http = HttpLookup::new(settings.query_param.as_str())?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(http.fetch(endpoint, &query));

    match fetcher.on_response(token, &query, result) {
        ResponseOutcome::Results(suggestions) => {
            for suggestion in suggestions {
                println!("{}", suggestion.label);
            }
        }
        ResponseOutcome::NoResults | ResponseOutcome::InputTooShort | ResponseOutcome::Stale => {
            println!("{}", settings.no_results_text);
        }
    }
    Ok(())
}

fn playground(args: PlaygroundArgs, config: &Config) -> Result<()> {
    let (lookup, endpoint) = match args.fixture {
        Some(path) => {
            let body = fs::read_to_string(&path)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
            let fixture: Arc<dyn Lookup> = Arc::new(
                StaticLookup::from_json(&body)?
                    .with_latency(Duration::from_millis(args.latency_ms)),
            );
            (fixture, format!("fixture:{}", path.display()))
        }
        None => {
            let endpoint = args
                .endpoint
                .ok_or_else(|| eyre!("Either --endpoint or --fixture is required"))?;
            let http: Arc<dyn Lookup> =
                Arc::new(HttpLookup::new(config.autocomplete.query_param.as_str())?);
            (http, endpoint)
        }
    };

    govform::playground::run(lookup, &endpoint, config)?;
    Ok(())
}
