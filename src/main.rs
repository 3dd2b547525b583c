use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, error};

use url_tokenizer::utils::logger::init_logger;
use url_tokenizer::{PartSetting, Token, TokenizerSettings, UrlTokenFilter, UrlTokenizer};

/// Environment variables with this prefix override file settings,
/// e.g. `URL_TOKENIZER_URL_DECODE=true`.
const ENV_PREFIX: &str = "URL_TOKENIZER";

#[derive(Parser, Debug)]
#[command(name = "url_tokenizer", version)]
#[command(about = "Split URLs into labeled, offset-tagged tokens")]
struct Cli {
    /// URLs to tokenize. Read from stdin, one per line, when omitted.
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// URL part to emit (protocol, host, port, path, ref, query, whole or all).
    #[arg(short, long = "part", value_name = "NAME")]
    parts: Vec<String>,

    /// Percent-decode extracted values.
    #[arg(long)]
    url_decode: bool,

    #[arg(long = "no-tokenize-host")]
    no_tokenize_host: bool,

    #[arg(long = "no-tokenize-path")]
    no_tokenize_path: bool,

    #[arg(long = "no-tokenize-query")]
    no_tokenize_query: bool,

    /// Emit the raw input instead of failing on malformed URLs.
    #[arg(long)]
    allow_malformed: bool,

    /// Recover parts of malformed URLs with pattern matching.
    #[arg(long)]
    tokenize_malformed: bool,

    /// Keep going past inputs that yield no tokens (filter mode).
    #[arg(long)]
    passthrough: bool,

    /// Treat all inputs as one upstream sequence for the token filter.
    #[arg(long)]
    filter: bool,

    /// Print one JSON object per token.
    #[arg(long)]
    json: bool,

    /// Settings file (any format the config crate understands).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn load_settings(cli: &Cli) -> Result<TokenizerSettings> {
    let mut builder = config::Config::builder();
    if let Some(path) = &cli.config {
        builder = builder.add_source(config::File::from(path.as_path()));
    }
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));

    let mut settings: TokenizerSettings = builder
        .build()
        .context("Failed to load settings")?
        .try_deserialize()
        .context("Invalid settings")?;

    if !cli.parts.is_empty() {
        settings.part = PartSetting::Many(cli.parts.clone());
    }
    settings.url_decode |= cli.url_decode;
    settings.allow_malformed |= cli.allow_malformed;
    settings.tokenize_malformed |= cli.tokenize_malformed;
    settings.passthrough |= cli.passthrough;
    if cli.no_tokenize_host {
        settings.tokenize_host = false;
    }
    if cli.no_tokenize_path {
        settings.tokenize_path = false;
    }
    if cli.no_tokenize_query {
        settings.tokenize_query = false;
    }

    debug!("Effective settings: {:?}", settings);
    Ok(settings)
}

fn read_inputs(cli: &Cli) -> Result<Vec<String>> {
    if !cli.inputs.is_empty() {
        return Ok(cli.inputs.clone());
    }
    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

fn write_token(out: &mut impl Write, token: &Token, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(token)?)?;
    } else {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            token.start(),
            token.end(),
            token.token_type(),
            token.text()
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;

    let settings = load_settings(&cli)?;
    let config = settings.to_config()?;
    let inputs = read_inputs(&cli)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0;

    if cli.filter {
        for result in UrlTokenFilter::new(inputs.iter(), &config, settings.passthrough) {
            match result {
                Ok(token) => write_token(&mut out, &token, cli.json)?,
                Err(e) => {
                    error!("{}", e);
                    failures += 1;
                }
            }
        }
    } else {
        let tokenizer = UrlTokenizer::new(config);
        for input in &inputs {
            match tokenizer.tokenize(input) {
                Ok(tokens) => {
                    for token in &tokens {
                        write_token(&mut out, token, cli.json)?;
                    }
                }
                Err(e) => {
                    error!("{}", e);
                    failures += 1;
                }
            }
        }
    }
    out.flush()?;

    if failures > 0 {
        bail!("{} input(s) failed to tokenize", failures);
    }
    Ok(())
}
