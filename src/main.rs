//! Passphrase Generator CLI
//!
//! Prints memorable passphrases drawn from the built-in or a custom
//! word list.

use clap::Parser;
use passphrase_gen::{
    analysis::word_list_info,
    config::{ConfigError, FileConfig},
    generator::{CasingStyle, GenerateError, GenerationOptions, Generator, SelectionMethod},
    wordlist::{WordList, WordSource},
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

/// Generate memorable passphrases.
#[derive(Debug, Parser)]
#[command(name = "passphrase-gen", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of words (clamped to 2-10).
    #[arg(short, long, allow_negative_numbers = true)]
    words: Option<i64>,

    /// Separator inserted between words.
    #[arg(short, long)]
    separator: Option<String>,

    /// Casing style.
    #[arg(short, long, value_enum)]
    casing: Option<CasingStyle>,

    /// How random values are reduced to word indices.
    #[arg(long, value_enum)]
    selection: Option<SelectionMethod>,

    /// Newline-delimited custom word list.
    #[arg(long)]
    wordlist: Option<PathBuf>,

    /// Number of passphrases to print.
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Report the entropy of the configuration on stderr.
    #[arg(long)]
    entropy: bool,

    /// Print information about the built-in word list and exit.
    #[arg(long)]
    info: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Generate(e) if e.is_fatal() => ExitCode::from(2),
            _ => ExitCode::from(1),
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if cli.info {
        println!("{}", word_list_info());
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    apply_overrides(&mut config, &cli);
    config.validate()?;

    let custom = match &config.wordlist.path {
        Some(path) => Some(WordList::from_file(path).map_err(GenerateError::from)?),
        None => None,
    };
    let source = custom.as_ref().map_or(WordSource::BuiltIn, WordSource::Custom);
    let options = &config.generation;

    info!("passphrase-gen v{}", passphrase_gen::VERSION);
    debug!(
        words = options.effective_word_count(),
        casing = %options.casing,
        custom_list = custom.is_some(),
        "configuration resolved"
    );

    if config.output.show_entropy {
        report_entropy(options, source)?;
    }

    let mut generator = Generator::new();
    for _ in 0..config.output.count {
        println!("{}", generator.generate(options, source)?);
    }

    Ok(())
}

fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    let generation = &mut config.generation;
    if let Some(words) = cli.words {
        generation.word_count = words;
    }
    if let Some(separator) = &cli.separator {
        generation.separator = separator.clone();
    }
    if let Some(casing) = cli.casing {
        generation.casing = casing;
    }
    if let Some(selection) = cli.selection {
        generation.selection = selection;
    }
    if let Some(path) = &cli.wordlist {
        config.wordlist.path = Some(path.clone());
    }
    if let Some(count) = cli.count {
        config.output.count = count;
    }
    if cli.entropy {
        config.output.show_entropy = true;
    }
}

fn report_entropy(options: &GenerationOptions, source: WordSource<'_>) -> Result<(), CliError> {
    let list = source.resolve().map_err(GenerateError::from)?;
    eprintln!(
        "{} words from a list of {}: {:.2} bits of entropy",
        options.effective_word_count(),
        list.len(),
        options.entropy_bits(list.len())
    );
    Ok(())
}
