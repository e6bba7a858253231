//! Command implementation for the typochecker CLI.

use std::time::Instant;

use log::info;

use crate::cli::args::TypoCheckerArgs;
use crate::cli::output::output_typos;
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::spelling::checker::TypoChecker;

/// Execute a CLI invocation: build the dictionary, check the target file and
/// print the typos found.
pub fn execute_command(args: TypoCheckerArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    let start_time = Instant::now();
    let checker = TypoChecker::new(config)?;
    info!(
        "dictionary ready: {} entries in {} ms",
        checker.dictionary().len(),
        start_time.elapsed().as_millis()
    );

    let start_time = Instant::now();
    let typos = checker.check_file(&args.target_file)?;
    info!(
        "checked {} in {} ms ({} distinct typos)",
        args.target_file.display(),
        start_time.elapsed().as_millis(),
        checker.cache_len()
    );

    output_typos(&typos, &args)
}

/// Build the checker configuration: defaults, then the config file, then flags.
pub fn resolve_config(args: &TypoCheckerArgs) -> Result<CheckerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            CheckerConfig::from_json_file(path)?
        }
        None => CheckerConfig::default(),
    };

    if let Some(dictionary) = &args.dictionary {
        config.dictionary_file = dictionary.clone();
    }
    if let Some(keyword) = &args.keyword {
        config.keyword_file = Some(keyword.clone());
    }
    if let Some(min_word_len) = args.min_word_len {
        config.min_word_len = min_word_len;
    }
    if let Some(distance) = args.distance {
        config.distance = distance;
    }
    if args.no_transpositions {
        config.transpositions = false;
    }
    if args.parallel {
        config.parallel = true;
    }

    config.validate()?;
    Ok(config)
}
