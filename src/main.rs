use elitism_ga::experiment::{ExperimentConfig, ExperimentRunner};
use elitism_ga::ExperimentError;
use log::{error, info};
use std::io::{self, Write};
use std::process::ExitCode;

/// Optional base seed for a reproducible experiment.
const SEED_ENV: &str = "ELITISM_GA_SEED";

/// Parses the seed variable. A malformed value is an error, not an unseeded run.
fn parse_seed(raw: &str) -> Result<u64, ExperimentError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|source| ExperimentError::InvalidSeed {
            value: raw.to_string(),
            source,
        })
}

fn config_from_env() -> Result<ExperimentConfig, ExperimentError> {
    let config = ExperimentConfig::default();
    let Ok(raw) = std::env::var(SEED_ENV) else {
        return Ok(config);
    };
    let seed = parse_seed(&raw)?;
    info!("seeding experiment with {seed}");
    Ok(config.with_seed(seed))
}

fn run() -> Result<(), ExperimentError> {
    let config = config_from_env()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ExperimentRunner::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::new().parse_default_env().init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_accepts_u64() {
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert_eq!(parse_seed(" 7\n").unwrap(), 7);
    }

    #[test]
    fn test_parse_seed_rejects_malformed_value() {
        for raw in ["abc", "-1", "1.5", ""] {
            let err = parse_seed(raw).unwrap_err();
            assert!(
                matches!(&err, ExperimentError::InvalidSeed { value, .. } if value == raw),
                "unexpected error for {raw:?}: {err}"
            );
        }
    }
}
