// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Kestrel developer CLI.
//!
//! Exposes the numeric helpers and the persisted engine prefs from the shell:
//!
//! ```text
//! kestrel angle --to rad 180
//! kestrel pow2 600
//! kestrel random --min 5 --max 10 --count 4 --seed 7
//! kestrel prefs show --config-dir ./cfg
//! ```
//!
//! Logs go to stderr; `-v`/`-vv` or `RUST_LOG` raise the level.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use kestrel_app_core::config::ConfigService;
use kestrel_app_core::prefs::EnginePrefs;
use kestrel_config_fs::FsConfigStore;
use kestrel_math::{
    checked_next_power_of_two, deg_to_rad, is_power_of_four, is_power_of_two, rad_to_deg,
    random, random_float, round, to_be_close_to, weighted_random, Prng, RandomSource,
    ThreadRandom, DEFAULT_PRECISION,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kestrel",
    version,
    about = "Kestrel numeric helpers and engine prefs",
    disable_help_subcommand = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an angle between degrees and radians.
    Angle(AngleArgs),
    /// Power-of-two facts about an unsigned 32-bit value.
    Pow2 {
        /// Value to inspect.
        value: u32,
    },
    /// Round to a number of decimal digits (ties go up).
    Round {
        /// Number to round.
        #[arg(allow_negative_numbers = true)]
        num: f64,
        /// Decimal digits to keep (negative rounds to tens, hundreds, ...).
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        decimals: i32,
    },
    /// Approximate equality; exits 1 when the values are not close.
    Close {
        /// Expected value.
        #[arg(allow_negative_numbers = true)]
        expected: f64,
        /// Actual value.
        #[arg(allow_negative_numbers = true)]
        actual: f64,
        /// Decimal digits that must agree.
        #[arg(long, default_value_t = DEFAULT_PRECISION)]
        precision: i32,
    },
    /// Draw random numbers in `[min, max)`.
    Random(RandomArgs),
    /// Inspect or edit persisted engine prefs.
    Prefs(PrefsArgs),
}

#[derive(Args)]
struct AngleArgs {
    /// Target unit.
    #[arg(long, value_enum)]
    to: AngleUnit,
    /// Angle in the other unit.
    #[arg(allow_negative_numbers = true)]
    value: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum AngleUnit {
    /// Degrees to radians.
    Rad,
    /// Radians to degrees.
    Deg,
}

#[derive(Args)]
struct RandomArgs {
    /// Inclusive lower bound.
    #[arg(long, allow_negative_numbers = true)]
    min: i32,
    /// Exclusive upper bound.
    #[arg(long, allow_negative_numbers = true)]
    max: i32,
    /// Number of draws.
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// Seed for a reproducible sequence; unseeded when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Draw floats instead of integers.
    #[arg(long, conflicts_with = "weighted")]
    float: bool,
    /// Square the sample first so draws lean toward `min`.
    #[arg(long)]
    weighted: bool,
}

#[derive(Args)]
struct PrefsArgs {
    /// Config directory (defaults to the platform config dir).
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    action: PrefsAction,
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print the effective prefs as JSON.
    Show,
    /// Delete saved prefs, reverting to defaults.
    Reset,
    /// Toggle suppression of platform default actions for input events.
    SetPreventDefault {
        /// New value.
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Pin (or with no value, clear) the gameplay RNG seed.
    SetSeed {
        /// Seed value.
        seed: Option<u64>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Angle(args) => {
            let out = match args.to {
                AngleUnit::Rad => deg_to_rad(args.value),
                AngleUnit::Deg => rad_to_deg(args.value),
            };
            println!("{out}");
        }
        Commands::Pow2 { value } => {
            println!("is_power_of_two: {}", is_power_of_two(value));
            println!("is_power_of_four: {}", is_power_of_four(value));
            match checked_next_power_of_two(value) {
                Some(next) => println!("next_power_of_two: {next}"),
                None => println!("next_power_of_two: out of range"),
            }
        }
        Commands::Round { num, decimals } => println!("{}", round(num, decimals)),
        Commands::Close {
            expected,
            actual,
            precision,
        } => {
            if to_be_close_to(expected, actual, precision) {
                println!("close");
            } else {
                println!("not close");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Random(args) => run_random(&args),
        Commands::Prefs(args) => run_prefs(args)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("install tracing subscriber: {err}"))
}

fn run_random(args: &RandomArgs) {
    let mut source: Box<dyn RandomSource> = match args.seed {
        Some(seed) => {
            info!(seed, "using seeded prng");
            Box::new(Prng::from_seed_u64(seed))
        }
        None => Box::new(ThreadRandom),
    };
    for _ in 0..args.count {
        if args.float {
            let value = random_float(
                source.as_mut(),
                f64::from(args.min),
                f64::from(args.max),
            );
            println!("{value}");
        } else if args.weighted {
            println!("{}", weighted_random(source.as_mut(), args.min, args.max));
        } else {
            println!("{}", random(source.as_mut(), args.min, args.max));
        }
    }
}

fn run_prefs(args: PrefsArgs) -> Result<()> {
    let store = match args.config_dir {
        Some(dir) => FsConfigStore::at(&dir)
            .with_context(|| format!("open config dir {}", dir.display()))?,
        None => FsConfigStore::new().context("open platform config dir")?,
    };
    debug!(base = %store.base().display(), "prefs store");
    let service = ConfigService::new(store);

    match args.action {
        PrefsAction::Show => {
            let prefs = EnginePrefs::load(&service).context("load engine prefs")?;
            println!("{}", serde_json::to_string_pretty(&prefs)?);
        }
        PrefsAction::Reset => {
            service
                .reset(EnginePrefs::KEY)
                .context("reset engine prefs")?;
            info!("engine prefs reset");
        }
        PrefsAction::SetPreventDefault { enabled } => {
            let mut prefs = EnginePrefs::load(&service).context("load engine prefs")?;
            prefs.input.prevent_default = enabled;
            prefs.save(&service).context("save engine prefs")?;
        }
        PrefsAction::SetSeed { seed } => {
            let mut prefs = EnginePrefs::load(&service).context("load engine prefs")?;
            prefs.rng_seed = seed;
            prefs.save(&service).context("save engine prefs")?;
        }
    }
    Ok(())
}
