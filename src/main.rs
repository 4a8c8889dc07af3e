//! quote-calc - Material cost quotes for tint, printing, canvas and decals.

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use signshop_quote::calculator::{TAPE, VINYL};
use signshop_quote::config::{DEFAULT_PREFS_FILE, DEFAULT_TINT_ROLL_PRICE, DEFAULT_TINT_ROLL_WIDTH_IN};
use signshop_quote::model::{find_roll, RollSize, TAPE_ROLLS, VINYL_ROLLS};
use signshop_quote::prefs::{
    tape_price_key, vinyl_price_key, KEY_CANVAS_PRICE, KEY_SHIP_FEE, KEY_TINT_PRICE,
    KEY_TINT_WIDTH,
};
use signshop_quote::{
    parse_job_file, parse_row, render, run_job, validate_job, CanvasRollInput, DecalInput, Job, JsonFileStore,
    MaterialSource, MemoryStore, Orientation, PieceRow, PreferenceStore, PrintInput, PrintType,
    RollChoice, TintRollInput, TintUseInput, Unit,
};

/// Material cost quotes for a print and sign shop.
#[derive(Parser, Debug)]
#[command(name = "quote-calc")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Preferences file for last-used prices
    #[arg(long, global = true, default_value = DEFAULT_PREFS_FILE)]
    prefs: PathBuf,

    /// Don't read or write the preferences file
    #[arg(long, global = true)]
    no_prefs: bool,

    /// Output the computed quote as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(ClapArgs, Debug)]
struct TintRollArgs {
    /// Tint roll width in inches (roll length is fixed at 100 ft)
    #[arg(long)]
    roll_width: Option<f64>,

    /// Tint roll price in USD
    #[arg(long)]
    roll_price: Option<f64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show tint roll area and cost per ft²
    TintBase {
        #[command(flatten)]
        roll: TintRollArgs,
    },

    /// Tint for a straight run of film
    TintUse {
        #[command(flatten)]
        roll: TintRollArgs,

        /// Width used, in inches
        #[arg(long)]
        width: Option<f64>,

        /// Length used
        #[arg(long)]
        length: Option<f64>,

        /// Unit of the length (in, ft)
        #[arg(long, default_value = "in")]
        unit: Unit,

        /// Quantity
        #[arg(long)]
        qty: Option<f64>,
    },

    /// Tint for a list of windows
    TintWindows {
        #[command(flatten)]
        roll: TintRollArgs,

        /// Window as [desc:]WIDTHxHEIGHT[:qty] in inches (repeatable)
        #[arg(short, long = "window")]
        windows: Vec<String>,
    },

    /// Printed media at a flat rate per ft²
    Print {
        /// Printing type (see `rates`)
        #[arg(long = "type", default_value = "")]
        print_type: String,

        #[arg(long)]
        width: Option<f64>,

        #[arg(long)]
        length: Option<f64>,

        /// Unit of width and length (in, ft)
        #[arg(long, default_value = "in")]
        unit: Unit,

        #[arg(long)]
        qty: Option<f64>,
    },

    /// Canvas banners cut from a roll
    Canvas {
        /// Roll width in inches
        #[arg(long)]
        roll_width: Option<f64>,

        /// Roll length in feet
        #[arg(long)]
        roll_length: Option<f64>,

        /// Roll price in USD
        #[arg(long)]
        roll_price: Option<f64>,

        /// auto, hAlongRoll or wAlongRoll
        #[arg(long, default_value = "auto")]
        orientation: Orientation,

        /// Default unit for banner dimensions without a suffix
        #[arg(long, default_value = "in")]
        unit: Unit,

        /// Banner as [desc:]WIDTHxHEIGHT[:qty] (repeatable)
        #[arg(short, long = "banner")]
        banners: Vec<String>,
    },

    /// Vinyl decals with transfer tape
    Decals {
        /// Decal as [desc:]WIDTHxHEIGHT[:qty]
        #[arg(long)]
        piece: String,

        /// Default unit for decal dimensions without a suffix
        #[arg(long, default_value = "in")]
        unit: Unit,

        /// Vinyl roll (e.g. 24x50yd)
        #[arg(long, default_value = "24x50yd")]
        vinyl_roll: String,

        #[arg(long)]
        vinyl_price: Option<f64>,

        /// home or buy
        #[arg(long, default_value = "home")]
        vinyl_source: MaterialSource,

        /// Transfer tape roll (e.g. 24x100yd)
        #[arg(long, default_value = "24x100yd")]
        tape_roll: String,

        #[arg(long)]
        tape_price: Option<f64>,

        /// home or buy
        #[arg(long, default_value = "home")]
        tape_source: MaterialSource,

        /// Flat shipping fee, charged once when anything is bought
        #[arg(long)]
        shipping: Option<f64>,
    },

    /// Run every job in a JSON job file
    Job {
        /// Input job file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// List printing rates and stocked roll sizes
    Rates,
}

/// Either the on-disk preferences or a throwaway store.
enum Prefs {
    File(JsonFileStore),
    Memory(MemoryStore),
}

impl Prefs {
    fn store(&mut self) -> &mut dyn PreferenceStore {
        match self {
            Prefs::File(store) => store,
            Prefs::Memory(store) => store,
        }
    }

    fn save(&mut self) -> Result<()> {
        if let Prefs::File(store) = self {
            store
                .save()
                .with_context(|| format!("Failed to save {}", store.path().display()))?;
        }
        Ok(())
    }
}

fn tint_roll_input(args: &TintRollArgs, prefs: &mut dyn PreferenceStore) -> TintRollInput {
    TintRollInput {
        width_in: prefs
            .remember(KEY_TINT_WIDTH, args.roll_width)
            .or(Some(DEFAULT_TINT_ROLL_WIDTH_IN)),
        price: prefs
            .remember(KEY_TINT_PRICE, args.roll_price)
            .or(Some(DEFAULT_TINT_ROLL_PRICE)),
    }
}

fn parse_rows(specs: &[String], unit: Unit) -> Result<Vec<PieceRow>> {
    specs
        .iter()
        .map(|s| parse_row(s, unit).with_context(|| format!("Invalid piece '{}'", s)))
        .collect()
}

/// Catalog id to store a remembered price under. Unknown ids are kept as
/// typed so the job itself reports them.
fn roll_id(catalog: &[RollSize], material: &str, id: &str) -> String {
    find_roll(catalog, material, id)
        .map(|size| size.id.to_string())
        .unwrap_or_else(|_| id.trim().to_string())
}

/// Turn command-line arguments into a job, filling prices from preferences.
fn build_job(command: Command, prefs: &mut dyn PreferenceStore) -> Result<Job> {
    let job = match command {
        Command::TintBase { roll } => Job::TintBase {
            roll: tint_roll_input(&roll, prefs),
        },
        Command::TintUse {
            roll,
            width,
            length,
            unit,
            qty,
        } => Job::TintUse {
            roll: tint_roll_input(&roll, prefs),
            run: TintUseInput {
                width_in: width,
                length,
                unit,
                qty,
            },
        },
        Command::TintWindows { roll, windows } => {
            let windows = parse_rows(&windows, Unit::Inches)?;
            Job::TintWindows {
                roll: tint_roll_input(&roll, prefs),
                windows,
            }
        }
        Command::Print {
            print_type,
            width,
            length,
            unit,
            qty,
        } => Job::Printing(PrintInput {
            print_type,
            width,
            length,
            unit,
            qty,
        }),
        Command::Canvas {
            roll_width,
            roll_length,
            roll_price,
            orientation,
            unit,
            banners,
        } => {
            let banners = parse_rows(&banners, unit)?;
            Job::Canvas {
                roll: CanvasRollInput {
                    width_in: roll_width,
                    length_ft: roll_length,
                    price: prefs.remember(KEY_CANVAS_PRICE, roll_price),
                },
                orientation,
                banners,
            }
        }
        Command::Decals {
            piece,
            unit,
            vinyl_roll,
            vinyl_price,
            vinyl_source,
            tape_roll,
            tape_price,
            tape_source,
            shipping,
        } => {
            let piece = parse_row(&piece, unit)
                .with_context(|| format!("Invalid piece '{}'", piece))?;
            let vinyl_id = roll_id(VINYL_ROLLS, VINYL, &vinyl_roll);
            let tape_id = roll_id(TAPE_ROLLS, TAPE, &tape_roll);
            Job::Decals(DecalInput {
                piece,
                vinyl: RollChoice {
                    price: prefs.remember(&vinyl_price_key(vinyl_source, &vinyl_id), vinyl_price),
                    roll_id: vinyl_id,
                    source: vinyl_source,
                },
                tape: RollChoice {
                    price: prefs.remember(&tape_price_key(tape_source, &tape_id), tape_price),
                    roll_id: tape_id,
                    source: tape_source,
                },
                shipping_fee: prefs.remember(KEY_SHIP_FEE, shipping),
            })
        }
        Command::Job { .. } | Command::Rates => {
            anyhow::bail!("not a single-job command")
        }
    };
    Ok(job)
}

fn print_rates() {
    println!("Printing rates:");
    for t in PrintType::ALL {
        println!("  {:<16} {:<24} ${:.2}/ft²", t.key(), t.label(), t.rate());
    }
    println!("Vinyl rolls:");
    for r in VINYL_ROLLS {
        println!("  {}", r.id);
    }
    println!("Transfer tape rolls:");
    for r in TAPE_ROLLS {
        println!("  {}", r.id);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut prefs = if args.no_prefs {
        Prefs::Memory(MemoryStore::new())
    } else {
        Prefs::File(JsonFileStore::open(&args.prefs))
    };

    let jobs = match args.command {
        Command::Rates => {
            print_rates();
            return Ok(());
        }
        Command::Job { input } => {
            info!("Processing: {}", input.display());
            parse_job_file(&input)
                .with_context(|| format!("Failed to parse {}", input.display()))?
        }
        command => vec![build_job(command, prefs.store())?],
    };

    prefs.save()?;

    let mut advisories = 0;
    for (idx, job) in jobs.iter().enumerate() {
        let validation = validate_job(job);
        for warning in &validation.warnings {
            warn!("Job {}: {}", idx + 1, warning);
        }
        if !validation.passed {
            for err in &validation.errors {
                error!("Job {}: {}", idx + 1, err);
            }
            advisories += 1;
            continue;
        }

        let quote = match run_job(job) {
            Ok(quote) => quote,
            Err(e) if e.is_advisory() => {
                warn!("Job {}: {}", idx + 1, e);
                advisories += 1;
                continue;
            }
            Err(e) => return Err(e).with_context(|| format!("Job {} failed", idx + 1)),
        };

        if args.json {
            println!("{}", serde_json::to_string_pretty(&quote)?);
        } else {
            if jobs.len() > 1 {
                println!("== Job {} ==", idx + 1);
            }
            print!("{}", render(&quote));
        }
    }

    if advisories > 0 {
        anyhow::bail!("{} job(s) could not be quoted", advisories);
    }

    Ok(())
}
