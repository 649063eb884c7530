//! Elementary automaton CLI - Seed or load a board, evolve it, and hand it
//! to the requested outputs.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use wolfram_ca::{
    codec::{read_board, write_board},
    compute::{Board, Evolver, RuleTable},
    render::{ColorRenderer, Renderer, TextRenderer, run_scroll},
    schema::{EvolutionMode, SeedPolicy, SeedRng, SimulationConfig},
};

/// Everything a run needs beyond the simulation configuration.
#[derive(Default)]
struct Options {
    print: bool,
    write: Option<PathBuf>,
    read: Option<PathBuf>,
    color: bool,
    rng_seed: Option<u64>,
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_usage(&args[0]);
        return;
    }

    if args.iter().any(|arg| arg == "--example") {
        print_example_config();
        return;
    }

    let (mut config, options) = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    // Load or create the board. A file replaces seeding entirely, and its
    // dimensions win over the configured ones.
    let loaded = options.read.as_ref().map(|path| {
        let board = read_board(path, &config).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
        config.num_cells = board.num_cells();
        config.num_time = board.num_time();
        board
    });

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let mut board = loaded.unwrap_or_else(|| {
        let mut rng = match options.rng_seed {
            Some(seed) => SeedRng::new(seed),
            None => SeedRng::random(),
        };
        let mut board = Board::from_seed(&config, &mut rng);
        if config.mode == EvolutionMode::Batch {
            Evolver::new(EvolutionMode::Batch).run(&mut board);
        }
        board
    });

    if let Some(path) = &options.write {
        if let Err(e) = write_board(path, &board) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    if options.print {
        print!("{}", TextRenderer::default().render(&board));
    }

    if config.mode == EvolutionMode::Scroll {
        let step_interval = Duration::from_millis(config.step_ms);
        let result = if options.color {
            run_scroll(&mut board, &ColorRenderer::default(), step_interval)
        } else {
            run_scroll(&mut board, &TextRenderer::default(), step_interval)
        };
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Parse flags in order into a configuration and run options.
fn parse_args(args: &[String]) -> Result<(SimulationConfig, Options), String> {
    let mut config = SimulationConfig::default();
    let mut options = Options::default();

    let mut iter = args.iter().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--config" => {
                let path = value(&mut iter, flag)?;
                let text = fs::read_to_string(path)
                    .map_err(|e| format!("cannot read config file '{}': {}", path, e))?;
                config = serde_json::from_str(&text)
                    .map_err(|e| format!("cannot parse config file '{}': {}", path, e))?;
            }
            "-c" | "--cells" => config.num_cells = parsed(&mut iter, flag)?,
            "-t" | "--time" => config.num_time = parsed(&mut iter, flag)?,
            "-u" | "--rule" => {
                let number: i64 = parsed(&mut iter, flag)?;
                let rule = RuleTable::from_number(number).map_err(|e| e.to_string())?;
                config.rule = rule.number() as u32;
            }
            "-i" | "--weight" => {
                let weight: f64 = parsed(&mut iter, flag)?;
                config.seed = SeedPolicy::weighted(weight).map_err(|e| e.to_string())?;
            }
            "-l" | "--scroll" => config.mode = EvolutionMode::Scroll,
            "--step-ms" => config.step_ms = parsed(&mut iter, flag)?,
            "--seed" => options.rng_seed = Some(parsed(&mut iter, flag)?),
            "-p" | "--print" => options.print = true,
            "-w" | "--write" => options.write = Some(PathBuf::from(value(&mut iter, flag)?)),
            "-r" | "--read" => options.read = Some(PathBuf::from(value(&mut iter, flag)?)),
            "--color" => options.color = true,
            other => return Err(format!("unknown flag '{}' (try --help)", other)),
        }
    }

    Ok((config, options))
}

/// The argument following a value flag.
fn value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a str, String> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| format!("flag '{}' expects a value", flag))
}

/// The argument following a value flag, parsed.
fn parsed<'a, T: std::str::FromStr>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<T, String> {
    let raw = value(iter, flag)?;
    raw.parse()
        .map_err(|_| format!("invalid value '{}' for flag '{}'", raw, flag))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Evolve an elementary cellular automaton and print, save or scroll it.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --cells N      row width in cells (default: 80)");
    eprintln!("  -t, --time N       number of rows (default: 80)");
    eprintln!("  -u, --rule N       Wolfram rule number 0-255 (default: 30)");
    eprintln!("  -i, --weight P     random seeding, each cell live with probability P");
    eprintln!("  -p, --print        print the board to stdout");
    eprintln!("  -w, --write FILE   write the board to FILE");
    eprintln!("  -r, --read FILE    read the board from FILE instead of seeding");
    eprintln!("  -l, --scroll       scroll the board live in the terminal ('q' quits)");
    eprintln!("      --step-ms MS   minimum milliseconds per scroll step (default: 100)");
    eprintln!("      --seed N       fix the RNG seed for reproducible random seeding");
    eprintln!("      --color        draw the scroll view with colored cells");
    eprintln!("      --config FILE  start from a JSON configuration, then apply flags");
    eprintln!("      --example      print an example JSON configuration");
}

fn print_example_config() {
    let config = SimulationConfig {
        seed: SeedPolicy::WeightedRandom { weight: 0.5 },
        mode: EvolutionMode::Scroll,
        ..Default::default()
    };

    println!("Example configuration (--config FILE):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
