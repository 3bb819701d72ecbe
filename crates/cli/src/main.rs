//! Cache simulator CLI.
//!
//! This binary drives one simulator session from the terminal. It performs:
//! 1. **Run:** Execute the sample program (or a program file) step by step, printing each
//!    step's operation, cost, and explanation, then the final machine state and statistics.
//! 2. **Disassemble:** Decode a program file and print each line in canonical form or
//!    its decode error.
//!
//! Logging goes to stderr and is filtered by `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cachesim_core::Simulator;
use cachesim_core::config::{Config, MappingMode};
use cachesim_core::isa;
use cachesim_core::sim::loader;
use cachesim_core::stats::SimStats;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Step-by-step CPU and cache simulator",
    long_about = "Run a LOAD/STORE/ADD/SUB program against a 4-line cache and watch every hit, miss, and cycle.\n\nExamples:\n  cachesim run\n  cachesim run --program demos/sum.asm --mode associative\n  cachesim run --config demos/config.json --json\n  cachesim disasm demos/sum.asm"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program and print every step plus the final state.
    Run {
        /// Program text file (defaults to the built-in sample program).
        #[arg(short, long)]
        program: Option<String>,

        /// Cache placement policy (overrides the config file).
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<String>,

        /// Maximum number of steps to run.
        #[arg(short, long)]
        steps: Option<usize>,

        /// Print a JSON report instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Decode a program file and print each line's canonical form.
    Disasm {
        /// Program text file.
        path: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Direct,
    Associative,
}

impl From<ModeArg> for MappingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Direct => Self::DirectMapped,
            ModeArg::Associative => Self::Associative,
        }
    }
}

#[derive(Serialize)]
struct StepReport {
    operation: String,
    explanation: String,
    cost: u64,
    hit: Option<bool>,
    error: Option<String>,
}

#[derive(Serialize)]
struct RunReport<'a> {
    mapping_mode: MappingMode,
    steps: Vec<StepReport>,
    registers: String,
    memory: String,
    cache_lines: Vec<String>,
    cache_hits: u64,
    cache_misses: u64,
    total_cycles: u64,
    history: &'a [String],
    stats: &'a SimStats,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Run {
            program,
            mode,
            config,
            steps,
            json,
        } => cmd_run(program, mode, config, steps, json),
        Commands::Disasm { path } => cmd_disasm(&path),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}

/// Runs a program to completion (or `steps`) and prints the session.
fn cmd_run(
    program: Option<String>,
    mode: Option<ModeArg>,
    config_path: Option<String>,
    steps: Option<usize>,
    json: bool,
) -> Result<(), String> {
    let mut config = match config_path {
        Some(path) => Config::from_file(&path).map_err(|e| e.to_string())?,
        None => Config::default(),
    };
    if let Some(mode) = mode {
        config.cache.mapping = mode.into();
    }

    let mut sim = Simulator::new(config);
    match program {
        Some(path) => {
            let lines = loader::load_program_file(&path).map_err(|e| e.to_string())?;
            let _ = sim.set_program(lines);
        }
        None => sim.load_default_program(),
    }

    let limit = steps.unwrap_or_else(|| sim.program_len());
    let results = sim.run_to_end(limit);

    if json {
        let report = RunReport {
            mapping_mode: sim.cache_mapping_mode(),
            steps: results
                .iter()
                .map(|r| StepReport {
                    operation: r.operation.clone(),
                    explanation: r.explanation.clone(),
                    cost: r.cost,
                    hit: r.outcome.hit(),
                    error: r.outcome.error().map(ToString::to_string),
                })
                .collect(),
            registers: sim.registers_summary(),
            memory: sim.memory_summary(),
            cache_lines: (0..sim.cache_line_count())
                .map(|i| sim.cache_line_summary(i))
                .collect(),
            cache_hits: sim.cache_hit_miss_counts().0,
            cache_misses: sim.cache_hit_miss_counts().1,
            total_cycles: sim.total_cycles(),
            history: sim.history(),
            stats: sim.stats(),
        };
        let text = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!("Mapping mode: {:?}", sim.cache_mapping_mode());
    println!();
    for (idx, result) in results.iter().enumerate() {
        println!("{idx:>3}  {result}");
    }
    println!();
    println!("Registers: {}", sim.registers_summary());
    println!("Memory:    {}", sim.memory_summary());
    println!("Cache:");
    for idx in 0..sim.cache_line_count() {
        println!("  [{idx}] {}", sim.cache_line_summary(idx));
    }
    let (hits, misses) = sim.cache_hit_miss_counts();
    println!("Hits: {hits}  Misses: {misses}");
    println!("Total cycles: {}", sim.total_cycles());
    println!();
    sim.stats().print();
    Ok(())
}

/// Prints each line of a program file decoded, or its decode error.
fn cmd_disasm(path: &str) -> Result<(), String> {
    let lines = loader::load_program_file(path).map_err(|e| e.to_string())?;
    for (idx, line) in lines.iter().enumerate() {
        match isa::decode(line) {
            Ok(inst) => println!("{idx:>3}  {}", isa::disassemble(&inst)),
            Err(err) => println!("{idx:>3}  ; {err}"),
        }
    }
    Ok(())
}
