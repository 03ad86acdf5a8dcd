//! Maze Land command line tool
//!
//! Generates a maze and prints it as ASCII together with the world positions
//! of its entrance and exit. With `--bench`, generates many mazes with
//! consecutive seeds and prints timing and work statistics instead.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use maze_land::benchmarks::{self, BenchmarkConfig, Profiler, Timer};
use maze_land::{Grid, MazeConfig, MazeGenerator};

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Perfect maze generator", long_about = None)]
struct Args {
    /// Grid rows; even values are rounded down to odd
    #[arg(short, long, default_value_t = maze_land::config::DEFAULT_ROWS)]
    rows: usize,

    /// Grid columns; even values are rounded down to odd
    #[arg(short, long, default_value_t = maze_land::config::DEFAULT_COLS)]
    cols: usize,

    /// Seed for a reproducible maze
    #[arg(short, long)]
    seed: Option<u64>,

    /// Side length of one cell in world units
    #[arg(long, default_value_t = maze_land::config::DEFAULT_CELL_SIDE)]
    cell_side: f32,

    /// Cap on wall-extension steps
    #[arg(long)]
    step_limit: Option<usize>,

    /// Generate this many mazes and print performance statistics
    #[arg(long, value_name = "RUNS")]
    bench: Option<usize>,

    /// Also write the benchmark summary to debug-analytics/benchmarks
    #[arg(long, default_value_t = false, requires = "bench")]
    report: bool,
}

impl Args {
    fn maze_config(&self) -> MazeConfig {
        MazeConfig {
            rows: self.rows,
            cols: self.cols,
            cell_side: self.cell_side,
            seed: self.seed,
            step_limit: self.step_limit,
        }
    }
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Args::parse()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.maze_config();

    match args.bench {
        Some(runs) => bench(&config, runs, args.report),
        None => {
            let grid = MazeGenerator::from_config(&config)?
                .generate()
                .context("maze generation failed")?;
            print_maze(&grid, config.cell_side);
            Ok(())
        }
    }
}

fn print_maze(grid: &Grid, cell_side: f32) {
    let (rows, cols) = grid.dimensions();
    let entrance = grid.space_to_world(grid.entrance(), cell_side);
    let exit = grid.space_to_world(grid.exit(), cell_side);

    println!("{grid}");
    println!("{rows}x{cols} maze, {} aisles", grid.aisle_count());
    println!(
        "entrance {:?} at ({:.1}, {:.1})",
        grid.entrance(),
        entrance.x(),
        entrance.y()
    );
    println!("exit {:?} at ({:.1}, {:.1})", grid.exit(), exit.x(), exit.y());
    println!("{} dead ends", grid.dead_ends().len());
}

/// Generates `runs` mazes with consecutive seeds, timing generation and the
/// queries agents and scene builders run on each result.
fn bench(config: &MazeConfig, runs: usize, report: bool) -> Result<()> {
    let base_seed = config.seed.unwrap_or(0);
    let bench_config = BenchmarkConfig::always().with_report(report);
    let mut profiler = Profiler::new(bench_config.clone());

    info!(
        "benchmarking {runs} mazes of {}x{} from seed {base_seed}",
        config.rows, config.cols
    );
    benchmarks::clear_measurements();

    for run in 0..runs {
        let seed = base_seed.wrapping_add(run as u64);
        let generator = MazeGenerator::from_config(&config.clone().seeded(seed))?;

        let timer = Timer::new("maze_generation", bench_config.clone());
        let (grid, stats) = generator
            .generate_with_stats()
            .with_context(|| format!("seed {seed}"))?;
        timer.stop();
        benchmarks::record_generation(&stats);

        profiler.time_closure("wall_positions_query", || grid.wall_positions(config.cell_side));
        profiler.time_closure("dead_ends_query", || grid.dead_ends());
        let perfect = profiler.time_closure("perfect_check_query", || grid.is_perfect());
        anyhow::ensure!(perfect, "seed {seed} produced an imperfect maze");
    }

    benchmarks::print_summary();

    if let Some(path) = benchmarks::write_results_if_enabled(
        &bench_config,
        Path::new(benchmarks::REPORT_DIR),
        "maze-land --bench",
    )
    .context("failed to write benchmark report")?
    {
        println!("report written to {}", path.display());
    }
    Ok(())
}
