use std::path::PathBuf;

use aoc2017::knot::{self, KnotHasher, Ring};
use aoc2017::KnotError;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aoc2017", about = "Advent of Code 2017 solutions", version)]
struct Cli {
    /// Day number
    day: usize,
    /// 1 or 2
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: u8,
    /// Read day{day}test{N}.in instead of day{day}.in
    #[arg(short, long)]
    test: Option<usize>,
    /// Read this file instead of the one derived from the day
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Marks on the string for part 1 (the worked example uses 5)
    #[arg(long, default_value_t = knot::RING_CAPACITY)]
    ring_size: usize,
}

fn day10(part: u8, input: &str, ring_size: usize) -> Result<String, KnotError> {
    if part == 1 {
        let lengths = knot::pinch_lengths(input)?;
        let knot = KnotHasher::new(Ring::identity(ring_size)?).apply_sequence(&lengths);
        Ok(knot::checksum(knot.ring())?.to_string())
    } else {
        knot::knot_digest(input)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let fname = match (&cli.input, cli.test) {
        (Some(path), _) => path.clone(),
        (None, Some(test)) => PathBuf::from(format!("day{}test{}.in", cli.day, test)),
        (None, None) => PathBuf::from(format!("day{}.in", cli.day)),
    };
    info!(file = %fname.display(), day = cli.day, part = cli.part, "reading puzzle input");
    let input = std::fs::read_to_string(&fname)?;

    let time = std::time::Instant::now();
    let answer = match cli.day {
        10 => day10(cli.part, &input, cli.ring_size)?,
        day => return Err(format!("day {} is not solved here", day).into()),
    };
    info!(%answer, "solved");
    println!("{}", answer);
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
