use clap::Parser;
use dicedist::{Calculator, DicePool};
use log::info;

/// Print the exact distribution of a dice pool as a bar chart.
#[derive(Parser, Debug)]
#[command(name = "chart")]
struct Args {
    /// Dice notation, e.g. `4d6dl1` or `2d20kh1`. Overrides the flags below.
    notation: Option<String>,

    /// Number of dice
    #[arg(long, default_value_t = 1)]
    dice: usize,

    /// Faces on every die
    #[arg(long, default_value_t = 6)]
    sides: u32,

    /// How many of the lowest dice to drop
    #[arg(long, default_value_t = 0)]
    drop: usize,

    /// Width of the longest bar
    #[arg(long, default_value_t = 60)]
    width: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let pool = match &args.notation {
        Some(n) => n.parse::<DicePool>()?,
        None => DicePool::uniform(args.dice, args.sides, args.drop)?,
    };
    info!("charting {pool}");

    let mut calc = Calculator::new();
    let dist = calc.recompute_pool(pool.clone())?;

    let (x, y) = dist.chart_series();
    let peak = y.iter().copied().fold(0.0f64, f64::max);

    println!("{pool}: {} outcomes", dist.total_outcomes());
    for (sum, p) in x.iter().zip(&y) {
        let bar = ((p / peak) * args.width as f64).round() as usize;
        println!("{sum:>4} {:>7.3}% {}", p * 100.0, "#".repeat(bar));
    }
    println!("mean {:.3}, mode {}", dist.mean(), dist.mode());

    Ok(())
}
