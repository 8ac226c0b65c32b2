use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{ArgAction, Parser, ValueEnum};
use sortreel::{
    Algorithm, BatchOpts, GifOpts, GifVisualizer, NullVisualizer, Pacing, RunConfig, SortOutcome,
    TerminalVisualizer,
};

#[derive(Parser, Debug)]
#[command(
    name = "sortreel",
    version,
    about = "Watch sorting algorithms work, in the terminal or as animated GIFs"
)]
struct Cli {
    /// Algorithm to run (bubble, cocktail, comb, counting, cycle, gnome, insertion, odd-even,
    /// selection, clock, stooge, pancake, quick, merge, shell, heap, radix, bitonic) or `all`.
    #[arg(long, default_value = "bubble")]
    algo: String,

    /// Output: animate on stdout, write GIFs, or only report frame counts.
    #[arg(long, value_enum, default_value_t = VisChoice::Stdout)]
    vis: VisChoice,

    /// Frames per second for terminal output.
    #[arg(long)]
    fps: Option<u32>,

    /// Highest value in the generated input.
    #[arg(long)]
    max: Option<u32>,

    /// Number of values in the generated input.
    #[arg(long)]
    count: Option<usize>,

    /// Fill mode: 1 fills below each value, 2 fills above, anything else draws the value only.
    #[arg(long)]
    mode: Option<i64>,

    /// Seed for the input generator (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Clock-sort delay per unit of value, in milliseconds.
    #[arg(long)]
    clock_tick_ms: Option<u64>,

    /// JSON run configuration; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory receiving `<algorithm>.gif` files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Run several algorithms concurrently (`gif` and `none` output only).
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Skip the start-up pause and frame pacing.
    #[arg(long, default_value_t = false)]
    unpaced: bool,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum VisChoice {
    Stdout,
    Gif,
    None,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = resolve_config(&cli)?;
    let algorithms = resolve_algorithms(&cli.algo)?;
    if cli.parallel && cli.vis == VisChoice::Stdout {
        anyhow::bail!("--parallel cannot be combined with --vis stdout");
    }

    let input = sortreel::random_sequence(cfg.count, cfg.max, cfg.seed);
    let sort_cfg = cfg.sort_config();
    let render_cfg = cfg.render_config();
    let opts = BatchOpts {
        parallel: cli.parallel,
        threads: cli.threads,
    };

    println!(
        "sorting via {}-sort\nhighest value: {}\nnumber of values: {}\n",
        cli.algo, cfg.max, cfg.count
    );

    let outcomes = match cli.vis {
        VisChoice::Stdout => {
            let pacing = if cli.unpaced {
                Pacing::Unpaced
            } else {
                std::thread::sleep(Duration::from_secs(1));
                Pacing::RealTime(cfg.fps()?)
            };
            sortreel::run_batch(&algorithms, &input, &sort_cfg, &opts, |_| {
                Ok(TerminalVisualizer::stdout(render_cfg, pacing))
            })
        }
        VisChoice::Gif => {
            let gif_opts = GifOpts::new(&cli.out_dir);
            sortreel::run_batch(&algorithms, &input, &sort_cfg, &opts, |_| {
                Ok(GifVisualizer::new(gif_opts.clone(), render_cfg))
            })
        }
        VisChoice::None => sortreel::run_batch(&algorithms, &input, &sort_cfg, &opts, |_| {
            Ok(NullVisualizer)
        }),
    }
    .context("sort run failed")?;

    report(&cli, &outcomes);
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn resolve_config(cli: &Cli) -> anyhow::Result<RunConfig> {
    let mut cfg = match &cli.config {
        Some(path) => RunConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => RunConfig::default(),
    };
    if let Some(v) = cli.fps {
        cfg.fps = v;
    }
    if let Some(v) = cli.max {
        cfg.max = v;
    }
    if let Some(v) = cli.count {
        cfg.count = v;
    }
    if let Some(v) = cli.mode {
        cfg.mode = v;
    }
    if let Some(v) = cli.seed {
        cfg.seed = Some(v);
    }
    if let Some(v) = cli.clock_tick_ms {
        cfg.clock_tick_ms = v;
    }
    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}

fn resolve_algorithms(name: &str) -> anyhow::Result<Vec<Algorithm>> {
    if name == "all" {
        return Ok(Algorithm::ALL.to_vec());
    }
    Ok(vec![name.parse::<Algorithm>()?])
}

fn report(cli: &Cli, outcomes: &[SortOutcome]) {
    for outcome in outcomes {
        match cli.vis {
            VisChoice::Stdout => {}
            VisChoice::Gif => {
                let path = cli.out_dir.join(format!("{}.gif", outcome.algorithm.name()));
                eprintln!("wrote {}", path.display());
            }
            VisChoice::None => println!(
                "{}: {} frames, sorted={}",
                outcome.algorithm,
                outcome.frames,
                sortreel::is_sorted(&outcome.sorted)
            ),
        }
    }
}
