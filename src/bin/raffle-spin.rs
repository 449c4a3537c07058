use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use raffle_spin::{
    AnimationController, ControllerOpts, CurveParameters, CurvePreset, Entry, EntryList,
    FrameClock, ManualClock, SpinObserver, SpinOutcome, SpinSettings, SystemClock,
    VisibleWindow,
};

#[derive(Parser, Debug)]
#[command(name = "raffle-spin", version)]
struct Cli {
    /// Log engine events to stderr (repeat for per-frame tracing).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a deterministic sample entry list as JSON.
    Sample(SampleArgs),
    /// Print the spin plan for a ticket as JSON.
    Plan(PlanArgs),
    /// Run a spin on a simulated clock, printing one JSON line per frame.
    Simulate(SimulateArgs),
    /// Print points along an easing curve.
    Curve(CurveArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Number of entries.
    #[arg(long)]
    count: usize,

    /// First ticket number.
    #[arg(long, default_value_t = 1)]
    start_ticket: u64,

    /// Seed for name selection.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SpinInputArgs {
    /// Entry list JSON (array of {first_name, last_name, ticket_number}).
    #[arg(long)]
    entries: PathBuf,

    /// Winning ticket number (exact match).
    #[arg(long)]
    ticket: String,

    /// Spin settings JSON. Defaults apply when omitted.
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    input: SpinInputArgs,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    input: SpinInputArgs,

    /// Simulated display frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Rows rendered on each side of the pointer.
    #[arg(long)]
    radius: Option<usize>,

    /// Pace frames against the wall clock instead of simulating time.
    #[arg(long)]
    realtime: bool,
}

#[derive(Parser, Debug)]
struct CurveArgs {
    /// Named preset. Ignored when all four control coordinates are given.
    #[arg(long, value_enum, default_value_t = PresetChoice::EaseOut)]
    preset: PresetChoice,

    #[arg(long, requires_all = ["y1", "x2", "y2"])]
    x1: Option<f64>,
    #[arg(long)]
    y1: Option<f64>,
    #[arg(long)]
    x2: Option<f64>,
    #[arg(long)]
    y2: Option<f64>,

    /// Number of time steps to sample.
    #[arg(long, default_value_t = 10)]
    samples: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    Linear,
    EaseInOut,
    EaseOut,
    EaseIn,
    Dramatic,
    SmoothStop,
}

impl From<PresetChoice> for CurvePreset {
    fn from(p: PresetChoice) -> Self {
        match p {
            PresetChoice::Linear => Self::Linear,
            PresetChoice::EaseInOut => Self::EaseInOut,
            PresetChoice::EaseOut => Self::EaseOut,
            PresetChoice::EaseIn => Self::EaseIn,
            PresetChoice::Dramatic => Self::Dramatic,
            PresetChoice::SmoothStop => Self::SmoothStop,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Curve(args) => cmd_curve(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_entries(path: &Path) -> anyhow::Result<EntryList> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read entries '{}'", path.display()))?;
    Ok(EntryList::from_json_str(&s)?)
}

fn read_settings(path: Option<&Path>) -> anyhow::Result<SpinSettings> {
    let Some(path) = path else {
        return Ok(SpinSettings::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read settings '{}'", path.display()))?;
    Ok(SpinSettings::from_json_str(&s)?)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let entries = raffle_spin::sample_entries(args.count, args.start_ticket, args.seed);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(&args.out)
        .with_context(|| format!("create entries '{}'", args.out.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), &entries)
        .with_context(|| "write entries JSON")?;

    eprintln!("wrote {} ({} entries)", args.out.display(), entries.len());
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let entries = read_entries(&args.input.entries)?;
    let settings = read_settings(args.input.settings.as_deref())?;
    let index = entries
        .find_ticket(&args.input.ticket)
        .ok_or_else(|| raffle_spin::SpinError::target_not_found(&args.input.ticket))?;

    let plan = raffle_spin::plan(index, entries.len(), &settings)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

#[derive(serde::Serialize)]
struct FrameLine<'a> {
    frame: u64,
    position: f64,
    window: &'a VisibleWindow,
}

struct JsonLinesObserver<W: std::io::Write> {
    out: W,
    frame: u64,
    error: Option<std::io::Error>,
}

impl<W: std::io::Write> JsonLinesObserver<W> {
    fn write_line(&mut self, value: &impl serde::Serialize) {
        if self.error.is_some() {
            return;
        }
        let res = serde_json::to_writer(&mut self.out, value)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = res {
            self.error = Some(e);
        }
    }
}

impl<W: std::io::Write> SpinObserver for JsonLinesObserver<W> {
    fn on_position_update(&mut self, position: f64, window: &VisibleWindow) {
        let line = FrameLine {
            frame: self.frame,
            position,
            window,
        };
        self.write_line(&line);
        self.frame += 1;
    }

    fn on_spin_complete(&mut self, winner: &Entry) {
        self.write_line(&serde_json::json!({
            "winner": winner,
            "display_name": winner.display_name(),
        }));
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let entries = read_entries(&args.input.entries)?;
    let settings = read_settings(args.input.settings.as_deref())?;
    let clock: Box<dyn FrameClock> = if args.realtime {
        Box::new(SystemClock::new(args.fps)?)
    } else {
        Box::new(ManualClock::with_fps(args.fps)?)
    };

    let mut opts = ControllerOpts::default();
    if let Some(radius) = args.radius {
        opts.window_radius = radius;
    }

    let stdout = std::io::stdout();
    let observer = JsonLinesObserver {
        out: BufWriter::new(stdout.lock()),
        frame: 0,
        error: None,
    };
    let mut controller =
        AnimationController::new(entries, settings, clock, observer).with_opts(opts)?;
    let outcome = controller.spin(&args.input.ticket)?;

    let observer = controller.observer_mut();
    if let Some(e) = observer.error.take() {
        return Err(e).with_context(|| "write frames");
    }
    observer.out.flush().with_context(|| "flush frames")?;

    match outcome {
        SpinOutcome::Completed(winner) => {
            eprintln!("winner: {} ({})", winner.display_name(), winner.ticket_number);
        }
        SpinOutcome::Cancelled => eprintln!("spin cancelled"),
    }
    Ok(())
}

fn cmd_curve(args: CurveArgs) -> anyhow::Result<()> {
    let curve = match (args.x1, args.y1, args.x2, args.y2) {
        (Some(x1), Some(y1), Some(x2), Some(y2)) => CurveParameters::new(x1, y1, x2, y2),
        _ => CurvePreset::from(args.preset).curve(),
    };
    curve.validate()?;

    let samples = args.samples.max(1);
    let points: Vec<serde_json::Value> = (0..=samples)
        .map(|i| {
            let t = i as f64 / samples as f64;
            serde_json::json!({ "time": t, "progress": curve.progress_at(t) })
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "curve": curve,
            "points": points,
        }))?
    );
    Ok(())
}
