use {
    anyhow::{Context, Result},
    clap::{Args, Parser, Subcommand},
    pagesim::{
        FifoSimulator,
        FrameRole,
        FrameSlot,
        LruSimulator,
        OptimalSimulator,
        Policy,
        ReferenceString,
        Session,
        StepResult,
        input::{parse_capacity, parse_length, random_reference_string},
        simulate,
    },
    rand::{SeedableRng, rngs::StdRng},
    std::io::{self, BufRead, Write},
};

#[derive(Parser)]
#[command(author, version, about = "Step through FIFO, LRU and Optimal page replacement")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one policy, printing every step
    Run {
        /// Replacement policy: fifo, lru or optimal
        #[arg(short, long)]
        policy: Policy,

        #[command(flatten)]
        input: Input,

        /// Wait for Enter before each step
        #[arg(long)]
        step: bool,
    },

    /// Simulate all policies and compare their fault counts
    Compare {
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args)]
struct Input {
    /// Number of frames
    #[arg(short, long)]
    frames: String,

    #[command(flatten)]
    source: Source,

    /// Seed for the random reference string
    #[arg(long, requires = "random")]
    seed: Option<u64>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Source {
    /// Whitespace-delimited reference string, e.g. "7 0 1 2 0 3"
    #[arg(short, long)]
    refs: Option<String>,

    /// Generate a random reference string of the given length
    #[arg(long)]
    random: Option<String>,
}

impl Input {
    fn frames(&self) -> Result<usize> {
        Ok(parse_capacity(&self.frames)?)
    }

    fn reference_string(&self) -> Result<ReferenceString<String>> {
        if let Some(refs) = &self.source.refs {
            return Ok(ReferenceString::from(refs.as_str()));
        }
        let text = self.source.random.as_deref().unwrap_or_default();
        let len = parse_length(text)?;
        let refs = match self.seed {
            Some(seed) => random_reference_string(&mut StdRng::seed_from_u64(seed), len)?,
            None => random_reference_string(&mut rand::rng(), len)?,
        };
        Ok(refs)
    }
}

fn render_slots(slots: &[FrameSlot<String>]) -> String {
    if slots.is_empty() {
        return "-".to_owned();
    }
    slots
        .iter()
        .map(|slot| match slot.role {
            FrameRole::Normal => format!("[{}]", slot.page),
            FrameRole::Hit => format!("[{}]*", slot.page),
            FrameRole::Evicted => format!("[{}]-", slot.page),
            FrameRole::Inserted => format!("[{}]+", slot.page),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_step(step: &StepResult<String>) -> String {
    format!(
        "{:>3}  page {:<3} {:<4}  faults {:<3}  {} => {}",
        step.index,
        step.page,
        if step.is_fault() { "MISS" } else { "HIT" },
        step.faults,
        render_slots(&step.frames_before),
        render_slots(&step.frames_after),
    )
}

fn wait_for_enter() -> Result<()> {
    print!("-- press Enter --");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn run(policy: Policy, input: &Input, interactive: bool) -> Result<()> {
    let refs = input.reference_string()?;
    let frames = input.frames()?;
    println!("{policy} with {frames} frames: {}", refs.as_slice().join(" "));
    println!("legend: [p]* hit, [p]- evicted, [p]+ inserted");

    let mut session = Session::new();
    session.select(policy);
    let mut step = session
        .start(refs, frames)
        .context("failed to start simulation")?;
    loop {
        println!("{}", render_step(&step));
        if step.completed {
            break;
        }
        if interactive {
            wait_for_enter()?;
        }
        match session.advance() {
            Some(next) => step = next,
            None => break,
        }
    }
    println!("Simulation complete: {} page faults", step.faults);
    Ok(())
}

fn compare(input: &Input) -> Result<()> {
    let refs = input.reference_string()?;
    let frames = input.frames()?;
    println!("{} frames: {}", frames, refs.as_slice().join(" "));

    for policy in Policy::ALL {
        let steps = match policy {
            Policy::Fifo => simulate(&mut FifoSimulator::new(), refs.clone(), frames)?,
            Policy::Lru => simulate(&mut LruSimulator::new(), refs.clone(), frames)?,
            Policy::Optimal => simulate(&mut OptimalSimulator::new(), refs.clone(), frames)?,
        };
        let faults = steps.last().map_or(0, |step| step.faults);
        let pattern: String = steps
            .iter()
            .map(|step| if step.is_fault() { 'M' } else { 'H' })
            .collect();
        println!("{:<8} {faults:>3} faults  {pattern}", policy.name());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            policy,
            input,
            step,
        } => run(policy, &input, step),
        Commands::Compare { input } => compare(&input),
    }
}
