use gravsim::{ScenarioConfig, Scenario, NVec2};
use gravsim::{bench_forces, bench_step, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file: a path, or a name under the crate's `scenarios/` directory
    #[arg(short, default_value = "momentum-demo.yaml")]
    file_name: String,

    /// Stop after this many ticks instead of at `t_end`
    #[arg(short = 'n', long)]
    steps: Option<u64>,

    /// Log a summary every this many ticks
    #[arg(short, long, default_value_t = 60)]
    report_every: u64,

    /// Run the benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn report(scenario: &Scenario) {
    let sys = &scenario.system;
    let p = sys.total_momentum();
    let com = sys.center_of_mass().unwrap_or_else(NVec2::zeros);
    info!(
        "tick {:6} t = {:10.3} bodies = {:4} mass = {:.3} p = ({:.4}, {:.4}) com = ({:.3}, {:.3})",
        sys.ticks,
        sys.t,
        sys.len(),
        sys.total_mass(),
        p.x,
        p.y,
        com.x,
        com.y
    );
}

fn run_benchmarks() -> Result<()> {
    println!("force pass");
    for row in bench_forces().context("force pass benchmark")? {
        println!("N = {:5}, forces = {:10.4} ms", row.n, row.ms);
    }

    println!("full tick");
    for row in bench_step().context("tick benchmark")? {
        println!("N = {:5}, step = {:10.4} ms", row.n, row.ms);
    }

    println!("N,step_ms");
    for row in bench_step_curve().context("tick curve benchmark")? {
        println!("{},{:.6}", row.n, row.ms);
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        return run_benchmarks();
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("building scenario")?;
    let every = args.report_every.max(1);

    report(&scenario);
    loop {
        let done = match args.steps {
            Some(n) => scenario.system.ticks >= n,
            None => scenario.is_finished(),
        };
        if done {
            break;
        }

        scenario
            .step()
            .with_context(|| format!("tick {}", scenario.system.ticks + 1))?;

        if scenario.system.ticks % every == 0 {
            report(&scenario);
        }
    }

    info!("finished after {} ticks", scenario.system.ticks);
    report(&scenario);

    Ok(())
}
