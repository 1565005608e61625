use anyhow::Result;
use clap::Parser;
use log::info;
use skirmish::{build_agents, config::WorldConfig, export_results, model_path, results_path};
use skirmish_core::{record::NullRecorder, Env, Trainer};
use skirmish_env::ShooterEnv;
use std::path::PathBuf;

/// Trains shooter agents against each other.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// World configuration file (YAML); defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for model weights and result files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Overrides the number of epochs of the configuration.
    #[arg(long)]
    epochs: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut world = match &args.config {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::default(),
    };
    if let Some(epochs) = args.epochs {
        world.trainer = world.trainer.clone().epochs(epochs);
    }
    fastrand::seed(world.seed);

    let mut env = ShooterEnv::build(&world.env, world.seed)?;
    let mut agents = build_agents(&world)?;
    for (ix, agent) in agents.iter_mut().enumerate() {
        let path = model_path(&args.out_dir, ix);
        if path.is_file() {
            info!("Loading weights for agent {} from {}", ix, path.display());
            agent.load(&path)?;
        }
    }

    let epsilons: Vec<f64> = world
        .players
        .iter()
        .take(agents.len())
        .map(|p| if p.random { 1.0 } else { world.trainer.epsilon })
        .collect();
    let trainer = Trainer::build(world.trainer.clone());
    let report = trainer.train_with_epsilons(&mut env, &mut agents, &epsilons, &mut NullRecorder::new())?;

    for (ix, agent) in agents.iter().enumerate() {
        agent.save(model_path(&args.out_dir, ix))?;
        info!(
            "Agent {}: {} wins, final score {}, accuracy {:.1}%",
            ix,
            report.wins[ix],
            env.score(ix),
            env.player_accuracy(ix)
        );
    }
    let results = results_path(&args.out_dir);
    export_results(&results, &report)?;
    info!("Win history written to {}", results.display());
    Ok(())
}
