//! walk — command-line front end for the drunkwalk simulator.
//!
//! Adds the requested number of each kind of drunk to one map, lets every
//! drunk take `--steps` steps, then prints how far each group ended up from
//! the starting point.
//!
//! ```text
//! walk --map torus --size 15 --four-directions 3 --any-length 2 --steps 500
//! walk --map portals --portal 0,3:40,40 --portal -3,0:-40,-40 --paths
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG=debug` to see every wrap and teleport.

mod args;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dw_map::{Boundary, Domain, MapEngine, Plane, Portals, Torus};
use dw_policy::PolicyKind;
use dw_report::{DisplacementSummary, LogObserver, agent_rows, path_segments};
use dw_sim::{WalkBuilder, WalkConfig};

use args::{Args, MapKind};

fn build_domain(args: &Args) -> Result<Domain> {
    if args.map != MapKind::Portals && !args.portals.is_empty() {
        warn!(map = ?args.map, "--portal ignored: map has no portals");
    }
    Ok(match args.map {
        MapKind::Plane => Plane::new().into(),
        MapKind::Torus => Torus::new(args.size)?.into(),
        MapKind::Portals => {
            let (entrances, exits) = args.portals.iter().copied().unzip();
            let mut portals = Portals::new(entrances, exits)?;
            if let Some(eps) = args.portal_tolerance {
                portals = portals.with_tolerance(eps)?;
            }
            portals.into()
        }
    })
}

fn print_positions<B: Boundary>(map: &MapEngine<B>) {
    println!();
    println!("{:>4}  {:<26} {:>22} {:>10} {:>6}", "id", "drunk", "final position", "distance", "jumps");
    for row in agent_rows(map) {
        println!(
            "{:>4}  {:<26} {:>22} {:>10.4} {:>6}",
            row.agent_id.0,
            row.name,
            row.position.to_string(),
            row.distance,
            row.jumps,
        );
    }
}

fn print_paths<B: Boundary>(map: &MapEngine<B>) {
    println!();
    println!("{:>4}  {:>10} {:>10}", "id", "segments", "skipped");
    for (id, state) in map.store().iter() {
        let all = path_segments(state.trajectory(), true).len();
        let drawn = path_segments(state.trajectory(), false).len();
        println!("{:>4}  {:>10} {:>10}", id.0, drawn, all - drawn);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let total = args.four_directions + args.biased + args.any_direction + args.any_length;
    if total == 0 {
        bail!("no drunks requested; pass at least one of --four-directions, --biased, --any-direction, --any-length");
    }

    let domain = build_domain(&args)?;
    let config = WalkConfig::new(args.seed, args.steps);
    info!(map = domain.name(), drunks = total, steps = args.steps, seed = args.seed, "setting up walk");

    let mut walk = WalkBuilder::new(config, domain)
        .agents(PolicyKind::FourDirections, args.four_directions)
        .agents(PolicyKind::FourDirectionsBiased, args.biased)
        .agents(PolicyKind::AnyDirection, args.any_direction)
        .agents(PolicyKind::AnyDirectionAndLength, args.any_length)
        .build()?;

    let mut observer = LogObserver::new(args.progress_every);
    walk.run(&mut observer)?;

    println!("{}", DisplacementSummary::from_map(walk.map()));
    print_positions(walk.map());
    if args.paths {
        print_paths(walk.map());
    }

    Ok(())
}
