//! Runs the coaster without a game engine and reports how the carts fared

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use coaster_sim::{config::SimConfig, my_float::Fpt, Simulation};

mod plot;

#[derive(Debug, clap::Parser)]
struct Args {
    /// A json config file, missing fields take their defaults
    #[arg(short, long)]
    config: Option<String>,
    /// A json track file (`{ "positions": [[x, y], ...] }`)
    #[arg(short, long)]
    points_file: Option<String>,
    /// Ride a random track of this many points instead
    #[arg(long)]
    random: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Simulated seconds
    #[arg(short, long, default_value_t = 20.0)]
    seconds: Fpt,
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: Fpt,
    /// Save the track and the g history of every cart to /tmp
    #[arg(long)]
    plot: bool,
    /// Write the track that was ridden to this path, in `--points-file` form
    #[arg(long)]
    save_track: Option<String>,
    /// Write the effective config (after clamping) to this path
    #[arg(long)]
    dump_config: Option<String>,
}

fn load_config(path: Option<&str>) -> anyhow::Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let s = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    SimConfig::from_json(&s).with_context(|| format!("parsing {path}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).unwrap_or_else(|e| {
        log::error!("{e:#}, using default config");
        SimConfig::default()
    });
    let points = match (&args.points_file, args.random) {
        (Some(path), _) => testbed::load_points(path)?,
        (None, Some(n)) => testbed::random_points(n, args.seed),
        (None, None) => testbed::points(),
    };

    let mut sim = Simulation::new(config);
    if let Some(path) = &args.dump_config {
        let s = sim.config().to_json_pretty()?;
        std::fs::write(path, s).with_context(|| format!("writing {path}"))?;
    }
    if let Some(path) = &args.save_track {
        testbed::save_points(path, &points)?;
    }
    sim.extend_track(points);
    log::info!(
        "track: {} raw points, {:.1} long",
        sim.track().raw_points().len(),
        sim.refresh_path().total_length()
    );

    let released = Rc::new(Cell::new(0usize));
    let counter = released.clone();
    sim.set_detach_hook(move |_| counter.set(counter.get() + 1));

    let steps = (args.seconds / args.dt).ceil().max(0.0) as usize;
    let mut g_history: Vec<Vec<Fpt>> = vec![vec![]; sim.carts().len()];
    let start = Instant::now();
    for step in 0..steps {
        for body in sim.tick(args.dt) {
            log::info!(
                "t = {:.2}s: cart {} flew off at ({:.0}, {:.0}) with {:.2}g",
                step as Fpt * args.dt,
                body.cart_index,
                body.position.x,
                body.position.y,
                body.g_at_release
            );
        }
        for (history, cart) in g_history.iter_mut().zip(sim.carts()) {
            history.push(cart.smoothed_g());
        }
    }
    let elapsed = start.elapsed().as_secs_f64();

    for cart in sim.carts() {
        log::debug!("{}", cart.description());
    }
    println!(
        "{} ticks in {:.3}s ({:.0}/s)",
        steps,
        elapsed,
        steps as f64 / elapsed.max(1e-9)
    );
    println!(
        "{} of {} carts detached, record {:.2}g",
        released.get(),
        sim.carts().len(),
        sim.highest_g_overall()
    );

    if args.plot {
        let (left, right) = sim.rails();
        let plots = [
            plot::plot_track(
                "track",
                sim.track().raw_points(),
                sim.path().points(),
                &[left.as_slice(), right.as_slice()],
            ),
            plot::plot_series("smoothed_g", &g_history),
        ];
        for res in plots {
            match res {
                Ok(path) => log::info!("saved {path}"),
                Err(e) => log::error!("plot failed: {e}"),
            }
        }
    }
    Ok(())
}
