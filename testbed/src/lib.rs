//! Sample tracks shared by the headless runner and the benchmarks

use anyhow::Context;
use coaster_sim::my_float::{Fpt, Point2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A drawn track in screen pixels, y down
pub fn points() -> Vec<Point2> {
    let points = [
        [40, 120],
        [120, 160],
        [200, 420],
        [280, 520],
        [360, 470],
        [420, 300],
        [470, 240],
        [530, 260],
        [580, 380],
        [640, 560],
        [720, 600],
        [800, 540],
        [850, 420],
        [880, 330],
        [940, 300],
        [1010, 360],
        [1060, 480],
        [1120, 520],
        [1200, 470],
        [1240, 380],
    ];
    points
        .iter()
        .map(|p| Point2::new(p[0] as Fpt, p[1] as Fpt))
        .collect()
}

/// A wobbly left-to-right track, handy for shaking out edge cases
pub fn random_points(n: usize, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut x: Fpt = 40.0;
    let mut y: Fpt = 300.0;
    (0..n)
        .map(|_| {
            let p = Point2::new(x, y);
            x += rng.gen_range(30.0..90.0);
            y = (y + rng.gen_range(-120.0..120.0)).clamp(50.0, 700.0);
            p
        })
        .collect()
}

/// On-disk form of a track, `{ "positions": [[x, y], ...] }`
#[derive(Serialize, Deserialize)]
pub struct TrackFile {
    pub positions: Vec<[Fpt; 2]>,
}

pub fn load_points(path: &str) -> anyhow::Result<Vec<Point2>> {
    let s = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let data: TrackFile = serde_json::from_str(&s).with_context(|| format!("parsing {path}"))?;
    Ok(data
        .positions
        .iter()
        .map(|p| Point2::new(p[0], p[1]))
        .collect())
}

pub fn save_points(path: &str, points: &[Point2]) -> anyhow::Result<()> {
    let data = TrackFile {
        positions: points.iter().map(|p| [p.x, p.y]).collect(),
    };
    std::fs::write(path, serde_json::to_string_pretty(&data)?)
        .with_context(|| format!("writing {path}"))?;
    Ok(())
}
