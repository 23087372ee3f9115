//! Use plotters to plot to /tmp

use plotters::prelude::*;
use std::time::SystemTime;

use coaster_sim::my_float::{Fpt, Point2};

type PlotResult = Result<String, Box<dyn std::error::Error>>;

const COLORS: [RGBColor; 4] = [RED, BLUE, GREEN, MAGENTA];

fn save_path(name: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("/tmp/{name}_{millis}.png")
}

/// One line per series over the tick index
pub fn plot_series(name: &str, series: &[Vec<Fpt>]) -> PlotResult {
    let save_path = save_path(name);
    let len = series.iter().map(Vec::len).max().unwrap_or(0).max(1);
    let max_y = series.iter().flatten().fold(1.0, |acc: Fpt, x| acc.max(*x));
    {
        let root = BitMapBackend::new(&save_path, (1024, 768)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(name, ("sans-serif", 30))
            .margin(5)
            .x_label_area_size(30)
            .y_label_area_size(30)
            .build_cartesian_2d(0.0..len as Fpt, 0.0..max_y * 1.1)?;
        chart.configure_mesh().draw()?;
        for (i, s) in series.iter().enumerate() {
            let color = COLORS[i % COLORS.len()];
            chart
                .draw_series(LineSeries::new(
                    s.iter().enumerate().map(|(x, y)| (x as Fpt, *y)),
                    &color,
                ))?
                .label(format!("cart {i}"))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        root.present()?;
    }
    Ok(save_path)
}

/// Raw points, smoothed path and rails, flipped so up is up
pub fn plot_track(name: &str, raw: &[Point2], path: &[Point2], rails: &[&[Point2]]) -> PlotResult {
    let save_path = save_path(name);
    let flip = |p: &Point2| (p.x, -p.y);
    let all = raw.iter().chain(path).chain(rails.iter().flat_map(|r| r.iter()));
    let (min_x, max_x, min_y, max_y) = all.fold(
        (Fpt::MAX, Fpt::MIN, Fpt::MAX, Fpt::MIN),
        |(a, b, c, d), p| (a.min(p.x), b.max(p.x), c.min(-p.y), d.max(-p.y)),
    );
    if min_x > max_x {
        return Err("nothing to plot".into());
    }
    {
        let root = BitMapBackend::new(&save_path, (1024, 768)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(name, ("sans-serif", 30))
            .margin(5)
            .x_label_area_size(30)
            .y_label_area_size(30)
            .build_cartesian_2d(min_x - 10.0..max_x + 10.0, min_y - 10.0..max_y + 10.0)?;
        chart.configure_mesh().draw()?;
        chart.draw_series(LineSeries::new(path.iter().map(flip), &RED))?;
        for rail in rails {
            chart.draw_series(LineSeries::new(rail.iter().map(flip), &BLUE))?;
        }
        chart.draw_series(PointSeries::<_, _, Circle<_, _>, _>::new(
            raw.iter().map(flip),
            4,
            &GREEN,
        ))?;
        root.present()?;
    }
    Ok(save_path)
}
