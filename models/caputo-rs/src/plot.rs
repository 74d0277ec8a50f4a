use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

pub fn render(
    path: &Path,
    time: &[f64],
    infected: &[f64],
    susceptible: &[f64],
) -> Result<(), Box<dyn Error>> {
    let t_max = time.last().copied().unwrap_or(0.0).max(1.0);
    let y_max = infected
        .iter()
        .chain(susceptible)
        .fold(1.0_f64, |max, &value| max.max(value));

    let root = BitMapBackend::new(path, (1000, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_max, 0.0..y_max * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("t")
        .y_desc("I(t), S(t)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            time.iter().copied().zip(infected.iter().copied()),
            RED.stroke_width(2),
        ))?
        .label("I(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            time.iter().copied().zip(susceptible.iter().copied()),
            GREEN.stroke_width(2),
        ))?
        .label("S(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
