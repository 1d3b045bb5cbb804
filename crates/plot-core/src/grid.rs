// File: crates/plot-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Format a tick value with a precision derived from the tick step.
pub fn format_tick(value: f64, step: f64) -> String {
    let step = step.abs();
    if step >= 1.0 || step == 0.0 {
        format!("{:.0}", value)
    } else {
        let decimals = (-step.log10()).ceil().max(1.0).min(6.0) as usize;
        format!("{:.*}", decimals, value)
    }
}
