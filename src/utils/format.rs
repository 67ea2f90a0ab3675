// Renders a real number the way the lab reports expect: whole values keep a trailing `.0`
// (`250000.0`), everything else uses the shortest round-trip form (`15000.5`).
pub fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
