#[must_use]
pub fn format_reaction_secs(value: f64) -> String {
    format!("{value:.3}")
}

#[must_use]
pub fn format_score(value: f64) -> String {
    format!("{value:.1}")
}
