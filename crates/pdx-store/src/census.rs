/// Row counts per table of a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub pokemon: usize,
    pub types: usize,
    pub abilities: usize,
    pub stats: usize,
}

impl Census {
    /// Logs the counts as a small table.
    pub fn log(&self) {
        log::info!("┌────────────┬───────────────┐");
        log::info!("│ Table      │ Rows          │");
        log::info!("├────────────┼───────────────┤");
        log::info!("│ Pokemon    │ {:>13} │", self.pokemon);
        log::info!("│ Types      │ {:>13} │", self.types);
        log::info!("│ Abilities  │ {:>13} │", self.abilities);
        log::info!("│ Stats      │ {:>13} │", self.stats);
        log::info!("└────────────┴───────────────┘");
    }
}
