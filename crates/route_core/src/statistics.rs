use std::{
    fmt::Display,
    time::{Duration, Instant},
};

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} vertices settled in {:?}",
            self.nodes_settled,
            self.duration.unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_resets_counters() {
        let mut stats = SearchStats::default();
        stats.nodes_settled = 7;
        stats.finish();
        assert!(stats.duration.is_none());

        stats.init();
        assert_eq!(stats.nodes_settled, 0);
        assert!(stats.duration.is_none());

        stats.finish();
        assert!(stats.duration.is_some());
    }
}
