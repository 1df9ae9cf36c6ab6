use std::time::{Duration, Instant};

use crate::game::{TITLE, Variant};

pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub foods_eaten: u32,
    pub steps: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            foods_eaten: 0,
            steps: 0,
        }
    }

    pub fn on_step(&mut self, ate_food: bool) {
        self.steps += 1;
        if ate_food {
            self.foods_eaten += 1;
        }
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// The block printed to stdout when the game ends
pub fn format_summary(score: u32, variant: Variant) -> String {
    let mut out = String::from("\n========== GAME OVER ==========\n");
    if variant.shows_banner() {
        out.push_str("Game Over Loser 🤪\n");
    }
    out.push_str(&format!("🐍 Final Score: {score}\n"));
    out.push_str(&format!("🏁 Thanks for playing {TITLE}!\n"));
    out.push_str("================================\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_step_counting() {
        let mut metrics = GameMetrics::new();
        metrics.on_step(false);
        metrics.on_step(true);
        metrics.on_step(false);

        assert_eq!(metrics.steps, 3);
        assert_eq!(metrics.foods_eaten, 1);
    }

    #[test]
    fn test_summary_classic() {
        let summary = format_summary(7, Variant::Classic);
        assert_eq!(
            summary,
            "\n========== GAME OVER ==========\n\
             Game Over Loser 🤪\n\
             🐍 Final Score: 7\n\
             🏁 Thanks for playing UFAZ the Snake!\n\
             ================================\n"
        );
    }

    #[test]
    fn test_summary_large_has_no_taunt() {
        let summary = format_summary(0, Variant::Large);
        assert!(!summary.contains("Loser"));
        assert!(summary.contains("🐍 Final Score: 0\n"));
    }
}
