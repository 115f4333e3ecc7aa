//! Classical Chess Engine
//!
//! Alpha-beta search with material and piece-square evaluation.
//! This is the built-in opponent for the rules core.

mod config;
mod eval;
mod search;

use chess_core::{Engine, Position, SearchResult};
use tracing::debug;

pub use config::{ConfigError, EngineConfig, MAX_DEPTH};
pub use eval::{MATE_SCORE, evaluate, evaluate_state, piece_value, static_score};
pub use search::{INFINITY, best_move, pick_best_move};

/// Classical chess engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Negamax search with alpha-beta pruning
/// - Material plus piece-square evaluation
/// - Capture-only quiescence search at the leaves
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    config: EngineConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search at the configured depth.
    pub fn search_with_config(&mut self, pos: &mut Position) -> SearchResult {
        let depth = self.config.depth;
        self.search(pos, depth)
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &mut Position, depth: u8) -> SearchResult {
        self.nodes = 0;

        let best = search::pick_best_move(pos, depth, self.config.quiescence, &mut self.nodes);

        debug!(
            depth,
            nodes = self.nodes,
            score = ?best.map(|(_, s)| s),
            best = ?best.map(|(mv, _)| mv.to_string()),
            "search finished"
        );

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name {
            "Depth" => match value.trim().parse::<u8>() {
                Ok(d) => {
                    self.config.depth = d.clamp(1, MAX_DEPTH);
                    true
                }
                Err(_) => false,
            },
            "Quiescence" => match value.trim().parse::<bool>() {
                Ok(q) => {
                    self.config.quiescence = q;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_option() {
        let mut engine = ClassicalEngine::new();
        assert!(engine.set_option("Depth", "5"));
        assert_eq!(engine.config().depth, 5);
        assert!(engine.set_option("Depth", "40"));
        assert_eq!(engine.config().depth, MAX_DEPTH);
        assert!(engine.set_option("Depth", "0"));
        assert_eq!(engine.config().depth, 1);
        assert!(!engine.set_option("Depth", "deep"));
        assert!(engine.set_option("Quiescence", "false"));
        assert!(!engine.config().quiescence);
        assert!(!engine.set_option("Hash", "16"));
    }

    #[test]
    fn test_engine_search_reports_stats() {
        let mut engine = ClassicalEngine::new();
        let mut pos = Position::startpos();
        let result = engine.search(&mut pos, 2);
        assert!(result.best_move.is_some());
        assert_eq!(result.depth, 2);
        assert!(result.nodes >= 20);
        assert_eq!(pos, Position::startpos());
        assert_eq!(engine.name(), "Classical v1.0");
        assert_eq!(engine.author(), "ML-chess");
    }

    #[test]
    fn test_search_with_config_uses_configured_depth() {
        let mut engine = ClassicalEngine::with_config(EngineConfig {
            depth: 1,
            quiescence: false,
        });
        let mut pos = Position::startpos();
        let result = engine.search_with_config(&mut pos);
        assert_eq!(result.depth, 1);
        // Depth 1 without quiescence: one node per root move
        assert_eq!(result.nodes, 20);
    }
}
