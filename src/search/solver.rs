use tracing::{debug, info};

use crate::game::{Board, Move};

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop after visiting this many nodes. `None` searches the whole tree.
    pub max_nodes: Option<u64>,
    /// Emit a progress event every `log_interval` nodes.
    pub log_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_nodes: None,
            log_interval: 1_000_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Moves leading from the starting board to the target layout.
    Solved(Vec<Move>),
    /// Every reachable position was visited without reaching the target.
    Exhausted,
    /// The node budget ran out first.
    NodeLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Positions visited, the starting one included.
    pub nodes: u64,
}

impl SearchReport {
    pub fn solution(&self) -> Option<&[Move]> {
        match &self.outcome {
            SearchOutcome::Solved(moves) => Some(moves.as_slice()),
            _ => None,
        }
    }
}

enum Step {
    Found,
    DeadEnd,
    OutOfBudget,
}

/// Plain depth-first solver.
///
/// Tries candidates in [`Board::candidate_moves`] order, so the first
/// solution found is deterministic. No move ordering, no memoization.
pub struct Solver {
    config: SearchConfig,
    nodes: u64,
    path: Vec<Move>,
}

impl Solver {
    pub fn new(config: SearchConfig) -> Self {
        Solver {
            config,
            nodes: 0,
            path: Vec::new(),
        }
    }

    /// Search for a sequence of jumps from `board` to the target layout.
    ///
    /// Every move applied during the search is undone before returning, so
    /// `board` is left exactly as it was passed in whatever the outcome.
    pub fn solve(&mut self, board: &mut Board) -> SearchReport {
        self.nodes = 0;
        self.path.clear();

        debug!(
            pegs = board.peg_count(),
            max_nodes = ?self.config.max_nodes,
            "starting search"
        );

        let outcome = match self.search(board) {
            Step::Found => SearchOutcome::Solved(std::mem::take(&mut self.path)),
            Step::DeadEnd => SearchOutcome::Exhausted,
            Step::OutOfBudget => SearchOutcome::NodeLimit,
        };

        match &outcome {
            SearchOutcome::Solved(moves) => {
                info!(nodes = self.nodes, moves = moves.len(), "solution found")
            }
            SearchOutcome::Exhausted => info!(nodes = self.nodes, "search space exhausted"),
            SearchOutcome::NodeLimit => info!(nodes = self.nodes, "node limit reached"),
        }

        SearchReport {
            outcome,
            nodes: self.nodes,
        }
    }

    fn search(&mut self, board: &mut Board) -> Step {
        if self.config.max_nodes.is_some_and(|max| self.nodes >= max) {
            return Step::OutOfBudget;
        }
        self.nodes += 1;

        if self.config.log_interval > 0 && self.nodes % self.config.log_interval == 0 {
            debug!(
                nodes = self.nodes,
                depth = self.path.len(),
                pegs = board.peg_count(),
                "search progress"
            );
        }

        if board.is_solved() {
            return Step::Found;
        }

        for mv in board.candidate_moves() {
            if !board.is_legal(&mv) {
                continue;
            }

            board.apply(&mv);
            self.path.push(mv);
            let step = self.search(board);
            board.undo(&mv);

            match step {
                // The path is kept: it is the answer.
                Step::Found => return Step::Found,
                Step::OutOfBudget => return Step::OutOfBudget,
                Step::DeadEnd => {
                    self.path.pop();
                }
            }
        }

        Step::DeadEnd
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
