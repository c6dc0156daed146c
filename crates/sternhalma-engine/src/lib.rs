//! Evaluation, search, opening book, and agents.

pub mod agent;
pub mod book;
pub mod eval;
pub mod search;

pub use agent::{Agent, BookAgent, SearchAgent};
pub use book::{BookKey, OpeningBook};
pub use eval::weights::Weights;
pub use eval::{EVAL_LIMIT, evaluate};
pub use search::negamax::{DRAW_SCORE, INF, MAX_PLY, WIN_SCORE, WIN_THRESHOLD};
pub use search::{SearchResult, Searcher, is_win_score, win_distance};
