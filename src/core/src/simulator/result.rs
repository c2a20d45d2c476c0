use crate::r#match::MatchResult;
use crate::shared::Money;
use crate::simulator::{ActionError, SimulationDate};
use std::fmt::{Display, Formatter};

/// Outcome of a user-triggered operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        ActionResult {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ActionResult {
            success: false,
            message: message.into(),
        }
    }
}

impl From<ActionError> for ActionResult {
    fn from(err: ActionError) -> Self {
        ActionResult::failure(err.to_string())
    }
}

impl From<Result<ActionResult, ActionError>> for ActionResult {
    fn from(result: Result<ActionResult, ActionError>) -> Self {
        result.unwrap_or_else(ActionResult::from)
    }
}

/// Summary of one month tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationResult {
    pub success: bool,
    pub message: String,
    /// The month the world moved to; `None` when the tick was rejected.
    pub advanced_to: Option<SimulationDate>,
    pub match_results: Vec<MatchResult>,
    pub news_published: usize,
    pub income: Money,
    pub expenses: Money,
}

impl SimulationResult {
    pub fn new() -> Self {
        SimulationResult::default()
    }

    pub fn failed(message: impl Into<String>) -> Self {
        SimulationResult {
            success: false,
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn matches_played(&self) -> usize {
        self.match_results.len()
    }

    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

impl Display for SimulationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (matches: {}, news: {}, income: {}, expenses: {})",
            self.message,
            self.matches_played(),
            self.news_published,
            self.income,
            self.expenses
        )
    }
}
