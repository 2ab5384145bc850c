use serde::{Deserialize, Serialize};

/// What a handshake transfers: custody out (loan) or custody back (return).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionAction {
    Loan,
    Return,
}

impl TransactionAction {
    /// Wire string used by the mediator contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionAction::Loan => "LOAN",
            TransactionAction::Return => "RETURN",
        }
    }
}

impl std::fmt::Display for TransactionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
