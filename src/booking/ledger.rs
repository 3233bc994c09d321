use tracing::info;

/// Loyalty points balance for the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardsLedger {
    balance: u64,
}

impl RewardsLedger {
    pub fn new(starting_balance: u64) -> Self {
        Self {
            balance: starting_balance,
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Add `points` and return the new balance
    pub fn credit(&mut self, points: u64) -> u64 {
        self.balance = self.balance.saturating_add(points);
        info!("Credited {} points, balance now {}", points, self.balance);
        self.balance
    }
}
