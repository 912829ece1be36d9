use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Денежная сумма. Обёртка над u64, чтобы не путать с обычными числами.
/// Банк игрока никогда не уходит в минус — вся арифметика saturating.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cash(pub u64);

impl Cash {
    pub const ZERO: Cash = Cash(0);

    pub fn new(amount: u64) -> Self {
        Cash(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Cash {
    type Output = Cash;

    fn add(self, rhs: Cash) -> Self::Output {
        Cash(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Cash {
    fn add_assign(&mut self, rhs: Cash) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Cash {
    type Output = Cash;

    fn sub(self, rhs: Cash) -> Self::Output {
        Cash(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Cash {
    fn sub_assign(&mut self, rhs: Cash) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}
