use serde::{Deserialize, Serialize};

use crate::domain::cash::Cash;

/// Тип приза на ячейке доски.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PrizeKind {
    /// Денежный приз — добавляет `value` к банку.
    Money,
    /// Спин-приз: деньги (возможно 0) плюс дополнительный спин.
    Spin,
    /// Бонусный приз — деньги плюс описательный ярлык (машина, поездка).
    Bonus,
    /// Whammy — обнуляет банк, приближает к выбыванию.
    Whammy,
}

/// Запись каталога призов. Неизменяемая: каталог собирается один раз
/// при старте процесса и дальше только читается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prize {
    pub kind: PrizeKind,
    /// Ярлык для отрисовки ячейки ("$1,000", "WHAMMY!").
    pub label: String,
    /// Денежная часть приза (0 для чистого спина и для Whammy).
    pub value: Cash,
    /// Даёт ли приз один дополнительный спин.
    pub spin_bonus: bool,
    /// Описание неденежной части бонуса ("Trip to Hawaii").
    pub bonus_label: Option<String>,
    /// Относительная частота при взвешенной выборке. Всегда > 0.
    pub weight: u32,
}

impl Prize {
    pub fn is_whammy(&self) -> bool {
        matches!(self.kind, PrizeKind::Whammy)
    }
}
