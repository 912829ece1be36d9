use serde::{Deserialize, Serialize};

use crate::domain::prize::Prize;
use crate::domain::CellIndex;

/// Количество ячеек на доске.
pub const BOARD_SIZE: usize = 18;

/// Минимум и максимум Whammy-ячеек на сгенерированной доске.
pub const MIN_WHAMMIES: u32 = 4;
pub const MAX_WHAMMIES: u32 = 8;

/// Доска: упорядоченные 18 ячеек, каждая привязана к призу каталога
/// (призы могут повторяться). В домене это просто данные — генерацию
/// и случайность делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub cells: Vec<Prize>,
}

impl Board {
    /// Собрать доску из готового набора ячеек (генератор, тесты).
    pub fn from_cells(cells: Vec<Prize>) -> Self {
        debug_assert_eq!(cells.len(), BOARD_SIZE);
        Board { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Приз в ячейке с данным индексом.
    pub fn prize_at(&self, index: CellIndex) -> &Prize {
        &self.cells[index as usize]
    }

    /// Сколько на доске Whammy-ячеек.
    pub fn whammy_count(&self) -> usize {
        self.cells.iter().filter(|p| p.is_whammy()).count()
    }
}
