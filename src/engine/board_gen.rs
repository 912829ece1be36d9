//! Генератор доски.
//!
//! Вызывается при старте игры и после каждого приземления на Whammy.
//! Чистая функция от каталога и RNG — никаких побочных эффектов,
//! кроме возвращённой доски.

use crate::domain::board::{Board, BOARD_SIZE, MAX_WHAMMIES, MIN_WHAMMIES};
use crate::domain::catalog::PrizeCatalog;
use crate::engine::RandomSource;

/// Сгенерировать новую доску:
/// - число Whammy равномерно из [4, 8];
/// - остальные ячейки — независимые взвешенные розыгрыши (с возвратом)
///   из не-Whammy части каталога;
/// - финальная равномерная перестановка всех 18 ячеек.
pub fn generate_board<R: RandomSource>(catalog: &PrizeCatalog, rng: &mut R) -> Board {
    let whammy_count = rng.range_inclusive(MIN_WHAMMIES, MAX_WHAMMIES) as usize;

    let mut cells = Vec::with_capacity(BOARD_SIZE);
    for _ in 0..whammy_count {
        cells.push(catalog.whammy().clone());
    }

    let total = catalog.non_whammy_weight();
    for _ in 0..(BOARD_SIZE - whammy_count) {
        let draw = rng.range_inclusive(0, total - 1);
        cells.push(catalog.non_whammy_by_draw(draw).clone());
    }

    rng.shuffle(&mut cells);
    Board::from_cells(cells)
}
