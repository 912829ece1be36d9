use serde::{Deserialize, Serialize};

use crate::domain::cash::Cash;
use crate::domain::prize::{Prize, PrizeKind};

/// Каталог призов с таблицей накопленных весов для выборки.
///
/// Вместо размноженного по весам массива (как в наивной реализации)
/// храним кумулятивные веса не-Whammy записей и выбираем бинарным
/// поиском: O(log n) на розыгрыш и никакой лишней памяти.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PrizeCatalog {
    entries: Vec<Prize>,
    /// Индекс записи Whammy в `entries`.
    whammy_index: usize,
    /// Индексы не-Whammy записей, параллельно `cumulative`.
    non_whammy: Vec<usize>,
    /// cumulative[i] = сумма весов non_whammy[0..=i].
    cumulative: Vec<u32>,
}

impl PrizeCatalog {
    /// Стандартный каталог игры: пять денежных призов, три спин-приза,
    /// три бонуса и Whammy с весом 91 (≈70% размноженного пула).
    pub fn standard() -> Self {
        let mut entries = Vec::new();

        let money = |label: &str, value: u64, weight: u32| Prize {
            kind: PrizeKind::Money,
            label: label.to_string(),
            value: Cash(value),
            spin_bonus: false,
            bonus_label: None,
            weight,
        };
        entries.push(money("$500", 500, 8));
        entries.push(money("$1,000", 1_000, 7));
        entries.push(money("$2,500", 2_500, 5));
        entries.push(money("$5,000", 5_000, 3));
        entries.push(money("$10,000", 10_000, 1));

        let spin = |label: &str, value: u64, weight: u32| Prize {
            kind: PrizeKind::Spin,
            label: label.to_string(),
            value: Cash(value),
            spin_bonus: true,
            bonus_label: Some("+1 Spin".to_string()),
            weight,
        };
        entries.push(spin("+1 SPIN", 0, 5));
        entries.push(spin("$500 + SPIN", 500, 4));
        entries.push(spin("$1,000 + SPIN", 1_000, 2));

        let bonus = |label: &str, value: u64, extra: &str, weight: u32| Prize {
            kind: PrizeKind::Bonus,
            label: label.to_string(),
            value: Cash(value),
            spin_bonus: false,
            bonus_label: Some(extra.to_string()),
            weight,
        };
        entries.push(bonus("VACATION!", 3_000, "Trip to Hawaii", 1));
        entries.push(bonus("CAR!", 8_000, "New Car!", 1));
        entries.push(bonus("BIG PRIZE", 2_000, "Mystery Gift", 2));

        entries.push(Prize {
            kind: PrizeKind::Whammy,
            label: "WHAMMY!".to_string(),
            value: Cash::ZERO,
            spin_bonus: false,
            bonus_label: None,
            weight: 91,
        });

        Self::from_entries(entries)
    }

    /// Собрать каталог из произвольного набора записей.
    /// Требования: ровно одна запись Whammy, все веса > 0.
    pub fn from_entries(entries: Vec<Prize>) -> Self {
        debug_assert_eq!(
            entries.iter().filter(|p| p.is_whammy()).count(),
            1,
            "catalog must contain exactly one whammy entry"
        );
        debug_assert!(entries.iter().all(|p| p.weight > 0));

        let whammy_index = entries
            .iter()
            .position(|p| p.is_whammy())
            .unwrap_or_default();

        let mut non_whammy = Vec::new();
        let mut cumulative = Vec::new();
        let mut total = 0u32;
        for (idx, prize) in entries.iter().enumerate() {
            if prize.is_whammy() {
                continue;
            }
            total += prize.weight;
            non_whammy.push(idx);
            cumulative.push(total);
        }

        Self {
            entries,
            whammy_index,
            non_whammy,
            cumulative,
        }
    }

    pub fn entries(&self) -> &[Prize] {
        &self.entries
    }

    /// Запись Whammy.
    pub fn whammy(&self) -> &Prize {
        &self.entries[self.whammy_index]
    }

    /// Суммарный вес не-Whammy записей.
    pub fn non_whammy_weight(&self) -> u32 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Приз, соответствующий розыгрышу `draw` из [0, non_whammy_weight).
    /// Бинарный поиск по таблице накопленных весов.
    pub fn non_whammy_by_draw(&self, draw: u32) -> &Prize {
        let pos = self.cumulative.partition_point(|&c| c <= draw);
        let pos = pos.min(self.non_whammy.len() - 1);
        &self.entries[self.non_whammy[pos]]
    }

    /// Принадлежит ли приз каталогу.
    pub fn contains(&self, prize: &Prize) -> bool {
        self.entries.iter().any(|p| p == prize)
    }
}
