//! Интеграционные тесты для доменной модели (crate::domain).

use wheel_engine::domain::*;

/// Cash: saturating-арифметика, в минус не уходим.
#[test]
fn cash_saturating_arithmetic() {
    let a = Cash(100);
    let b = Cash(250);

    assert_eq!(a + b, Cash(350));
    assert_eq!(a - b, Cash::ZERO);
    assert!(Cash::ZERO.is_zero());

    let mut c = Cash(10);
    c += Cash(5);
    assert_eq!(c, Cash(15));
    c -= Cash(100);
    assert_eq!(c, Cash::ZERO);

    // Переполнение тоже saturating.
    assert_eq!(Cash(u64::MAX) + Cash(1), Cash(u64::MAX));
}

/// Стандартный каталог: 12 записей, ровно один Whammy с весом 91.
#[test]
fn standard_catalog_contents() {
    let catalog = PrizeCatalog::standard();

    assert_eq!(catalog.entries().len(), 12);

    let whammies: Vec<_> = catalog
        .entries()
        .iter()
        .filter(|p| p.is_whammy())
        .collect();
    assert_eq!(whammies.len(), 1);
    assert_eq!(whammies[0].weight, 91);
    assert_eq!(whammies[0].value, Cash::ZERO);
    assert!(!whammies[0].spin_bonus);

    // Все веса положительные.
    assert!(catalog.entries().iter().all(|p| p.weight > 0));

    // Спин-призы дают дополнительный спин, денежные — нет.
    for p in catalog.entries() {
        match p.kind {
            PrizeKind::Spin => assert!(p.spin_bonus, "{} must grant a spin", p.label),
            PrizeKind::Money | PrizeKind::Whammy => assert!(!p.spin_bonus),
            PrizeKind::Bonus => assert!(!p.spin_bonus),
        }
    }
}

/// Таблица накопленных весов: суммарный не-Whammy вес и границы
/// розыгрышей при бинарном поиске.
#[test]
fn catalog_cumulative_weight_sampling() {
    let catalog = PrizeCatalog::standard();

    // 8+7+5+3+1 (money) + 5+4+2 (spin) + 1+1+2 (bonus) = 39
    assert_eq!(catalog.non_whammy_weight(), 39);

    // Первая запись ($500, вес 8) покрывает розыгрыши 0..=7.
    assert_eq!(catalog.non_whammy_by_draw(0).label, "$500");
    assert_eq!(catalog.non_whammy_by_draw(7).label, "$500");
    assert_eq!(catalog.non_whammy_by_draw(8).label, "$1,000");

    // $5,000 (кумулятивно 20..=22), $10,000 — розыгрыш 23.
    assert_eq!(catalog.non_whammy_by_draw(20).label, "$5,000");
    assert_eq!(catalog.non_whammy_by_draw(22).label, "$5,000");
    assert_eq!(catalog.non_whammy_by_draw(23).label, "$10,000");

    // Последний розыгрыш — последняя не-Whammy запись.
    assert_eq!(catalog.non_whammy_by_draw(38).label, "BIG PRIZE");

    // Whammy через розыгрыши недостижим.
    for draw in 0..39 {
        assert!(!catalog.non_whammy_by_draw(draw).is_whammy());
    }
}

/// Доска: длина, доступ к ячейкам, подсчёт Whammy.
#[test]
fn board_helpers() {
    let catalog = PrizeCatalog::standard();
    let mut cells = vec![catalog.whammy().clone(); 5];
    cells.extend(vec![catalog.non_whammy_by_draw(0).clone(); 13]);

    let board = Board::from_cells(cells);
    assert_eq!(board.len(), BOARD_SIZE);
    assert!(!board.is_empty());
    assert_eq!(board.whammy_count(), 5);
    assert!(board.prize_at(0).is_whammy());
    assert_eq!(board.prize_at(17).label, "$500");
}

/// Новый игрок: 5 спинов, пустой банк, активен.
#[test]
fn player_new_defaults() {
    let p = Player::new("PLAYER 1");

    assert_eq!(p.name, "PLAYER 1");
    assert_eq!(p.bank, Cash::ZERO);
    assert_eq!(p.spins_remaining, STARTING_SPINS);
    assert_eq!(p.whammy_count, 0);
    assert_eq!(p.rounds_used, 0);
    assert!(!p.is_eliminated());
    assert!(p.has_spins());
}

/// Сессия: активный/соперник, признак конца спинов.
#[test]
fn session_active_and_other() {
    let catalog = PrizeCatalog::standard();
    let board = Board::from_cells(vec![catalog.non_whammy_by_draw(0).clone(); BOARD_SIZE]);
    let mut session = GameSession::new(["A", "B"], board);

    assert_eq!(session.active().name, "A");
    assert_eq!(session.other().name, "B");
    assert_eq!(session.other_index(), 1);

    session.active_player = 1;
    assert_eq!(session.active().name, "B");
    assert_eq!(session.other_index(), 0);

    assert!(!session.both_out_of_spins());
    session.players[0].spins_remaining = 0;
    session.players[1].spins_remaining = 0;
    assert!(session.both_out_of_spins());
}
