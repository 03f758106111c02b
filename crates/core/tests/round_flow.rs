use pokerslots_core::{
    evaluate_hand, win_amount, Card, Event, Game, GameConfig, GameError, InputEvent, Phase,
    PhaseKind, Point, DECK_SIZE, HAND_SIZE,
};
use std::collections::HashSet;

const LAND_ALL: f64 = 10_000.0;

fn new_game(seed: u64) -> Game {
    Game::with_seed(GameConfig::default(), seed)
}

fn poor_game(balance: u64) -> Game {
    let config = GameConfig {
        starting_balance: balance,
        ..GameConfig::default()
    };
    Game::with_seed(config, 1)
}

fn dealt_game(seed: u64) -> Game {
    let mut game = new_game(seed);
    game.start_round().expect("start round");
    assert!(!game.advance(LAND_ALL));
    assert_eq!(game.phase_kind(), PhaseKind::Select);
    game
}

fn hand_cards(game: &Game) -> Vec<Card> {
    game.phase()
        .hand()
        .expect("hand on the table")
        .cards()
        .to_vec()
}

fn events(game: &mut Game) -> Vec<Event> {
    game.drain_events().collect()
}

#[test]
fn play_with_insufficient_balance_changes_nothing() {
    let mut game = poor_game(0);
    assert_eq!(
        game.start_round(),
        Err(GameError::InsufficientFunds { balance: 0, bet: 1 })
    );
    assert_eq!(game.phase_kind(), PhaseKind::Initial);
    assert_eq!(game.balance(), 0);
    assert!(game.deck().is_empty());
    assert_eq!(
        events(&mut game),
        vec![Event::InsufficientFunds { balance: 0, bet: 1 }]
    );
}

#[test]
fn queued_play_with_insufficient_balance_surfaces_only_the_notice() {
    let mut game = poor_game(4);
    game.set_bet(5).expect("bet offered");
    game.queue_input(InputEvent::Primary);
    assert!(!game.tick(16.0));
    assert_eq!(game.phase_kind(), PhaseKind::Initial);
    assert_eq!(game.balance(), 4);
    assert!(events(&mut game).contains(&Event::InsufficientFunds { balance: 4, bet: 5 }));
}

#[test]
fn play_debits_bet_and_deals_five_from_a_fresh_deck() {
    let mut game = new_game(5);
    game.start_round().expect("start round");
    assert_eq!(game.balance(), 199);
    assert_eq!(game.phase_kind(), PhaseKind::Animating);
    assert_eq!(game.deck().len(), DECK_SIZE - HAND_SIZE);
    let batch = game.phase().animation().expect("deal animation");
    assert_eq!(batch.len(), HAND_SIZE);
    let slots: Vec<usize> = batch.entries().iter().map(|entry| entry.slot).collect();
    assert_eq!(slots, vec![0, 1, 2, 3, 4]);
    assert!(events(&mut game).contains(&Event::RoundStarted { bet: 1, balance: 199 }));
}

#[test]
fn input_is_ignored_while_cards_are_in_flight() {
    let mut game = new_game(5);
    game.start_round().expect("start round");
    assert_eq!(
        game.toggle_hold(0),
        Err(GameError::InvalidPhase(PhaseKind::Animating))
    );
    assert_eq!(
        game.press_primary(),
        Err(GameError::InvalidPhase(PhaseKind::Animating))
    );
    game.queue_input(InputEvent::ToggleHold(0));
    game.queue_input(InputEvent::Primary);
    assert!(game.tick(1.0));
    assert_eq!(game.phase_kind(), PhaseKind::Animating);
    assert_eq!(game.balance(), 199);
}

#[test]
fn deal_lands_into_select_with_nothing_held() {
    let mut game = new_game(9);
    game.start_round().expect("start round");
    assert!(game.advance(600.0));
    assert_eq!(game.phase_kind(), PhaseKind::Animating);
    assert!(!game.advance(320.0));
    assert_eq!(game.phase_kind(), PhaseKind::Select);
    assert_eq!(game.phase().holds().map(|holds| holds.count()), Some(0));
    assert!(game.phase().animation().is_none());
    assert!(events(&mut game).contains(&Event::AnimationFinished {
        next: PhaseKind::Select
    }));
}

#[test]
fn holding_all_five_scores_without_animation() {
    let mut game = dealt_game(21);
    let before = hand_cards(&game);
    for position in 0..HAND_SIZE {
        assert_eq!(game.toggle_hold(position), Ok(true));
    }
    game.roll().expect("roll");

    assert_eq!(game.phase_kind(), PhaseKind::Result);
    assert!(game.phase().animation().is_none());
    assert!(game.replaced().is_empty());
    assert_eq!(game.deck().len(), DECK_SIZE - HAND_SIZE);
    assert_eq!(hand_cards(&game), before);
}

#[test]
fn roll_replaces_unheld_positions_from_the_back_of_the_deck() {
    let mut game = dealt_game(33);
    let before = hand_cards(&game);
    let from_back: Vec<Card> = game.deck().iter().rev().take(3).copied().collect();
    game.toggle_hold(0).expect("hold");
    game.toggle_hold(2).expect("hold");
    game.roll().expect("roll");

    assert_eq!(game.phase_kind(), PhaseKind::AnimatingRoll);
    let after = hand_cards(&game);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(vec![after[1], after[3], after[4]], from_back);
    assert_eq!(game.replaced(), &[before[1], before[3], before[4]]);

    let batch = game.phase().animation().expect("roll animation");
    let slots: Vec<usize> = batch.entries().iter().map(|entry| entry.slot).collect();
    let durations: Vec<f64> = batch.entries().iter().map(|entry| entry.duration_ms).collect();
    assert_eq!(slots, vec![1, 3, 4]);
    assert_eq!(durations, vec![600.0, 680.0, 760.0]);
    assert!(game.phase().holds().is_none());

    assert!(!game.advance(LAND_ALL));
    assert_eq!(game.phase_kind(), PhaseKind::Result);
}

#[test]
fn roll_result_matches_evaluator_and_paytable() {
    for seed in 0..40 {
        let mut game = dealt_game(seed);
        game.roll().expect("roll");
        game.advance(LAND_ALL);
        let Phase::Result { hand, outcome } = game.phase() else {
            panic!("expected result phase");
        };
        assert_eq!(outcome.hand, evaluate_hand(hand));
        assert_eq!(outcome.win, win_amount(outcome.hand, game.bet()));
    }
}

#[test]
fn cards_are_conserved_across_a_round() {
    for seed in 0..25 {
        let mut game = dealt_game(seed);
        game.toggle_hold((seed % 5) as usize).expect("hold");
        game.roll().expect("roll");
        game.advance(LAND_ALL);

        let mut seen: HashSet<Card> = HashSet::new();
        let all = game
            .deck()
            .iter()
            .chain(game.phase().hand().expect("hand").cards().iter())
            .chain(game.replaced().iter());
        let mut total = 0;
        for card in all {
            assert!(seen.insert(*card), "{card} appears twice");
            total += 1;
        }
        assert_eq!(total, DECK_SIZE);
        assert_eq!(game.replaced().len(), 4);
    }
}

#[test]
fn balance_is_conserved_over_many_rounds() {
    let mut game = new_game(0xBEEF);
    for round in 0..150u32 {
        let bet = game.config().bet_options[(round % 3) as usize];
        game.set_bet(bet).expect("bet");
        let before = game.balance();
        if before < bet {
            break;
        }
        game.start_round().expect("start");
        game.advance(LAND_ALL);
        for position in 0..HAND_SIZE {
            if round & (1 << position) != 0 {
                game.toggle_hold(position).expect("hold");
            }
        }
        game.roll().expect("roll");
        game.advance(LAND_ALL);
        let win = game.phase().outcome().expect("outcome").win;
        game.next_round().expect("next");

        assert_eq!(game.balance(), before - bet + win);
        assert_eq!(game.phase_kind(), PhaseKind::Initial);
        assert!(game.phase().hand().is_none());
    }
}

#[test]
fn next_credits_win_and_clears_table() {
    let mut game = dealt_game(77);
    for position in 0..HAND_SIZE {
        game.toggle_hold(position).expect("hold");
    }
    game.roll().expect("roll");
    let win = game.phase().outcome().expect("outcome").win;
    events(&mut game);

    game.press_primary().expect("next");
    assert_eq!(game.phase_kind(), PhaseKind::Initial);
    assert_eq!(game.balance(), 199 + win);
    assert!(game.phase().outcome().is_none());
    assert_eq!(
        events(&mut game),
        vec![Event::RoundSettled {
            win,
            balance: 199 + win
        }]
    );
}

#[test]
fn bet_changes_only_before_a_round_and_only_to_offered_amounts() {
    let mut game = new_game(2);
    assert_eq!(game.set_bet(3), Err(GameError::InvalidBet(3)));
    game.set_bet(10).expect("offered bet");
    assert_eq!(game.bet(), 10);

    game.start_round().expect("start");
    assert_eq!(game.balance(), 190);
    assert_eq!(
        game.set_bet(5),
        Err(GameError::InvalidPhase(PhaseKind::Animating))
    );
    assert_eq!(game.bet(), 10);
}

#[test]
fn clicks_are_hit_tested_against_table_regions() {
    let mut game = new_game(4);
    let bet_button = game.layout().bet_button().origin();
    let primary = game.layout().primary_button().origin();
    let third_card = game.layout().card_slot(2).origin();

    game.handle(InputEvent::Click(bet_button)).expect("bet button");
    assert_eq!(
        events(&mut game),
        vec![Event::BetSelectorRequested {
            options: vec![1, 5, 10, 25, 50]
        }]
    );

    game.handle(InputEvent::Click(third_card))
        .expect_err("cards are not clickable before the deal");
    game.handle(InputEvent::Click(primary)).expect("play");
    assert_eq!(game.phase_kind(), PhaseKind::Animating);
    game.advance(LAND_ALL);

    game.handle(InputEvent::Click(third_card)).expect("hold");
    assert!(game.phase().holds().expect("holds").is_held(2));
    assert_eq!(
        game.handle(InputEvent::Click(bet_button)),
        Err(GameError::InvalidPhase(PhaseKind::Select))
    );
    game.handle(InputEvent::Click(Point::new(5.0, 5.0)))
        .expect("empty space is a no-op");
}

#[test]
fn tick_applies_input_before_advancing() {
    let mut game = new_game(8);
    game.queue_input(InputEvent::Primary);
    assert!(game.tick(16.0));
    let batch = game.phase().animation().expect("deal animation");
    assert!(batch
        .entries()
        .iter()
        .all(|entry| entry.elapsed_ms == 16.0));
}

#[test]
fn queued_refusals_are_reported_but_phase_mismatches_are_silent() {
    let mut game = new_game(12);
    game.queue_input(InputEvent::ChooseBet(3));
    game.queue_input(InputEvent::ToggleHold(0));
    game.tick(16.0);
    assert_eq!(
        events(&mut game),
        vec![Event::InputRejected {
            input: InputEvent::ChooseBet(3),
            reason: GameError::InvalidBet(3).to_string(),
        }]
    );
    assert_eq!(game.bet(), 1);

    let mut game = dealt_game(12);
    events(&mut game);
    game.queue_input(InputEvent::ToggleHold(7));
    game.queue_input(InputEvent::ChooseBet(5));
    game.tick(16.0);
    assert_eq!(
        events(&mut game),
        vec![Event::InputRejected {
            input: InputEvent::ToggleHold(7),
            reason: GameError::InvalidPosition(7).to_string(),
        }]
    );
}

#[test]
fn same_seed_deals_same_hand() {
    let a = dealt_game(1234);
    let b = dealt_game(1234);
    assert_eq!(hand_cards(&a), hand_cards(&b));
    assert_eq!(a.seed(), 1234);
}
