//! Game integration tests.

#![expect(
    clippy::float_cmp,
    reason = "layout and timer values are exact in these tests"
)]

use std::collections::HashSet;

use elevens::{
    AnimationTimer, Card, Cue, DECK_SIZE, DealError, Deck, Game, GameOptions, PILE_COUNT, Phase,
    PileGrid, Pointer, Suit, Track, Vec2, is_lost, is_won,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

const fn idle() -> Pointer {
    Pointer::new(0.0, 0.0, false)
}

/// Presses and releases the primary button at `pos`, returning the cues
/// from the press edge.
fn click(game: &mut Game, pos: Vec2, now: f32) -> Vec<Cue> {
    game.update(Pointer { position: pos, pressed: false }, now);
    game.update(Pointer { position: pos, pressed: true }, now)
}

fn play_button_center(game: &Game) -> Vec2 {
    let rect = game.layout().play_button();
    Vec2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

fn pile_center(game: &Game, row: usize, col: usize) -> Vec2 {
    let rect = game.layout().pile_rect(row, col);
    Vec2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

/// Clicks the play button and steps time until the deal-in completes.
fn start_game(game: &mut Game, now: &mut f32) {
    click(game, play_button_center(game), *now);
    assert_eq!(game.phase(), Phase::Initializing);

    let mut ticks = 0;
    while game.phase() == Phase::Initializing {
        *now += 0.05;
        game.update(idle(), *now);
        ticks += 1;
        assert!(ticks < 10_000, "deal-in never completed");
    }
    assert_eq!(game.phase(), Phase::Selecting);
}

/// Replaces the live grid and deck with a known layout. `tops` seeds the
/// piles in row-major order; `draws` is the deck in draw order.
fn rig(game: &mut Game, tops: &[Card; PILE_COUNT], draws: &[Card]) {
    let mut seed = Deck::from_draw_order(tops);
    game.grid = PileGrid::deal(&mut seed).unwrap();
    game.deck = Deck::from_draw_order(draws);
}

fn cards_in_play(game: &Game) -> HashSet<(Suit, u8)> {
    let mut seen = HashSet::new();
    for c in game.deck.cards() {
        seen.insert((c.suit, c.rank));
    }
    for (_, pile) in game.grid.iter() {
        for c in pile.cards() {
            seen.insert((c.suit, c.rank));
        }
    }
    seen
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_screen(1024.0, 768.0)
        .with_card_size(60.0, 84.0)
        .with_card_margin(8.0)
        .with_deal_speed(24.0)
        .with_move_speed(4.0)
        .with_fade_speed(6.0);

    assert_eq!(options.screen_width, 1024.0);
    assert_eq!(options.screen_height, 768.0);
    assert_eq!(options.card_width, 60.0);
    assert_eq!(options.card_height, 84.0);
    assert_eq!(options.card_margin, 8.0);
    assert_eq!(options.deal_speed, 24.0);
    assert_eq!(options.move_speed, 4.0);
    assert_eq!(options.fade_speed, 6.0);
}

#[test]
fn layout_matches_default_metrics() {
    let game = Game::new(GameOptions::default(), 1);
    let layout = game.layout();

    // 6 * 72 + 5 * 5 = 457 wide, centered with a half-card offset.
    assert_eq!(layout.pile_destination(0, 0), Vec2::new(207.5, 135.0));
    assert_eq!(layout.pile_destination(1, 0), Vec2::new(207.5, 240.0));
    assert_eq!(layout.pile_destination(0, 5), Vec2::new(592.5, 135.0));
    assert_eq!(layout.deck_anchor(), Vec2::new(36.0, 190.0));
    assert_eq!(layout.deal_origin(), Vec2::new(400.0, 480.0));

    let button = layout.play_button();
    assert!(button.contains(Vec2::new(300.0, 400.0)));
    assert!(!button.contains(Vec2::new(100.0, 100.0)));
}

#[test]
fn fresh_deal_is_twelve_singletons_from_a_full_deck() {
    let game = Game::new(GameOptions::default(), 42);

    assert_eq!(game.deck.len(), DECK_SIZE - PILE_COUNT);
    assert_eq!(game.grid.card_count(), PILE_COUNT);
    for (_, pile) in game.grid.iter() {
        assert_eq!(pile.len(), 1);
    }
    assert_eq!(cards_in_play(&game).len(), DECK_SIZE);
}

#[test]
fn deal_fails_on_short_deck() {
    let mut deck = Deck::from_draw_order(&[card(Suit::Hearts, 0); 5]);
    assert_eq!(PileGrid::deal(&mut deck).unwrap_err(), DealError::NotEnoughCards);
}

#[test]
#[should_panic(expected = "empty deck")]
fn drawing_from_an_empty_deck_panics() {
    let mut deck = Deck::from_draw_order(&[]);
    let _ = deck.draw();
}

#[test]
fn menu_click_starts_a_new_game() {
    let mut game = Game::new(GameOptions::default(), 7);
    assert_eq!(game.music(), Some(Track::MenuTheme));

    // A click outside the button does nothing.
    let cues = click(&mut game, Vec2::new(10.0, 10.0), 0.0);
    assert!(cues.is_empty());
    assert_eq!(game.phase(), Phase::Menu);

    let pos = play_button_center(&game);
    let cues = click(&mut game, pos, 0.0);
    assert_eq!(cues, vec![Cue::Button, Cue::Shuffle]);
    assert_eq!(game.phase(), Phase::Initializing);
    assert_eq!(game.music(), Some(Track::GameTheme));
}

#[test]
fn holding_the_button_does_not_refire() {
    let mut game = Game::new(GameOptions::default(), 7);
    let pos = play_button_center(&game);

    click(&mut game, pos, 0.0);
    assert_eq!(game.phase(), Phase::Initializing);

    // Still held down over the button: no new click edge.
    let mut now = 0.0;
    while game.phase() == Phase::Initializing {
        now += 0.05;
        game.update(Pointer { position: pos, pressed: true }, now);
    }
    assert_eq!(game.phase(), Phase::Selecting);
}

#[test]
fn deal_in_settles_piles_one_at_a_time() {
    let mut game = Game::new(GameOptions::default(), 3);
    let mut now = 0.0;
    let pos = play_button_center(&game);
    click(&mut game, pos, now);

    // Mid-deal the scene shows a prefix of settled piles plus one in
    // flight; the settled count only grows.
    let mut last_settled = 0;
    let mut ticks = 0;
    while game.phase() == Phase::Initializing {
        let scene = game.scene();
        assert!(scene.cards.len() >= last_settled);
        assert!(scene.cards.len() < PILE_COUNT || scene.in_flight.is_none());
        last_settled = scene.cards.len();

        now += 0.02;
        game.update(idle(), now);
        ticks += 1;
        assert!(ticks < 10_000);
    }

    assert_eq!(game.phase(), Phase::Selecting);
    assert_eq!(game.scene().cards.len(), PILE_COUNT);
}

#[test]
fn pairing_sum_eleven_draws_onto_both_piles() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    // Face values: 2 and 9 pair; the rest are aces.
    let mut tops = [card(Suit::Clubs, 0); PILE_COUNT];
    tops[0] = card(Suit::Hearts, 1);
    tops[1] = card(Suit::Spades, 8);
    let draws = [card(Suit::Diamonds, 4), card(Suit::Diamonds, 6)];
    rig(&mut game, &tops, &draws);

    let pos = pile_center(&game, 0, 0);
    click(&mut game, pos, now);
    assert_eq!(game.selected(), Some((0, 0)));

    let pos = pile_center(&game, 0, 1);
    let cues = click(&mut game, pos, now);
    assert!(cues.is_empty());
    assert_eq!(game.phase(), Phase::Moving);
    assert_eq!(game.selected(), None);

    // The anchor pile draws first, the clicked pile second.
    assert_eq!(game.grid.pile(0, 0).len(), 2);
    assert_eq!(game.grid.pile(0, 1).len(), 2);
    assert_eq!(game.grid.top(0, 0), Some(card(Suit::Diamonds, 4)));
    assert_eq!(game.grid.top(0, 1), Some(card(Suit::Diamonds, 6)));
    assert_eq!(game.deck.len(), 0);
}

#[test]
fn mismatched_pair_clears_the_selection() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    // 1 + 9 = 10: rejected. The 5 and 6 keep the game alive.
    let mut tops = [card(Suit::Clubs, 2); PILE_COUNT];
    tops[0] = card(Suit::Hearts, 0);
    tops[1] = card(Suit::Spades, 8);
    tops[2] = card(Suit::Hearts, 4);
    tops[3] = card(Suit::Hearts, 5);
    rig(&mut game, &tops, &[]);

    let pos = pile_center(&game, 0, 0);
    click(&mut game, pos, now);
    assert_eq!(game.selected(), Some((0, 0)));

    let pos = pile_center(&game, 0, 1);
    click(&mut game, pos, now);
    assert_eq!(game.phase(), Phase::Selecting);
    assert_eq!(game.selected(), None);
    assert_eq!(game.grid.pile(0, 0).len(), 1);
    assert_eq!(game.grid.pile(0, 1).len(), 1);
}

#[test]
fn clicking_the_selected_pile_deselects() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    let mut tops = [card(Suit::Clubs, 2); PILE_COUNT];
    tops[0] = card(Suit::Hearts, 4);
    tops[1] = card(Suit::Hearts, 5);
    rig(&mut game, &tops, &[]);

    let total = game.grid.card_count();
    let pos = pile_center(&game, 0, 0);
    click(&mut game, pos, now);
    assert_eq!(game.selected(), Some((0, 0)));

    let pos = pile_center(&game, 0, 0);
    click(&mut game, pos, now);
    assert_eq!(game.selected(), None);
    assert_eq!(game.phase(), Phase::Selecting);
    assert_eq!(game.grid.card_count(), total);
}

#[test]
fn swappable_singleton_swaps_with_the_deck() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    let jack = card(Suit::Hearts, 10);
    let mut tops = [card(Suit::Clubs, 2); PILE_COUNT];
    tops[0] = jack;
    tops[2] = card(Suit::Hearts, 4);
    tops[3] = card(Suit::Hearts, 5);
    let fresh = card(Suit::Diamonds, 3);
    rig(&mut game, &tops, &[fresh]);

    let pos = pile_center(&game, 0, 0);
    let cues = click(&mut game, pos, now);
    assert!(matches!(cues.as_slice(), [Cue::Slide(_)]));
    assert_eq!(game.selected(), None);
    assert_eq!(game.grid.pile(0, 0).len(), 1);
    assert_eq!(game.grid.top(0, 0), Some(fresh));

    // The jack went to the bottom of the deck.
    assert_eq!(game.deck.cards().first(), Some(&jack));
}

#[test]
fn swappable_card_on_a_grown_pile_is_inert() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    let mut tops = [card(Suit::Clubs, 2); PILE_COUNT];
    tops[2] = card(Suit::Hearts, 4);
    tops[3] = card(Suit::Hearts, 5);
    rig(&mut game, &tops, &[]);
    // Bury a card so the queen tops a two-card pile.
    game.grid.pile_mut(0, 0).push(card(Suit::Hearts, 11));

    let pos = pile_center(&game, 0, 0);
    let cues = click(&mut game, pos, now);
    assert!(cues.is_empty());
    assert_eq!(game.selected(), None);
    assert_eq!(game.phase(), Phase::Selecting);
    assert_eq!(game.grid.pile(0, 0).len(), 2);
}

#[test]
fn low_singleton_anchors_a_pair_instead_of_swapping() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    // A face-9 singleton is below the swap threshold: it selects.
    let mut tops = [card(Suit::Clubs, 2); PILE_COUNT];
    tops[0] = card(Suit::Spades, 8);
    tops[2] = card(Suit::Hearts, 4);
    tops[3] = card(Suit::Hearts, 5);
    rig(&mut game, &tops, &[]);

    let before = game.deck.len();
    let pos = pile_center(&game, 0, 0);
    let cues = click(&mut game, pos, now);
    assert!(cues.is_empty());
    assert_eq!(game.selected(), Some((0, 0)));
    assert_eq!(game.deck.len(), before);
}

#[test]
fn moving_slides_the_two_cards_in_sequence() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    let two = card(Suit::Hearts, 1);
    let nine = card(Suit::Spades, 8);
    let mut tops = [card(Suit::Clubs, 0); PILE_COUNT];
    tops[0] = two;
    tops[1] = nine;
    let draws = [card(Suit::Diamonds, 4), card(Suit::Diamonds, 6)];
    rig(&mut game, &tops, &draws);

    let pos = pile_center(&game, 0, 0);
    click(&mut game, pos, now);
    let pos = pile_center(&game, 0, 1);
    click(&mut game, pos, now);
    assert_eq!(game.phase(), Phase::Moving);

    // While the first card is in flight both destination piles still show
    // the cards that were paired.
    now += 0.01;
    game.update(idle(), now);
    let scene = game.scene();
    let shown: Vec<Card> = scene.cards.iter().map(|sprite| sprite.card).collect();
    assert!(shown.contains(&two));
    assert!(shown.contains(&nine));
    let in_flight = scene.in_flight.unwrap();
    assert_eq!(in_flight.card, card(Suit::Diamonds, 6));

    // Each landing plays a slide; afterwards the game returns to
    // selecting with both new tops settled.
    let mut slides = 0;
    let mut ticks = 0;
    while game.phase() == Phase::Moving {
        now += 0.05;
        let cues = game.update(idle(), now);
        slides += cues
            .iter()
            .filter(|cue| matches!(cue, Cue::Slide(_)))
            .count();
        ticks += 1;
        assert!(ticks < 10_000, "moving phase never completed");
    }

    assert_eq!(slides, 2);
    assert_eq!(game.phase(), Phase::Selecting);
}

#[test]
fn all_high_tops_win() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    let mut tops = [card(Suit::Hearts, 0); PILE_COUNT];
    let mut i = 0;
    for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs] {
        for rank in 9..13 {
            tops[i] = card(suit, rank);
            i += 1;
        }
    }
    rig(&mut game, &tops, &[]);
    assert!(is_won(&game.grid));

    now += 0.05;
    game.update(idle(), now);
    assert_eq!(game.phase(), Phase::Won);
    assert_eq!(game.music(), None);

    // The stinger fires on the first end-screen tick, and the overlay
    // fades in from zero.
    now += 0.05;
    let cues = game.update(idle(), now);
    assert_eq!(cues, vec![Cue::Won]);
    let overlay = game.scene().overlay.unwrap();
    assert!(overlay.won);

    now += 1.0;
    game.update(idle(), now);
    assert_eq!(game.scene().overlay.unwrap().alpha, 1.0);
}

#[test]
fn no_pairs_and_no_escape_loses() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    // All aces: nothing sums to eleven, nothing is swappable.
    let tops = [card(Suit::Hearts, 0); PILE_COUNT];
    rig(&mut game, &tops, &[]);
    assert!(is_lost(&game.grid));

    now += 0.05;
    game.update(idle(), now);
    assert_eq!(game.phase(), Phase::Lost);

    now += 0.05;
    let cues = game.update(idle(), now);
    assert_eq!(cues, vec![Cue::Lost]);
    assert!(!game.scene().overlay.unwrap().won);
}

#[test]
fn swappable_singleton_is_an_escape_from_loss() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    let mut tops = [card(Suit::Hearts, 0); PILE_COUNT];
    tops[7] = card(Suit::Spades, 12);
    rig(&mut game, &tops, &[card(Suit::Diamonds, 5)]);
    assert!(!is_lost(&game.grid));

    now += 0.05;
    game.update(idle(), now);
    assert_eq!(game.phase(), Phase::Selecting);
}

#[test]
fn grown_pile_face_card_does_not_escape_loss() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    let mut tops = [card(Suit::Hearts, 0); PILE_COUNT];
    rig(&mut game, &tops, &[]);
    game.grid.pile_mut(1, 3).push(card(Suit::Spades, 12));
    assert!(is_lost(&game.grid));
}

#[test]
fn replay_from_the_end_screen_deals_fresh() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    rig(&mut game, &[card(Suit::Hearts, 0); PILE_COUNT], &[]);
    now += 0.05;
    game.update(idle(), now);
    assert_eq!(game.phase(), Phase::Lost);

    let pos = play_button_center(&game);
    let cues = click(&mut game, pos, now);
    assert_eq!(cues, vec![Cue::Button, Cue::Shuffle]);
    assert_eq!(game.phase(), Phase::Initializing);
    assert_eq!(game.deck.len(), DECK_SIZE - PILE_COUNT);
    assert_eq!(game.grid.card_count(), PILE_COUNT);
    assert_eq!(cards_in_play(&game).len(), DECK_SIZE);
}

#[test]
fn hover_follows_the_pointer() {
    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    let mut tops = [card(Suit::Clubs, 2); PILE_COUNT];
    tops[0] = card(Suit::Hearts, 4);
    tops[1] = card(Suit::Hearts, 5);
    rig(&mut game, &tops, &[]);

    game.update(Pointer { position: pile_center(&game, 1, 4), pressed: false }, now);
    assert_eq!(game.hovered(), Some((1, 4)));

    game.update(idle(), now);
    assert_eq!(game.hovered(), None);
}

#[test]
fn scene_tints_selected_and_hovered_piles() {
    use elevens::Tint;

    let mut game = Game::new(GameOptions::default(), 9);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    let mut tops = [card(Suit::Clubs, 2); PILE_COUNT];
    tops[0] = card(Suit::Hearts, 4);
    tops[1] = card(Suit::Hearts, 5);
    rig(&mut game, &tops, &[]);

    let pos = pile_center(&game, 0, 0);
    click(&mut game, pos, now);
    game.update(Pointer { position: pile_center(&game, 0, 1), pressed: true }, now);

    let scene = game.scene();
    let tint_at = |pos: Vec2| {
        scene
            .cards
            .iter()
            .find(|sprite| sprite.position == pos)
            .unwrap()
            .tint
    };
    assert_eq!(tint_at(game.layout().pile_destination(0, 0)), Tint::Selected);
    assert_eq!(tint_at(game.layout().pile_destination(0, 1)), Tint::Hovered);
    assert_eq!(tint_at(game.layout().pile_destination(1, 5)), Tint::Normal);
}

#[test]
fn deck_label_tracks_the_count() {
    let game = Game::new(GameOptions::default(), 9);
    assert_eq!(game.deck_label(), "Deck: 40");
}

#[test]
fn timer_completes_within_reciprocal_speed() {
    let mut timer = AnimationTimer::new();
    assert!(!timer.is_started());

    assert_eq!(timer.advance(5.0, 12.0), 0.0);
    assert!(timer.is_started());
    assert!(!timer.is_complete());

    let completion = timer.advance(5.0 + 1.0 / 12.0 + 0.001, 12.0);
    assert!(completion > 1.0);
    assert!(timer.is_complete());
    assert_eq!(timer.progress(), 1.0);

    timer.reset();
    assert!(!timer.is_started());
    assert_eq!(timer.progress(), 0.0);
}

#[test]
fn conservation_holds_through_a_full_session() {
    let mut game = Game::new(GameOptions::default(), 42);
    let mut now = 0.0;
    start_game(&mut game, &mut now);

    let find_pair = |game: &Game| -> Option<((usize, usize), (usize, usize))> {
        let tops: Vec<((usize, usize), Card)> = game
            .grid
            .iter()
            .filter_map(|(coords, pile)| pile.top().map(|c| (coords, c)))
            .collect();
        for (i, &(a, ca)) in tops.iter().enumerate() {
            for &(b, cb) in &tops[i + 1..] {
                if ca.face_value() + cb.face_value() == 11 {
                    return Some((a, b));
                }
            }
        }
        None
    };

    let find_swap = |game: &Game| -> Option<(usize, usize)> {
        game.grid.iter().find_map(|(coords, pile)| {
            pile.top()
                .filter(|c| c.is_swappable() && pile.is_single())
                .map(|_| coords)
        })
    };

    let mut moves = 0;
    while game.phase() == Phase::Selecting && moves < 40 {
        assert_eq!(game.deck.len() + game.grid.card_count(), DECK_SIZE);
        assert_eq!(cards_in_play(&game).len(), DECK_SIZE);

        if let Some((a, b)) = find_pair(&game) {
            let pos_a = pile_center(&game, a.0, a.1);
            click(&mut game, pos_a, now);
            let pos_b = pile_center(&game, b.0, b.1);
            click(&mut game, pos_b, now);
            let mut ticks = 0;
            while game.phase() == Phase::Moving {
                now += 0.1;
                game.update(idle(), now);
                assert_eq!(game.deck.len() + game.grid.card_count(), DECK_SIZE);
                ticks += 1;
                assert!(ticks < 10_000);
            }
        } else if let Some(s) = find_swap(&game) {
            let pos = pile_center(&game, s.0, s.1);
            click(&mut game, pos, now);
        }

        now += 0.05;
        game.update(idle(), now);
        moves += 1;
    }

    // Whatever the outcome, every card is still accounted for.
    assert_eq!(game.deck.len() + game.grid.card_count(), DECK_SIZE);
    assert_eq!(cards_in_play(&game).len(), DECK_SIZE);
}
