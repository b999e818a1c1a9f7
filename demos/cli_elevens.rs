//! CLI Elevens example.
//!
//! Drives the engine the way a graphical front-end would: every command is
//! turned into a pointer click at the matching screen position and fed
//! through `Game::update` along with a simulated clock.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use elevens::{
    COLS, Card, Cue, Game, GameOptions, PILE_COUNT, Phase, Pointer, ROWS, Suit, Vec2,
};

fn main() {
    println!("Elevens CLI example (type 'q' to quit)");
    println!("Pair two top cards whose face values sum to 11.");
    println!("A lone J/Q/K can be swapped for a fresh deck card.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    let mut clock = Clock::default();

    // Past the menu: click the play button and let the deal-in run.
    let button = game.layout().play_button();
    click(
        &mut game,
        Vec2::new(button.x + 1.0, button.y + 1.0),
        &mut clock,
    );
    settle(&mut game, &mut clock);

    loop {
        match game.phase() {
            Phase::Selecting => {}
            Phase::Won => {
                print_table(&game);
                println!("You won! Every pile shows a high card.");
                break;
            }
            Phase::Lost => {
                print_table(&game);
                println!("No moves left. You lost.");
                break;
            }
            _ => {
                settle(&mut game, &mut clock);
                continue;
            }
        }

        print_table(&game);
        if let Some((row, col)) = game.selected() {
            println!("Selected: r{row} c{col}");
        }

        let line = prompt_line("Pile to click, as 'row col': ");
        if line == "q" || line == "quit" {
            println!("Goodbye.");
            break;
        }

        let mut parts = line.split_whitespace();
        let coords = (
            parts.next().and_then(|s| s.parse::<usize>().ok()),
            parts.next().and_then(|s| s.parse::<usize>().ok()),
        );
        let (Some(row), Some(col)) = coords else {
            println!("Expected two numbers, e.g. '0 3'.");
            continue;
        };
        if row >= ROWS || col >= COLS {
            println!("Rows are 0-{} and columns 0-{}.", ROWS - 1, COLS - 1);
            continue;
        }

        let rect = game.layout().pile_rect(row, col);
        let cues = click(
            &mut game,
            Vec2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0),
            &mut clock,
        );
        for cue in cues {
            if matches!(cue, Cue::Slide(_)) {
                println!("(A card slides into place.)");
            }
        }
    }
}

/// A simulated monotonic clock stepped a frame at a time.
#[derive(Default)]
struct Clock {
    now: f32,
}

impl Clock {
    fn tick(&mut self) -> f32 {
        self.now += 1.0 / 60.0;
        self.now
    }
}

fn click(game: &mut Game, pos: Vec2, clock: &mut Clock) -> Vec<Cue> {
    game.update(Pointer { position: pos, pressed: false }, clock.tick());
    game.update(Pointer { position: pos, pressed: true }, clock.tick())
}

/// Steps frames until the game is out of any timed transition.
fn settle(game: &mut Game, clock: &mut Clock) {
    for _ in 0..10_000 {
        match game.phase() {
            Phase::Initializing | Phase::Moving => {
                game.update(Pointer::default(), clock.tick());
            }
            _ => return,
        }
    }
}

fn print_table(game: &Game) {
    println!();
    for row in 0..ROWS {
        let mut line = String::new();
        for col in 0..COLS {
            let label = game
                .grid
                .top(row, col)
                .map_or_else(|| "--".into(), format_card);
            let grown = if game.grid.pile(row, col).len() > 1 { "+" } else { " " };
            line.push_str(&format!("{label}{grown}  "));
        }
        println!("  {line}");
    }
    println!("  ({} piles, deck: {})", PILE_COUNT, game.deck.len());
}

fn format_card(card: Card) -> String {
    let rank = match card.face_value() {
        1 => "A".into(),
        11 => "J".into(),
        12 => "Q".into(),
        13 => "K".into(),
        n => n.to_string(),
    };
    let suit = match card.suit {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
        Suit::Spades => '♠',
    };
    format!("{rank}{suit}")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return "q".into();
    }
    line.trim().to_lowercase()
}
