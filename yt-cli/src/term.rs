//! Plain-text score table and dice line for the interactive game.

use std::fmt::Write as _;

use yt_core::{Category, Display, GameSession, ScorePreview, NUM_DICE};

/// Prints counters and totals as they change; keeps the latest previews for the
/// score table.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    pub previews: ScorePreview,
    pub quiet: bool,
}

impl Display for TerminalDisplay {
    fn show_previews(&mut self, previews: &ScorePreview) {
        self.previews = *previews;
    }

    fn show_counters(&mut self, _turn: u8, _round: u8) {}

    fn show_total(&mut self, total: u32) {
        if !self.quiet {
            println!("Total: {}", total);
        }
    }

    fn game_over(&mut self, final_score: u32) {
        if !self.quiet {
            println!("Game over! Final score: {}", final_score);
        }
    }
}

/// `1:[5]* 2:[3] 3:[ ] ...`; `*` marks held dice, blanks are unrolled.
pub fn dice_line(session: &GameSession) -> String {
    let mut s = String::new();
    for (i, d) in session.dice.iter().enumerate() {
        let face = d
            .face_value()
            .map_or_else(|| " ".to_string(), |v| v.to_string());
        let _ = write!(s, "{}:[{}]{}", i + 1, face, if d.is_held() { "*" } else { "" });
        if i + 1 < NUM_DICE {
            s.push(' ');
        }
    }
    s
}

/// Score table: committed rows show their frozen score, open rows the preview in
/// parentheses.
pub fn board_table(session: &GameSession, previews: &ScorePreview) -> String {
    let board = &session.board;
    let mut s = String::new();
    for cat in Category::ALL {
        let cell = match board.score(cat) {
            Some(v) => format!("{:>4}", v),
            None => format!("({:>2})", previews.get(cat)),
        };
        let _ = writeln!(s, "  {:<14}{}", cat.name(), cell);
        if cat == Category::Sixes {
            let _ = writeln!(s, "  {:<14}{:>4}", "bonus", board.bonus());
        }
    }
    let _ = writeln!(s, "  {:<14}{:>4}", "total", board.total_score());
    let round = session.round;
    let _ = write!(
        s,
        "  turn {}/{}  rolls left {}",
        (round.turn() + 1).min(round.max_turns()),
        round.max_turns(),
        round.rolls_left()
    );
    s
}
