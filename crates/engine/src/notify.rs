//! Notifications pushed from the engine to the presentation layer

use blockfall_types::{ColorId, Point};

/// One observable change in the game
///
/// The engine queues these in emission order; hosts drain them after every
/// call and forward them to whatever draws the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Board contents or the active piece changed
    Draw,
    /// These rows were full and are being removed (ascending)
    LinesWiped(Vec<usize>),
    /// The session ended; the board has been cleared
    GameOver,
    /// A new piece is waiting; cells are relative to the preview origin
    PreviewChanged { cells: Vec<Point>, color: ColorId },
    /// Emitted once per score award
    ScoreChanged {
        score: u32,
        level: u32,
        leveled_up: bool,
    },
}

impl Notification {
    /// Short tag used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Notification::Draw => "draw",
            Notification::LinesWiped(_) => "lines_wiped",
            Notification::GameOver => "game_over",
            Notification::PreviewChanged { .. } => "preview_changed",
            Notification::ScoreChanged { .. } => "score_changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_distinct() {
        let all = [
            Notification::Draw,
            Notification::LinesWiped(vec![19]),
            Notification::GameOver,
            Notification::PreviewChanged {
                cells: Vec::new(),
                color: 0,
            },
            Notification::ScoreChanged {
                score: 0,
                level: 1,
                leveled_up: false,
            },
        ];
        let mut names: Vec<_> = all.iter().map(Notification::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all.len());
        assert_eq!(Notification::LinesWiped(vec![3, 7]).name(), "lines_wiped");
    }
}
