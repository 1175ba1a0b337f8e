/// Domain events emitted by the engine during a tick
///
/// These are fire-and-forget notifications for the presentation layer
/// (sound, UI effects, score persistence). The engine never calls back
/// into its consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The snake ate the food; carries the score after the increment
    Eaten { score: u32 },
    /// The round ended on a collision. Emitted exactly once per round.
    GameOver {
        final_score: u32,
        /// True if `final_score` beat the high score known to the engine
        new_high_score: bool,
    },
}
