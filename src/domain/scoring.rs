//! End-of-round score settlement.

use super::state::Player;

/// Penalty for a hand left unplayed at round end.
///
/// Ten or more remaining cards double the count; a completely untouched
/// 13-card hand is additionally tripled (13 × 2 × 3 = 78). The tripling
/// checks the raw count, so it composes with the doubling.
pub fn penalty_for(hand_size: u8) -> i32 {
    let mut penalty = i32::from(hand_size);
    if hand_size >= 10 {
        penalty *= 2;
    }
    if hand_size == 13 {
        penalty *= 3;
    }
    penalty
}

/// Points awarded to the round winner.
pub const WINNER_BONUS: i32 = 20;

/// Apply end-of-round settlement: every loser is docked the penalty for
/// their remaining hand, the winner gains the flat bonus.
pub fn settle_scores(players: &mut [Player], winner: usize) {
    for player in players.iter_mut() {
        player.score -= penalty_for(player.hand_size);
    }
    if let Some(player) = players.get_mut(winner) {
        player.score += WINNER_BONUS;
    }
}
