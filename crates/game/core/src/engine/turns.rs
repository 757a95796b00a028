use crate::events::TurnEvent;
use crate::session::{GameOutcome, TurnPhase};

use super::TurnEngine;

/// Turn rotation for TurnEngine.
impl<'a> TurnEngine<'a> {
    /// Hand the turn to the next living player in seat order.
    ///
    /// The search wraps around and considers the current player last, so a
    /// sole survivor keeps acting. If nobody is alive the game ends in
    /// defeat. The new current player's spell cooldown ticks as their turn
    /// begins.
    pub(super) fn advance(&mut self, events: &mut Vec<TurnEvent>) {
        let count = self.session.players.len();
        let current = self.session.current;

        let next = (1..=count)
            .map(|step| (current + step) % count)
            .find(|&index| self.session.players[index].is_alive());

        match next {
            Some(index) => {
                self.session.current = index;
                self.session.players[index].begin_turn();
                self.session.phase = TurnPhase::AwaitingRoll;
                tracing::debug!(
                    player = %self.session.players[index].name,
                    index,
                    "turn passes"
                );
            }
            None => {
                self.session.phase = TurnPhase::GameOver(GameOutcome::AllFallen);
                events.push(TurnEvent::AllFallen);
                tracing::info!("all players have fallen");
            }
        }
    }
}
