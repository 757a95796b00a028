//! Text rendering of session state.

use std::fmt::Write as _;

use mystic_core::{GameSession, Player, TileCategory};

/// One-character glyph per tile for the board strip.
pub fn tile_glyph(category: TileCategory) -> char {
    match category {
        TileCategory::Start => 'S',
        TileCategory::Final => 'F',
        TileCategory::Danger => '!',
        TileCategory::Healing => '+',
        TileCategory::Mystery => '?',
        TileCategory::Comedy => '~',
        TileCategory::GoBack => '<',
    }
}

pub fn render_player(player: &Player) -> String {
    let mut line = format!(
        "{} the {} | tile {} | HP {}/{}",
        player.name, player.class, player.position, player.hp, player.max_hp
    );
    if player.shield > 0 {
        let _ = write!(line, " | shield {}", player.shield);
    }
    if player.spell_cooldown == 0 {
        let _ = write!(line, " | {} ready", player.class.spell_name());
    } else {
        let _ = write!(
            line,
            " | {} in {} turns",
            player.class.spell_name(),
            player.spell_cooldown
        );
    }
    if player.immunity_turns > 0 {
        let _ = write!(line, " | immune x{}", player.immunity_turns);
    }
    if player.spell_active {
        line.push_str(" | charging");
    }
    let _ = write!(line, " | {} left: {}", player.class.passive_name(), player.passive_count);
    if !player.is_alive() {
        line.push_str(" | fallen");
    }
    line
}

/// Roster overview, the current player marked with `>`.
pub fn render_status(session: &GameSession) -> String {
    let current = session.current_player_index();
    session
        .players()
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let marker = if index == current && !session.is_over() { '>' } else { ' ' };
            format!("{marker} {}", render_player(player))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tile strip with a legend and each living player's position.
pub fn render_board(session: &GameSession) -> String {
    let board = session.board();
    let strip: String = board.tiles().iter().copied().map(tile_glyph).collect();

    let mut out = format!("[{strip}]\n");
    for (_, player) in session.alive_players() {
        let category = board.category(player.position).unwrap_or(TileCategory::Start);
        let _ = writeln!(
            out,
            " {:>width$}^ {} ({})",
            "",
            player.name,
            category.title(),
            width = player.position
        );
    }
    out.push_str("S start  F final  ! danger  + healing  ? mystery  ~ comedy  < cursed");
    out
}
