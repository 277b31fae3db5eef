pub mod cleanup;
pub mod movement;
pub mod player_fire;
