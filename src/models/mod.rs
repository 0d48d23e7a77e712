pub mod display_facts;
pub mod game_record;
