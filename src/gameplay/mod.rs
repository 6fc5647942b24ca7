pub mod animation;
pub mod collect;
pub mod player;
pub mod restart;
pub mod score;
