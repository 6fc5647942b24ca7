pub mod rapier;
