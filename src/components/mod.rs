pub mod ability;
pub mod attack;
pub mod character;
pub mod health;
pub mod id;
pub mod items;
pub mod level;
pub mod patch;
pub mod proficiency;
pub mod skill;
pub mod spells;
