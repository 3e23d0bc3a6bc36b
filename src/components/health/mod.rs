pub mod hit_points;
pub mod life_state;
