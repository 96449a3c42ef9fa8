pub mod geometry;
pub mod collision;
pub mod body;
pub mod nested;
