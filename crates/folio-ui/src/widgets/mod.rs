pub mod button;
pub mod container;
pub mod flex;
pub mod follower;
pub mod hover_card;
pub mod link;
pub mod mosaic;
pub mod noise;
pub mod responsive;
pub mod scroll;
pub mod text;
