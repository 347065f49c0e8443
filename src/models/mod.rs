pub mod cart;
pub mod loyalty;
pub mod menu;
pub mod mood;
pub mod order;
pub mod origin;
pub mod recommendation;
pub mod room;
pub mod table;
