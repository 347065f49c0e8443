pub mod cart_service;
pub mod loyalty_service;
pub mod recommendation_service;
pub mod simulation;

pub use cart_service::*;
pub use loyalty_service::*;
pub use recommendation_service::*;
pub use simulation::*;
