pub mod body;
pub mod contacts;
pub mod rapier_physics;

pub use body::RapierProjectile;
pub use contacts::contact_from_collision;
pub use rapier_physics::PhysicsSetupPlugin;
