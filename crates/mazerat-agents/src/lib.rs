//! # Mazerat Agents
//!
//! The turning policies a rat can be given.
//!
//! - **Dumb**: never turns
//! - **TurnLeft / TurnAround**: react only to a wall straight ahead
//! - **WallFollower**: right-hand rule
//! - **RandomRat**: rare side turns, coin flips at walls
//! - **SmellingV1 / SmellingV2**: steer by squared distance to the destination
//!
//! [`PolicyKind`](registry::PolicyKind) is the static registry used to list,
//! parse and build them.

pub mod random;
pub mod registry;
pub mod simple;
pub mod smelling;
pub mod prelude;
