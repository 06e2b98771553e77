pub mod limits;
pub mod meeting;
pub mod optimize;
pub mod participant;
pub mod slot;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use limits::Limits;
pub use meeting::{OptimalSlot, OptimizeRequest, OptimizeResponse};
pub use optimize::{optimize, optimize_with_limits, ValidationError};
pub use participant::Participant;
