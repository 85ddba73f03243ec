pub mod errors;
pub mod macros;
pub mod structs;

pub use errors::ConfigError;
pub use errors::FloorIssue;
pub use errors::RideError;
pub use errors::ValidationError;
pub use structs::CarStatus;
pub use structs::Direction;
pub use structs::RideRequest;
