pub mod macros;
pub mod structs;

pub use structs::ClassifiedRequests;
pub use structs::Command;
pub use structs::Direction;
pub use structs::ElevatorState;
pub use structs::Origin;
pub use structs::Request;
pub use structs::Route;
