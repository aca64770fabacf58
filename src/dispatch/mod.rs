pub mod classifier;
pub mod direction;
pub mod dispatcher;
pub mod dispatcher_tests;
pub mod scheduler;

pub use classifier::DispatchError;
pub use dispatcher::Dispatcher;
