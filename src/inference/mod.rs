pub mod provider;
pub mod providers;

pub use provider::{GeneratorError, ResponseGenerator};
pub use providers::{EchoProvider, MockProvider};
