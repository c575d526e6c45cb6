mod echo;
mod mock;

pub use echo::EchoProvider;
pub use mock::MockProvider;
