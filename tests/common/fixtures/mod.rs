mod airport;
mod traffic;

pub use airport::*;
pub use traffic::*;
