//! State Layer
//!
//! Reducer, middleware and the container composing them.

mod reducer;
mod middleware;
mod store;

pub use reducer::reduce;
pub use middleware::{Effect, Middleware, PassThrough, PersistenceMiddleware};
pub use store::{persistent_store, Store, SubscriptionId, MAX_DISPATCH_DEPTH};
