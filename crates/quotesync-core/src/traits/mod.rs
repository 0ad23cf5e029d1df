mod persisted_store;
mod remote_endpoint;

pub use persisted_store::IPersistedStore;
pub use remote_endpoint::IRemoteEndpoint;
