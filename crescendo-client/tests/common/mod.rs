/// Shared helpers for the client integration tests

use std::sync::Arc;

use crescendo_client::storage::MemoryStorage;

/// Initializes tracing once for the whole test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("crescendo_client=debug")
        .with_test_writer()
        .try_init();
}

/// Fresh in-memory storage adapter
pub fn memory_storage() -> Arc<MemoryStorage> {
    init_tracing();
    Arc::new(MemoryStorage::new())
}
