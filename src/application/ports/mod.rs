mod object_storage;

pub use object_storage::{ObjectStorage, StorageError};

#[cfg(test)]
pub use object_storage::MockObjectStorage;
