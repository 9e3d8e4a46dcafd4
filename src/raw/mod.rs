mod lock;

pub use lock::RawLock;
