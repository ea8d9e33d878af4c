pub mod local_records;
pub mod ml_engine;
pub mod tfrecord;

pub use local_records::LocalRecordStore;
pub use ml_engine::{MlEngineClient, MlEngineConfig};
