use crate::error::AppError;
use std::future::Future;
use std::pin::Pin;

/// Store of pre-encoded example records, grouped in named files.
pub trait RecordSource: Send + Sync {
    /// Names of the record files available, in a stable order.
    fn list_records(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, AppError>> + Send + '_>>;

    /// Serialized examples contained in one record file.
    fn read_examples(
        &self,
        record: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Vec<u8>>, AppError>> + Send + '_>>;
}
