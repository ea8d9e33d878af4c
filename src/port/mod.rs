pub mod predictor;
pub mod record_source;

pub use predictor::Predictor;
pub use record_source::RecordSource;
