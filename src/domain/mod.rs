pub mod name_table;
pub mod prediction;
pub mod ranking;

pub use name_table::{NameTable, VideoInfo};
pub use prediction::{LabelScore, PredictionResult};
pub use ranking::{RankedEntry, TopKSelection, rank};

/// Integer key of a class/video in the vocabulary table.
pub type ClassId = i64;
