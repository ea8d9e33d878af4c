use crate::domain::ClassId;
use crate::error::AppError;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

const INDEX_COLUMN: &str = "Index";
const NAME_COLUMN: &str = "Name";
const WIKI_URL_COLUMN: &str = "WikiUrl";
const CATEGORY_COLUMN: &str = "Vertical1";

/// One row of the vocabulary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInfo {
    pub name: String,
    pub wiki_url: String,
    pub category: String,
}

/// Read-only mapping from class id to its vocabulary entry.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    entries: HashMap<ClassId, VideoInfo>,
}

/// Header positions of the columns we read. Column order in the file is free.
struct ColumnIndexes {
    index: usize,
    name: usize,
    wiki_url: usize,
    category: usize,
}

impl ColumnIndexes {
    fn locate(headers: &csv::StringRecord) -> Result<Self, AppError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| AppError::Format(format!("missing column {column}")))
        };
        Ok(Self {
            index: find(INDEX_COLUMN)?,
            name: find(NAME_COLUMN)?,
            wiki_url: find(WIKI_URL_COLUMN)?,
            category: find(CATEGORY_COLUMN)?,
        })
    }
}

impl NameTable {
    /// Load the table from a CSV file.
    ///
    /// # Errors
    /// `NotFound` if the file is missing, `Format` if a required column is
    /// absent or an `Index` value is not an integer.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| AppError::from_io(path.display().to_string(), e))?;
        let table = Self::from_reader(file)?;
        debug!(path = %path.display(), entries = table.len(), "loaded name table");
        Ok(table)
    }

    /// Parse CSV content with a header row. Duplicate ids keep the last row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| AppError::Format(format!("unreadable header: {e}")))?
            .clone();
        let columns = ColumnIndexes::locate(&headers)?;

        let mut entries = HashMap::new();
        for (row, record) in rdr.records().enumerate() {
            // Header is line 1.
            let line = row + 2;
            let record =
                record.map_err(|e| AppError::Format(format!("line {line}: {e}")))?;
            let field = |idx: usize, column: &str| {
                record
                    .get(idx)
                    .ok_or_else(|| AppError::Format(format!("line {line}: missing {column}")))
            };

            let raw_id = field(columns.index, INDEX_COLUMN)?;
            let id: ClassId = raw_id.trim().parse().map_err(|_| {
                AppError::Format(format!("line {line}: invalid {INDEX_COLUMN} {raw_id:?}"))
            })?;

            let info = VideoInfo {
                name: field(columns.name, NAME_COLUMN)?.to_string(),
                wiki_url: field(columns.wiki_url, WIKI_URL_COLUMN)?.to_string(),
                category: field(columns.category, CATEGORY_COLUMN)?.to_string(),
            };
            if entries.insert(id, info).is_some() {
                warn!(id, line, "duplicate vocabulary index, keeping the later row");
            }
        }

        Ok(Self { entries })
    }

    /// Display name for `id`.
    ///
    /// # Errors
    /// `Lookup` if the id is not in the table.
    pub fn resolve(&self, id: ClassId) -> Result<&str, AppError> {
        self.get(id)
            .map(|info| info.name.as_str())
            .ok_or(AppError::Lookup(id))
    }

    pub fn get(&self, id: ClassId) -> Option<&VideoInfo> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ClassId, VideoInfo)> for NameTable {
    fn from_iter<I: IntoIterator<Item = (ClassId, VideoInfo)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
