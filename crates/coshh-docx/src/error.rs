use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("xml error in {context}: {message}")]
    Xml { context: String, message: String },
    #[error("package part not found: {0}")]
    MissingPart(String),
    #[error("package part {0} is not valid UTF-8")]
    PartEncoding(String),
    #[error("document has no body element")]
    MissingBody,
    #[error("table {table} not found ({count} tables in document)")]
    TableOutOfRange { table: usize, count: usize },
    #[error("row {row} not found in table {table} ({count} rows)")]
    RowOutOfRange { table: usize, row: usize, count: usize },
    #[error("cell {cell} not found in row {row} of table {table} ({count} cells)")]
    CellOutOfRange {
        table: usize,
        row: usize,
        cell: usize,
        count: usize,
    },
}

impl DocxError {
    /// Wrap any XML-layer failure with the part or operation it occurred in.
    pub fn xml(context: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::Xml {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocxError>;
