use thiserror::Error;

use coshh_docx::DocxError;

#[derive(Debug, Error)]
pub enum AssembleError {
    /// Client-input error: the submission held no chemical records.
    #[error("empty submission: no chemical records supplied")]
    EmptySubmission,
    /// Structural template defect or package failure; aborts the request.
    #[error(transparent)]
    Docx(#[from] DocxError),
}

pub type Result<T> = std::result::Result<T, AssembleError>;
