pub mod error;
pub mod form;

pub use error::{AssembleError, Result};
pub use form::{
    DATA_TABLE, TEMPLATE_ROW, append_row, build_coshh_form, overwrite_first_row, stamp_form_date,
    stamp_form_date_as,
};
