//! Errors surfaced from the backing time crate

use time::error::{ComponentRange, Format, InvalidFormatDescription};

#[derive(Debug, thiserror::Error)]
pub enum DateTimeError {
    #[error(transparent)]
    ComponentRange(#[from] ComponentRange),
    #[error(transparent)]
    Format(#[from] Format),
    #[error(transparent)]
    InvalidFormat(#[from] InvalidFormatDescription),
}

pub type DateTimeResult<T> = Result<T, DateTimeError>;
