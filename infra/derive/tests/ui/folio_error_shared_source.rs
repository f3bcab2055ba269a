use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum StoreError {
    #[error("Write failed{}: {source}", format_context(.context))]
    Write { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Read failed{}: {source}", format_context(.context))]
    Read { source: std::io::Error, context: Option<Cow<'static, str>> },
}

// Both variants wrap `std::io::Error`, so no `From` exists and this impl does not conflict.
impl From<std::io::Error> for StoreError {
    fn from(source: std::io::Error) -> Self {
        Self::Read { source, context: None }
    }
}

fn main() {
    let err = StoreError::Write { source: std::io::Error::other("full"), context: None };
    let err = Err::<(), _>(err).context("Saving").unwrap_err();
    assert_eq!(err.to_string(), "Write failed (Saving): full");
}
