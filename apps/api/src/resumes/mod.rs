//! Resume upload, listing and field extraction.

pub mod extraction;
pub mod handlers;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_pdf;
