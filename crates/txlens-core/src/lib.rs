pub mod cursor;
mod decode;
pub mod error;
pub mod report;
pub mod types;

pub use cursor::ByteCursor;
pub use error::DecodeError;
pub use report::TxReport;
pub use types::{Transaction, TxInput, TxOutput, Witness};

#[cfg(test)]
mod test_util;
