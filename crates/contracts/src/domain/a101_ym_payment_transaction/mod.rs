pub mod aggregate;

pub use aggregate::{YmPaymentTransaction, YmTransactionKind};
