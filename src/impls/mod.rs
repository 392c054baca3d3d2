//! [`Field`](crate::Field) implementations for plain values and sequences.

mod list;
mod plain;
