//! Supporting utilities used by the wall models.

pub mod constraint;
pub mod units;
