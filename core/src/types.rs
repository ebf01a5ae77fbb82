//! Shared primitive types used across the core.

/// One step of the study roadmap. Valid roadmap days are 1..=45;
/// `currentDay == 46` means every day has been cleared.
pub type Day = u32;

/// A quiz or mock-test score as a whole percentage, 0..=100.
pub type Percent = u32;

/// Hero Credits. Signed because an ungated mock-test debit can
/// drive the balance below zero.
pub type Credits = i64;

/// Key under which a record lives in the key-value adapter.
pub type StoreKey = String;
