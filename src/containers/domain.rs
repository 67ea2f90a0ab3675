use crate::core::error::LabResult;

pub mod bank_account;
pub mod notebook;
pub mod trunk;

// Guarded abstracts a value holder whose usage must stay within `[0, bound]`. Every
// mutator validates before it applies, so a failed call leaves the holder unchanged.
pub trait Guarded {
    type Amount: Copy + PartialOrd;

    fn usage(&self) -> Self::Amount;

    // None means there is no upper bound
    fn bound(&self) -> Option<Self::Amount>;

    fn increase(&mut self, amount: Self::Amount) -> LabResult<()>;

    fn decrease(&mut self, amount: Self::Amount) -> LabResult<()>;
}
