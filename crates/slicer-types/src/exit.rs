/// Process exit statuses. Scripts depend on these values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// A domain error reached the top level, or the model failed validation.
    Failure,
    /// A required optional component is not available.
    MissingPackage,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::MissingPackage => 2,
        }
    }
}
