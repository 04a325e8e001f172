use std::fmt;

/// Outcome of the last mutation a hook ran.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MutationStatus {
    /// No mutation has run yet.
    #[default]
    Idle,
    Success,
    Failed,
}

impl MutationStatus {
    pub fn is_success(&self) -> bool {
        *self == MutationStatus::Success
    }
}

impl From<bool> for MutationStatus {
    fn from(ok: bool) -> Self {
        if ok {
            MutationStatus::Success
        } else {
            MutationStatus::Failed
        }
    }
}

impl fmt::Display for MutationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MutationStatus::Idle => "idle",
            MutationStatus::Success => "success",
            MutationStatus::Failed => "failed",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(MutationStatus::default(), MutationStatus::Idle);
        assert_eq!(MutationStatus::from(true), MutationStatus::Success);
        assert_eq!(MutationStatus::from(false), MutationStatus::Failed);
    }
}
