//! The fixed onboarding step sequence.

use serde::{Deserialize, Serialize};

/// One screen of the onboarding sequence.
///
/// Progresses linearly: Welcome → PayRate → BackgroundCheck → Profile →
/// Documents → Review → Complete. Identity is the serialized id; the
/// declaration order defines navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    Welcome,
    PayRate,
    BackgroundCheck,
    Profile,
    Documents,
    Review,
    Complete,
}

/// All steps in navigation order.
pub const STEPS: [StepId; 7] = [
    StepId::Welcome,
    StepId::PayRate,
    StepId::BackgroundCheck,
    StepId::Profile,
    StepId::Documents,
    StepId::Review,
    StepId::Complete,
];

impl StepId {
    /// Human-readable step title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::PayRate => "Set your hourly rate",
            Self::BackgroundCheck => "Background check",
            Self::Profile => "Profile",
            Self::Documents => "Documents",
            Self::Review => "Review",
            Self::Complete => "Complete",
        }
    }

    /// Position of this step in the sequence.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether this step is terminal (onboarding is done).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// The step the wizard opens on. Earlier steps are handled by the
    /// account surface before the wizard mounts.
    pub fn first_actionable() -> StepId {
        StepId::PayRate
    }

    /// Get the next step in the sequence, if any.
    pub fn next(&self) -> Option<StepId> {
        STEPS.get(self.index() + 1).copied()
    }

    /// Get the previous step in the sequence, if any.
    pub fn previous(&self) -> Option<StepId> {
        self.index().checked_sub(1).map(|i| STEPS[i])
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Welcome => "welcome",
            Self::PayRate => "pay-rate",
            Self::BackgroundCheck => "background-check",
            Self::Profile => "profile",
            Self::Documents => "documents",
            Self::Review => "review",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_all_steps() {
        let mut current = StepId::Welcome;
        for expected in &STEPS[1..] {
            let next = current.next().unwrap();
            assert_eq!(next, *expected);
            current = next;
        }
        assert!(current.next().is_none());
    }

    #[test]
    fn previous_inverts_next() {
        for step in STEPS {
            if let Some(next) = step.next() {
                assert_eq!(next.previous(), Some(step));
            }
        }
        assert!(StepId::Welcome.previous().is_none());
    }

    #[test]
    fn index_matches_position() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn is_terminal() {
        assert!(StepId::Complete.is_terminal());
        assert!(!StepId::Welcome.is_terminal());
        assert!(!StepId::Review.is_terminal());
    }

    #[test]
    fn first_actionable_is_pay_rate() {
        assert_eq!(StepId::first_actionable(), StepId::PayRate);
        assert_eq!(StepId::first_actionable().index(), 1);
    }

    #[test]
    fn display_matches_serde() {
        for step in STEPS {
            let display = format!("{step}");
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(
                format!("\"{display}\""),
                json,
                "Display and serde should match for {step:?}"
            );
        }
    }

    #[test]
    fn titles_are_set() {
        assert_eq!(StepId::PayRate.title(), "Set your hourly rate");
        for step in STEPS {
            assert!(!step.title().is_empty());
        }
    }
}
