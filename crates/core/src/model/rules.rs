use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RulesError {
    #[error("xp per correct answer must be > 0")]
    InvalidXpPerCorrect,

    #[error("xp per level must be > 0")]
    InvalidXpPerLevel,
}

/// Reward and levelling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionRules {
    xp_per_correct: u32,
    xp_per_level: u32,
}

impl Default for ProgressionRules {
    /// 50 XP per correct answer, a new level every 100 XP.
    fn default() -> Self {
        Self {
            xp_per_correct: 50,
            xp_per_level: 100,
        }
    }
}

impl ProgressionRules {
    /// Creates custom rules.
    ///
    /// # Errors
    ///
    /// Returns error if any parameter is zero.
    pub fn new(xp_per_correct: u32, xp_per_level: u32) -> Result<Self, RulesError> {
        if xp_per_correct == 0 {
            return Err(RulesError::InvalidXpPerCorrect);
        }
        if xp_per_level == 0 {
            return Err(RulesError::InvalidXpPerLevel);
        }
        Ok(Self {
            xp_per_correct,
            xp_per_level,
        })
    }

    #[must_use]
    pub fn xp_per_correct(&self) -> u32 {
        self.xp_per_correct
    }

    #[must_use]
    pub fn xp_per_level(&self) -> u32 {
        self.xp_per_level
    }

    /// Level reached with `xp` experience. Levels start at 1.
    #[must_use]
    pub fn level_for(&self, xp: u32) -> u32 {
        xp / self.xp_per_level + 1
    }

    /// Experience gathered since the last level-up.
    #[must_use]
    pub fn xp_into_level(&self, xp: u32) -> u32 {
        xp % self.xp_per_level
    }
}
