use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Auto-promotion toggles for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// A card may be auto-promoted when its rank is at most this far above
    /// the lowest foundation top (and at least one above). 0 turns
    /// auto-promotion off.
    pub auto_promote_lead: u8,
    /// Hold auto-promotion until the player has made a move after the deal.
    pub auto_promote_after_first_move: bool,
}

impl Default for Rules {
    fn default() -> Self {
        // Lead of 2 lets a foundation run one step ahead of the others.
        Self {
            auto_promote_lead: 2,
            auto_promote_after_first_move: true,
        }
    }
}

impl Rules {
    #[inline]
    pub const fn new(auto_promote_lead: u8, auto_promote_after_first_move: bool) -> Self {
        Self {
            auto_promote_lead,
            auto_promote_after_first_move,
        }
    }

    /// Only promote cards exactly one above every foundation.
    #[inline]
    pub const fn classic() -> Self {
        Self {
            auto_promote_lead: 1,
            auto_promote_after_first_move: true,
        }
    }

    #[inline]
    pub const fn manual() -> Self {
        Self {
            auto_promote_lead: 0,
            auto_promote_after_first_move: true,
        }
    }

    #[inline]
    pub fn auto_promote_enabled(&self) -> bool {
        self.auto_promote_lead > 0
    }

    /// Parse rules from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let rules: Rules = serde_json::from_str(json).map_err(|e| EngineError::InvalidRules {
            message: e.to_string(),
        })?;
        if usize::from(rules.auto_promote_lead) > crate::types::Rank::ALL.len() {
            return Err(EngineError::InvalidRules {
                message: format!(
                    "auto_promote_lead {} exceeds the number of ranks",
                    rules.auto_promote_lead
                ),
            });
        }
        Ok(rules)
    }
}
