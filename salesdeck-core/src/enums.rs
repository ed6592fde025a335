//! Closed enum types for Salesdeck entities
//!
//! Every categorical field with a business-defined order declares that order
//! exactly once, through [`RankedEnum::ORDER`]. Rank tables used for sorting
//! are derived from it (see [`crate::rank`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed string union whose variants carry a business-meaningful order.
pub trait RankedEnum: Copy + Sized + 'static {
    /// Name of the ordering, used in logs and rank-table lookups.
    const NAME: &'static str;
    /// All variants, in rank order.
    const ORDER: &'static [Self];

    /// Display label; this is the string stored in records and filters.
    fn label(self) -> &'static str;

    /// Parse a label, case-insensitively.
    fn from_label(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::ORDER
            .iter()
            .copied()
            .find(|variant| variant.label().eq_ignore_ascii_case(needle))
    }

    /// Every label, in rank order.
    fn labels() -> Vec<&'static str> {
        Self::ORDER.iter().map(|variant| variant.label()).collect()
    }
}

/// Error when parsing an invalid enum label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumParseError {
    pub enum_name: &'static str,
    pub value: String,
}

impl fmt::Display for EnumParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.enum_name, self.value)
    }
}

impl std::error::Error for EnumParseError {}

macro_rules! ranked_enum_impls {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl FromStr for $ty {
            type Err = EnumParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as RankedEnum>::from_label(s).ok_or_else(|| EnumParseError {
                    enum_name: <$ty as RankedEnum>::NAME,
                    value: s.to_string(),
                })
            }
        }
    };
}

// ============================================================================
// DEAL STAGE
// ============================================================================

/// Pipeline stage of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealStage {
    #[serde(rename = "First meeting scheduled")]
    FirstMeetingScheduled,
    #[serde(rename = "Discovery")]
    Discovery,
    #[serde(rename = "Demo")]
    Demo,
    #[serde(rename = "Proposal")]
    Proposal,
    #[serde(rename = "Negotiation")]
    Negotiation,
    #[serde(rename = "Closed Won")]
    ClosedWon,
    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl RankedEnum for DealStage {
    const NAME: &'static str = "deal_stage";
    const ORDER: &'static [Self] = &[
        DealStage::FirstMeetingScheduled,
        DealStage::Discovery,
        DealStage::Demo,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::ClosedWon,
        DealStage::ClosedLost,
    ];

    fn label(self) -> &'static str {
        match self {
            DealStage::FirstMeetingScheduled => "First meeting scheduled",
            DealStage::Discovery => "Discovery",
            DealStage::Demo => "Demo",
            DealStage::Proposal => "Proposal",
            DealStage::Negotiation => "Negotiation",
            DealStage::ClosedWon => "Closed Won",
            DealStage::ClosedLost => "Closed Lost",
        }
    }
}

impl DealStage {
    /// Whether the deal has left the open pipeline.
    pub fn is_closed(&self) -> bool {
        matches!(self, DealStage::ClosedWon | DealStage::ClosedLost)
    }
}

ranked_enum_impls!(DealStage);

// ============================================================================
// PLAYBOOK CATEGORIES
// ============================================================================

/// Category of a sales objection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectionCategory {
    Budget,
    Timing,
    Authority,
    Need,
    Competition,
    Trust,
}

impl RankedEnum for ObjectionCategory {
    const NAME: &'static str = "objection_category";
    const ORDER: &'static [Self] = &[
        ObjectionCategory::Budget,
        ObjectionCategory::Timing,
        ObjectionCategory::Authority,
        ObjectionCategory::Need,
        ObjectionCategory::Competition,
        ObjectionCategory::Trust,
    ];

    fn label(self) -> &'static str {
        match self {
            ObjectionCategory::Budget => "Budget",
            ObjectionCategory::Timing => "Timing",
            ObjectionCategory::Authority => "Authority",
            ObjectionCategory::Need => "Need",
            ObjectionCategory::Competition => "Competition",
            ObjectionCategory::Trust => "Trust",
        }
    }
}

ranked_enum_impls!(ObjectionCategory);

/// Category of a frequently asked question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaqCategory {
    Product,
    Pricing,
    Security,
    Integrations,
    Implementation,
    Support,
}

impl RankedEnum for FaqCategory {
    const NAME: &'static str = "faq_category";
    const ORDER: &'static [Self] = &[
        FaqCategory::Product,
        FaqCategory::Pricing,
        FaqCategory::Security,
        FaqCategory::Integrations,
        FaqCategory::Implementation,
        FaqCategory::Support,
    ];

    fn label(self) -> &'static str {
        match self {
            FaqCategory::Product => "Product",
            FaqCategory::Pricing => "Pricing",
            FaqCategory::Security => "Security",
            FaqCategory::Integrations => "Integrations",
            FaqCategory::Implementation => "Implementation",
            FaqCategory::Support => "Support",
        }
    }
}

ranked_enum_impls!(FaqCategory);

/// Category of a discovery question, in the order a discovery call runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscoveryCategory {
    Situation,
    Problem,
    Implication,
    #[serde(rename = "Need-payoff")]
    NeedPayoff,
    #[serde(rename = "Decision process")]
    DecisionProcess,
}

impl RankedEnum for DiscoveryCategory {
    const NAME: &'static str = "discovery_category";
    const ORDER: &'static [Self] = &[
        DiscoveryCategory::Situation,
        DiscoveryCategory::Problem,
        DiscoveryCategory::Implication,
        DiscoveryCategory::NeedPayoff,
        DiscoveryCategory::DecisionProcess,
    ];

    fn label(self) -> &'static str {
        match self {
            DiscoveryCategory::Situation => "Situation",
            DiscoveryCategory::Problem => "Problem",
            DiscoveryCategory::Implication => "Implication",
            DiscoveryCategory::NeedPayoff => "Need-payoff",
            DiscoveryCategory::DecisionProcess => "Decision process",
        }
    }
}

ranked_enum_impls!(DiscoveryCategory);

// ============================================================================
// MEETINGS
// ============================================================================

/// Kind of a logged meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeetingKind {
    Intro,
    Discovery,
    Demo,
    Negotiation,
    #[serde(rename = "Check-in")]
    CheckIn,
}

impl RankedEnum for MeetingKind {
    const NAME: &'static str = "meeting_kind";
    const ORDER: &'static [Self] = &[
        MeetingKind::Intro,
        MeetingKind::Discovery,
        MeetingKind::Demo,
        MeetingKind::Negotiation,
        MeetingKind::CheckIn,
    ];

    fn label(self) -> &'static str {
        match self {
            MeetingKind::Intro => "Intro",
            MeetingKind::Discovery => "Discovery",
            MeetingKind::Demo => "Demo",
            MeetingKind::Negotiation => "Negotiation",
            MeetingKind::CheckIn => "Check-in",
        }
    }
}

ranked_enum_impls!(MeetingKind);
