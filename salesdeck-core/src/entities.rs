//! Entity records
//!
//! Plain data, supplied wholesale by the dataset and never mutated by the
//! list engine. Optional fields stay `Option` all the way down; the engine
//! decides what absence means (fails an active filter, sorts last).

use crate::enums::{DealStage, DiscoveryCategory, FaqCategory, MeetingKind, ObjectionCategory, RankedEnum};
use crate::field::{Entity, EntityKind, FieldValue};
use serde::{Deserialize, Serialize};

// ============================================================================
// COMPANY
// ============================================================================

/// An account the sales team is working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub domain: Option<String>,
    pub industry: Option<String>,
    /// Ideal-customer-profile bucket, e.g. "Mid-market SaaS".
    pub customer_profile: Option<String>,
    pub employee_count: Option<u32>,
    pub owner: Option<String>,
    pub last_meeting: Option<String>,
    pub next_meeting: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    Name,
    Domain,
    Industry,
    CustomerProfile,
    Employees,
    Owner,
    LastMeeting,
    NextMeeting,
}

impl Entity for Company {
    type Field = CompanyField;
    const KIND: EntityKind = EntityKind::Company;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: CompanyField) -> FieldValue<'_> {
        match field {
            CompanyField::Name => FieldValue::Text(&self.name),
            CompanyField::Domain => FieldValue::opt_text(self.domain.as_deref()),
            CompanyField::Industry => FieldValue::opt_text(self.industry.as_deref()),
            CompanyField::CustomerProfile => {
                FieldValue::opt_text(self.customer_profile.as_deref())
            }
            CompanyField::Employees => {
                FieldValue::opt_number(self.employee_count.map(f64::from))
            }
            CompanyField::Owner => FieldValue::opt_text(self.owner.as_deref()),
            CompanyField::LastMeeting => FieldValue::opt_text(self.last_meeting.as_deref()),
            CompanyField::NextMeeting => FieldValue::opt_text(self.next_meeting.as_deref()),
        }
    }
}

// ============================================================================
// CONTACT
// ============================================================================

/// A person at a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub company_id: Option<String>,
    /// Denormalized for search and display.
    pub company_name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub customer_profile: Option<String>,
    pub last_meeting: Option<String>,
    pub next_meeting: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    CompanyName,
    Title,
    Email,
    CustomerProfile,
    LastMeeting,
    NextMeeting,
}

impl Entity for Contact {
    type Field = ContactField;
    const KIND: EntityKind = EntityKind::Contact;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: ContactField) -> FieldValue<'_> {
        match field {
            ContactField::Name => FieldValue::Text(&self.name),
            ContactField::CompanyName => FieldValue::opt_text(self.company_name.as_deref()),
            ContactField::Title => FieldValue::opt_text(self.title.as_deref()),
            ContactField::Email => FieldValue::opt_text(self.email.as_deref()),
            ContactField::CustomerProfile => {
                FieldValue::opt_text(self.customer_profile.as_deref())
            }
            ContactField::LastMeeting => FieldValue::opt_text(self.last_meeting.as_deref()),
            ContactField::NextMeeting => FieldValue::opt_text(self.next_meeting.as_deref()),
        }
    }
}

// ============================================================================
// DEAL
// ============================================================================

/// An opportunity moving through the sales pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub name: String,
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub stage_name: DealStage,
    pub amount: Option<f64>,
    pub close_date: Option<String>,
    pub owner: Option<String>,
    pub next_step: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealField {
    Name,
    CompanyName,
    Stage,
    Amount,
    CloseDate,
    Owner,
}

impl Entity for Deal {
    type Field = DealField;
    const KIND: EntityKind = EntityKind::Deal;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: DealField) -> FieldValue<'_> {
        match field {
            DealField::Name => FieldValue::Text(&self.name),
            DealField::CompanyName => FieldValue::opt_text(self.company_name.as_deref()),
            DealField::Stage => FieldValue::Text(self.stage_name.label()),
            DealField::Amount => FieldValue::opt_number(self.amount),
            DealField::CloseDate => FieldValue::opt_text(self.close_date.as_deref()),
            DealField::Owner => FieldValue::opt_text(self.owner.as_deref()),
        }
    }
}

// ============================================================================
// MEETING
// ============================================================================

/// A logged or scheduled meeting with a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub company_id: String,
    #[serde(default)]
    pub contact_ids: Vec<String>,
    pub title: String,
    pub kind: Option<MeetingKind>,
    pub scheduled_at: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeetingField {
    Title,
    Kind,
    ScheduledAt,
}

impl Entity for Meeting {
    type Field = MeetingField;
    const KIND: EntityKind = EntityKind::Meeting;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: MeetingField) -> FieldValue<'_> {
        match field {
            MeetingField::Title => FieldValue::Text(&self.title),
            MeetingField::Kind => FieldValue::opt_text(self.kind.map(MeetingKind::label)),
            MeetingField::ScheduledAt => FieldValue::opt_text(self.scheduled_at.as_deref()),
        }
    }
}

// ============================================================================
// PLAYBOOK CONTENT
// ============================================================================

/// A common objection and the recommended response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objection {
    pub id: String,
    pub objection: String,
    pub category: ObjectionCategory,
    pub response: Option<String>,
    pub times_heard: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectionField {
    Objection,
    Category,
    Response,
    TimesHeard,
}

impl Entity for Objection {
    type Field = ObjectionField;
    const KIND: EntityKind = EntityKind::Objection;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: ObjectionField) -> FieldValue<'_> {
        match field {
            ObjectionField::Objection => FieldValue::Text(&self.objection),
            ObjectionField::Category => FieldValue::Text(self.category.label()),
            ObjectionField::Response => FieldValue::opt_text(self.response.as_deref()),
            ObjectionField::TimesHeard => {
                FieldValue::opt_number(self.times_heard.map(f64::from))
            }
        }
    }
}

/// A frequently asked question with its canonical answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: Option<String>,
    pub category: FaqCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaqField {
    Question,
    Answer,
    Category,
}

impl Entity for Faq {
    type Field = FaqField;
    const KIND: EntityKind = EntityKind::Faq;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: FaqField) -> FieldValue<'_> {
        match field {
            FaqField::Question => FieldValue::Text(&self.question),
            FaqField::Answer => FieldValue::opt_text(self.answer.as_deref()),
            FaqField::Category => FieldValue::Text(self.category.label()),
        }
    }
}

/// A question to ask during discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryQuestion {
    pub id: String,
    pub question: String,
    pub category: DiscoveryCategory,
    pub purpose: Option<String>,
    /// Customer profiles this question usually applies to. A set, not a list.
    #[serde(default)]
    pub typically_relevant_for: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscoveryQuestionField {
    Question,
    Category,
    Purpose,
    RelevantFor,
}

impl Entity for DiscoveryQuestion {
    type Field = DiscoveryQuestionField;
    const KIND: EntityKind = EntityKind::DiscoveryQuestion;

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: DiscoveryQuestionField) -> FieldValue<'_> {
        match field {
            DiscoveryQuestionField::Question => FieldValue::Text(&self.question),
            DiscoveryQuestionField::Category => FieldValue::Text(self.category.label()),
            DiscoveryQuestionField::Purpose => FieldValue::opt_text(self.purpose.as_deref()),
            DiscoveryQuestionField::RelevantFor => {
                FieldValue::list(&self.typically_relevant_for)
            }
        }
    }
}
