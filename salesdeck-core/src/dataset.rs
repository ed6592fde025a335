//! The record collections every page lists, loaded once from JSON.

use crate::entities::{
    Company, Contact, Deal, DiscoveryQuestion, Faq, Meeting, MeetingField, Objection,
};
use crate::error::DatasetError;
use crate::field::Entity;
use crate::sort::{compare_records, ComparatorKind, SortDirection};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// All source collections. Missing arrays load as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub companies: Vec<Company>,
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,
    pub meetings: Vec<Meeting>,
    pub objections: Vec<Objection>,
    pub faqs: Vec<Faq>,
    pub discovery_questions: Vec<DiscoveryQuestion>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let contents = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            companies = dataset.companies.len(),
            contacts = dataset.contacts.len(),
            deals = dataset.deals.len(),
            meetings = dataset.meetings.len(),
            objections = dataset.objections.len(),
            faqs = dataset.faqs.len(),
            discovery_questions = dataset.discovery_questions.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Every id is non-empty and unique within its entity type.
    pub fn validate(&self) -> Result<(), DatasetError> {
        unique_ids(&self.companies)?;
        unique_ids(&self.contacts)?;
        unique_ids(&self.deals)?;
        unique_ids(&self.meetings)?;
        unique_ids(&self.objections)?;
        unique_ids(&self.faqs)?;
        unique_ids(&self.discovery_questions)?;
        Ok(())
    }

    /// Meetings with `company_id`, most recent first; unscheduled last.
    pub fn meetings_for_company(&self, company_id: &str) -> Vec<&Meeting> {
        sorted_meetings(self.meetings.iter().filter(|m| m.company_id == company_id))
    }

    /// Meetings attended by `contact_id`, most recent first; unscheduled last.
    pub fn meetings_for_contact(&self, contact_id: &str) -> Vec<&Meeting> {
        sorted_meetings(
            self.meetings
                .iter()
                .filter(|m| m.contact_ids.iter().any(|id| id == contact_id)),
        )
    }

    pub fn contacts_at(&self, company_id: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.company_id.as_deref() == Some(company_id))
            .collect()
    }

    pub fn deals_for(&self, company_id: &str) -> Vec<&Deal> {
        self.deals
            .iter()
            .filter(|d| d.company_id.as_deref() == Some(company_id))
            .collect()
    }
}

fn unique_ids<E: Entity>(records: &[E]) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let id = record.id();
        if id.trim().is_empty() {
            return Err(DatasetError::EmptyId {
                entity: E::KIND,
                index,
            });
        }
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId {
                entity: E::KIND,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn sorted_meetings<'a>(meetings: impl Iterator<Item = &'a Meeting>) -> Vec<&'a Meeting> {
    let mut meetings: Vec<&Meeting> = meetings.collect();
    meetings.sort_by(|a, b| {
        compare_records(
            *a,
            *b,
            MeetingField::ScheduledAt,
            ComparatorKind::Date,
            SortDirection::Descending,
        )
    });
    meetings
}
