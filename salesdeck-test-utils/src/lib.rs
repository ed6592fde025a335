//! Salesdeck Test Utilities
//!
//! Shared test infrastructure for the Salesdeck workspace:
//! - Proptest generators for every entity type
//! - Fixtures for the common list-page scenarios
//! - Assertions over pipeline output

pub use salesdeck_core::{
    Company, Contact, Dataset, Deal, DealStage, DiscoveryCategory, DiscoveryQuestion, Entity,
    Faq, FaqCategory, Meeting, MeetingKind, Objection, ObjectionCategory, RankedEnum,
};

/// Customer-profile buckets used by generated companies, contacts and
/// discovery questions.
pub const PROFILES: &[&str] = &["SMB", "Mid-market", "Enterprise", "Public sector"];

/// Id prefix per entity type; generated collections number ids from 0.
pub fn id_for(prefix: &str, index: usize) -> String {
    format!("{prefix}-{index:03}")
}

/// Give every record in a generated collection a unique id.
pub fn with_unique_ids<E>(
    mut records: Vec<E>,
    prefix: &str,
    set_id: impl Fn(&mut E, String),
) -> Vec<E> {
    for (index, record) in records.iter_mut().enumerate() {
        set_id(record, id_for(prefix, index));
    }
    records
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for generating Salesdeck entity types.

    use super::*;
    use proptest::prelude::*;
    use proptest::sample::select;

    const WORDS: &[&str] = &[
        "Acme", "Globex", "Initech", "Umbrella", "Hooli", "Stark", "Wayne", "Wonka", "Tyrell",
        "Cyberdyne", "Soylent", "Vandelay", "Pied", "Piper", "Dunder", "Mifflin",
    ];

    const OWNERS: &[&str] = &["Avery", "Jordan", "Sam", "Riley", "Quinn"];

    // === Scalar Generators ===

    /// Short display name built from two words.
    pub fn arb_name() -> impl Strategy<Value = String> {
        (select(WORDS), select(WORDS)).prop_map(|(a, b)| format!("{a} {b}"))
    }

    /// Search text: a fragment of some generated name, in random case.
    pub fn arb_query() -> impl Strategy<Value = String> {
        (select(WORDS), 1usize..5, any::<bool>()).prop_map(|(word, len, upper)| {
            let fragment: String = word.chars().take(len).collect();
            if upper {
                fragment.to_uppercase()
            } else {
                fragment.to_lowercase()
            }
        })
    }

    pub fn arb_profile() -> impl Strategy<Value = String> {
        select(PROFILES).prop_map(str::to_string)
    }

    pub fn arb_owner() -> impl Strategy<Value = String> {
        select(OWNERS).prop_map(str::to_string)
    }

    /// A date-string in 2020-2030, either `YYYY-MM-DD` or RFC 3339.
    pub fn arb_date() -> impl Strategy<Value = String> {
        (1577836800i64..1893456000i64, any::<bool>()).prop_map(|(secs, bare)| {
            chrono::DateTime::from_timestamp(secs, 0)
                .map(|ts| {
                    if bare {
                        ts.format("%Y-%m-%d").to_string()
                    } else {
                        ts.to_rfc3339()
                    }
                })
                .unwrap_or_default()
        })
    }

    pub fn arb_opt_date() -> impl Strategy<Value = Option<String>> {
        prop::option::weighted(0.75, arb_date())
    }

    // === Enum Generators ===

    pub fn arb_deal_stage() -> impl Strategy<Value = DealStage> {
        select(DealStage::ORDER)
    }

    pub fn arb_objection_category() -> impl Strategy<Value = ObjectionCategory> {
        select(ObjectionCategory::ORDER)
    }

    pub fn arb_faq_category() -> impl Strategy<Value = FaqCategory> {
        select(FaqCategory::ORDER)
    }

    pub fn arb_discovery_category() -> impl Strategy<Value = DiscoveryCategory> {
        select(DiscoveryCategory::ORDER)
    }

    pub fn arb_meeting_kind() -> impl Strategy<Value = MeetingKind> {
        select(MeetingKind::ORDER)
    }

    // === Entity Generators ===

    pub fn arb_company() -> impl Strategy<Value = Company> {
        (
            arb_name(),
            prop::option::of(arb_profile()),
            prop::option::of(0u32..50_000),
            prop::option::of(arb_owner()),
            arb_opt_date(),
            arb_opt_date(),
        )
            .prop_map(
                |(name, customer_profile, employee_count, owner, last_meeting, next_meeting)| {
                    Company {
                        id: String::new(),
                        domain: Some(format!(
                            "{}.example",
                            name.to_lowercase().replace(' ', "")
                        )),
                        industry: None,
                        name,
                        customer_profile,
                        employee_count,
                        owner,
                        last_meeting,
                        next_meeting,
                        notes: None,
                    }
                },
            )
    }

    pub fn arb_contact() -> impl Strategy<Value = Contact> {
        (
            arb_name(),
            prop::option::of(arb_name()),
            prop::option::of(arb_profile()),
            arb_opt_date(),
        )
            .prop_map(|(name, company_name, customer_profile, last_meeting)| Contact {
                id: String::new(),
                email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
                name,
                company_id: None,
                company_name,
                title: None,
                phone: None,
                customer_profile,
                last_meeting,
                next_meeting: None,
            })
    }

    pub fn arb_deal() -> impl Strategy<Value = Deal> {
        (
            arb_name(),
            arb_deal_stage(),
            prop::option::of(1_000u32..500_000),
            arb_opt_date(),
            prop::option::of(arb_owner()),
        )
            .prop_map(|(name, stage_name, amount, close_date, owner)| Deal {
                id: String::new(),
                company_name: Some(name.clone()),
                name,
                company_id: None,
                stage_name,
                amount: amount.map(f64::from),
                close_date,
                owner,
                next_step: None,
            })
    }

    pub fn arb_meeting() -> impl Strategy<Value = Meeting> {
        (arb_name(), prop::option::of(arb_meeting_kind()), arb_opt_date()).prop_map(
            |(title, kind, scheduled_at)| Meeting {
                id: String::new(),
                company_id: id_for("c", 0),
                contact_ids: Vec::new(),
                title,
                kind,
                scheduled_at,
                summary: None,
            },
        )
    }

    pub fn arb_objection() -> impl Strategy<Value = Objection> {
        (
            arb_name(),
            arb_objection_category(),
            prop::option::of(0u32..200),
        )
            .prop_map(|(objection, category, times_heard)| Objection {
                id: String::new(),
                response: Some(format!("Acknowledge {objection}")),
                objection,
                category,
                times_heard,
            })
    }

    pub fn arb_faq() -> impl Strategy<Value = Faq> {
        (arb_name(), arb_faq_category()).prop_map(|(question, category)| Faq {
            id: String::new(),
            answer: Some(format!("About {question}")),
            question,
            category,
        })
    }

    pub fn arb_discovery_question() -> impl Strategy<Value = DiscoveryQuestion> {
        (
            arb_name(),
            arb_discovery_category(),
            prop::collection::btree_set(arb_profile(), 0..3),
        )
            .prop_map(|(question, category, relevant)| DiscoveryQuestion {
                id: String::new(),
                purpose: None,
                question,
                category,
                typically_relevant_for: relevant.into_iter().collect(),
            })
    }

    // === Collection Generators (unique ids) ===

    pub fn arb_companies(max: usize) -> impl Strategy<Value = Vec<Company>> {
        prop::collection::vec(arb_company(), 0..max)
            .prop_map(|v| with_unique_ids(v, "c", |r, id| r.id = id))
    }

    pub fn arb_contacts(max: usize) -> impl Strategy<Value = Vec<Contact>> {
        prop::collection::vec(arb_contact(), 0..max)
            .prop_map(|v| with_unique_ids(v, "p", |r, id| r.id = id))
    }

    pub fn arb_deals(max: usize) -> impl Strategy<Value = Vec<Deal>> {
        prop::collection::vec(arb_deal(), 0..max)
            .prop_map(|v| with_unique_ids(v, "d", |r, id| r.id = id))
    }

    pub fn arb_objections(max: usize) -> impl Strategy<Value = Vec<Objection>> {
        prop::collection::vec(arb_objection(), 0..max)
            .prop_map(|v| with_unique_ids(v, "o", |r, id| r.id = id))
    }

    pub fn arb_faqs(max: usize) -> impl Strategy<Value = Vec<Faq>> {
        prop::collection::vec(arb_faq(), 0..max)
            .prop_map(|v| with_unique_ids(v, "f", |r, id| r.id = id))
    }

    pub fn arb_discovery_questions(max: usize) -> impl Strategy<Value = Vec<DiscoveryQuestion>> {
        prop::collection::vec(arb_discovery_question(), 0..max)
            .prop_map(|v| with_unique_ids(v, "q", |r, id| r.id = id))
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built records for common list-page scenarios.

    use super::*;

    pub fn company(id: &str, name: &str, last_meeting: Option<&str>) -> Company {
        Company {
            id: id.to_string(),
            name: name.to_string(),
            domain: None,
            industry: None,
            customer_profile: None,
            employee_count: None,
            owner: None,
            last_meeting: last_meeting.map(str::to_string),
            next_meeting: None,
            notes: None,
        }
    }

    pub fn contact(id: &str, name: &str, company_id: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            company_id: Some(company_id.to_string()),
            company_name: None,
            title: None,
            email: None,
            phone: None,
            customer_profile: None,
            last_meeting: None,
            next_meeting: None,
        }
    }

    pub fn deal(id: &str, name: &str, stage: DealStage) -> Deal {
        Deal {
            id: id.to_string(),
            name: name.to_string(),
            company_id: None,
            company_name: None,
            stage_name: stage,
            amount: None,
            close_date: None,
            owner: None,
            next_step: None,
        }
    }

    pub fn meeting(id: &str, company_id: &str, scheduled_at: Option<&str>) -> Meeting {
        Meeting {
            id: id.to_string(),
            company_id: company_id.to_string(),
            contact_ids: Vec::new(),
            title: format!("Meeting {id}"),
            kind: Some(MeetingKind::CheckIn),
            scheduled_at: scheduled_at.map(str::to_string),
            summary: None,
        }
    }

    pub fn objection(id: &str, text: &str, category: ObjectionCategory) -> Objection {
        Objection {
            id: id.to_string(),
            objection: text.to_string(),
            category,
            response: None,
            times_heard: None,
        }
    }

    pub fn faq(id: &str, question: &str, category: FaqCategory) -> Faq {
        Faq {
            id: id.to_string(),
            question: question.to_string(),
            answer: None,
            category,
        }
    }

    pub fn discovery_question(
        id: &str,
        question: &str,
        category: DiscoveryCategory,
        relevant_for: &[&str],
    ) -> DiscoveryQuestion {
        DiscoveryQuestion {
            id: id.to_string(),
            question: question.to_string(),
            category,
            purpose: None,
            typically_relevant_for: relevant_for.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Three deals whose stages are out of rank and alphabetical order.
    pub fn shuffled_stage_deals() -> Vec<Deal> {
        vec![
            deal("d-1", "Renewal", DealStage::ClosedWon),
            deal("d-2", "Expansion", DealStage::Demo),
            deal("d-3", "New logo", DealStage::FirstMeetingScheduled),
        ]
    }

    /// `count` companies named `Company 000`, `Company 001`, ...
    pub fn numbered_companies(count: usize) -> Vec<Company> {
        (0..count)
            .map(|i| company(&id_for("c", i), &format!("Company {i:03}"), None))
            .collect()
    }

    /// Small dataset touching every collection.
    pub fn sample_dataset() -> Dataset {
        let mut acme = company("c-1", "Acme", Some("2024-03-01"));
        acme.customer_profile = Some("Enterprise".to_string());
        let mut jo = contact("p-1", "Jo Park", "c-1");
        jo.company_name = Some("Acme".to_string());
        let mut renewal = deal("d-1", "Acme renewal", DealStage::Negotiation);
        renewal.company_id = Some("c-1".to_string());
        renewal.company_name = Some("Acme".to_string());
        let mut kickoff = meeting("m-1", "c-1", Some("2024-03-01"));
        kickoff.contact_ids = vec!["p-1".to_string()];
        Dataset {
            companies: vec![acme, company("c-2", "Globex", None)],
            contacts: vec![jo],
            deals: vec![renewal, deal("d-2", "Globex pilot", DealStage::Discovery)],
            meetings: vec![kickoff],
            objections: vec![objection("o-1", "Too expensive", ObjectionCategory::Budget)],
            faqs: vec![faq("f-1", "Do you support SSO?", FaqCategory::Security)],
            discovery_questions: vec![discovery_question(
                "q-1",
                "How do you forecast today?",
                DiscoveryCategory::Situation,
                &["Enterprise"],
            )],
        }
    }

    /// [`sample_dataset`] as JSON, the shape the front-end loads from disk.
    pub fn sample_dataset_json() -> String {
        serde_json::to_string_pretty(&sample_dataset()).unwrap_or_default()
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions over ordered record lists.

    use super::*;

    /// Assert that `records` have exactly `expected` ids, in order.
    #[track_caller]
    pub fn assert_ids<'a, E: Entity + 'a>(
        records: impl IntoIterator<Item = &'a E>,
        expected: &[&str],
    ) {
        let actual: Vec<&str> = records.into_iter().map(|r| r.id()).collect();
        assert_eq!(actual, expected, "record order mismatch");
    }

    /// Assert that no record with a non-null value follows one with a null
    /// value, according to `is_null`.
    #[track_caller]
    pub fn assert_nulls_last<'a, E: 'a>(
        records: impl IntoIterator<Item = &'a E>,
        is_null: impl Fn(&E) -> bool,
    ) {
        let mut seen_null = false;
        for (index, record) in records.into_iter().enumerate() {
            let null = is_null(record);
            assert!(
                !(seen_null && !null),
                "non-null value at position {} after a null",
                index
            );
            seen_null |= null;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn generated_collections_have_unique_ids(deals in generators::arb_deals(40)) {
            let mut ids: Vec<&str> = deals.iter().map(|d| d.id()).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), deals.len());
        }

        #[test]
        fn generated_dates_parse(date in generators::arb_date()) {
            prop_assert!(salesdeck_core::parse_timestamp(&date).is_some());
        }
    }

    #[test]
    fn sample_dataset_is_valid_json() {
        let json = fixtures::sample_dataset_json();
        let dataset = Dataset::from_json_str(&json).unwrap();
        assert_eq!(dataset, fixtures::sample_dataset());
    }
}
