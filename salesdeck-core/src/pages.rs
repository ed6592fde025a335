//! Page configurations for the six list pages.
//!
//! Each function returns everything the generic engine needs for one entity
//! type. Rank tables are referenced, never redeclared here.

use crate::config::ListConfig;
use crate::entities::{
    CompanyField, ContactField, DealField, DiscoveryQuestionField, FaqField, ObjectionField,
};
use crate::filter::FilterOptions;
use crate::rank::{
    DEAL_STAGE_RANK, DISCOVERY_CATEGORY_RANK, FAQ_CATEGORY_RANK, OBJECTION_CATEGORY_RANK,
};
use crate::sort::ComparatorKind;

fn fixed(labels: &[&'static str]) -> FilterOptions {
    FilterOptions::Fixed(labels.to_vec())
}

pub fn companies() -> ListConfig<CompanyField> {
    ListConfig::builder("companies", CompanyField::Name)
        .search([
            CompanyField::Name,
            CompanyField::Domain,
            CompanyField::Industry,
        ])
        .single_filter(CompanyField::CustomerProfile, "Profile")
        .comparator(CompanyField::Employees, ComparatorKind::Numeric)
        .comparator(CompanyField::LastMeeting, ComparatorKind::Date)
        .comparator(CompanyField::NextMeeting, ComparatorKind::Date)
        .column(CompanyField::Name, "Company", 24)
        .column(CompanyField::Domain, "Domain", 18)
        .column(CompanyField::CustomerProfile, "Profile", 18)
        .column(CompanyField::Employees, "Employees", 10)
        .column(CompanyField::LastMeeting, "Last meeting", 15)
        .column(CompanyField::NextMeeting, "Next meeting", 15)
        .build()
}

pub fn contacts() -> ListConfig<ContactField> {
    ListConfig::builder("contacts", ContactField::Name)
        .search([
            ContactField::Name,
            ContactField::Email,
            ContactField::Title,
            ContactField::CompanyName,
        ])
        .single_filter(ContactField::CustomerProfile, "Profile")
        .comparator(ContactField::LastMeeting, ComparatorKind::Date)
        .comparator(ContactField::NextMeeting, ComparatorKind::Date)
        .column(ContactField::Name, "Name", 20)
        .column(ContactField::Title, "Title", 20)
        .column(ContactField::CompanyName, "Company", 20)
        .static_column(ContactField::Email, "Email", 20)
        .column(ContactField::LastMeeting, "Last meeting", 20)
        .build()
}

pub fn deals() -> ListConfig<DealField> {
    ListConfig::builder("deals", DealField::Stage)
        .search([DealField::Name, DealField::CompanyName, DealField::Owner])
        .multi_filter(DealField::Stage, "Stage", fixed(DEAL_STAGE_RANK.labels()))
        .comparator(DealField::Stage, ComparatorKind::Rank(&DEAL_STAGE_RANK))
        .comparator(DealField::Amount, ComparatorKind::Numeric)
        .comparator(DealField::CloseDate, ComparatorKind::Date)
        .column(DealField::Name, "Deal", 26)
        .column(DealField::CompanyName, "Company", 20)
        .column(DealField::Stage, "Stage", 20)
        .column(DealField::Amount, "Amount", 12)
        .column(DealField::CloseDate, "Close date", 12)
        .column(DealField::Owner, "Owner", 10)
        .build()
}

pub fn objections() -> ListConfig<ObjectionField> {
    ListConfig::builder("objections", ObjectionField::Category)
        .search([ObjectionField::Objection, ObjectionField::Response])
        .multi_filter(
            ObjectionField::Category,
            "Category",
            fixed(OBJECTION_CATEGORY_RANK.labels()),
        )
        .comparator(
            ObjectionField::Category,
            ComparatorKind::Rank(&OBJECTION_CATEGORY_RANK),
        )
        .comparator(ObjectionField::TimesHeard, ComparatorKind::Numeric)
        .column(ObjectionField::Objection, "Objection", 50)
        .column(ObjectionField::Category, "Category", 20)
        .column(ObjectionField::TimesHeard, "Heard", 10)
        .build()
}

pub fn faqs() -> ListConfig<FaqField> {
    ListConfig::builder("faqs", FaqField::Category)
        .search([FaqField::Question, FaqField::Answer])
        .multi_filter(FaqField::Category, "Category", fixed(FAQ_CATEGORY_RANK.labels()))
        .comparator(FaqField::Category, ComparatorKind::Rank(&FAQ_CATEGORY_RANK))
        .column(FaqField::Question, "Question", 70)
        .column(FaqField::Category, "Category", 30)
        .build()
}

pub fn discovery_questions() -> ListConfig<DiscoveryQuestionField> {
    ListConfig::builder("discovery_questions", DiscoveryQuestionField::Category)
        .search([
            DiscoveryQuestionField::Question,
            DiscoveryQuestionField::Purpose,
        ])
        .multi_filter(
            DiscoveryQuestionField::Category,
            "Category",
            fixed(DISCOVERY_CATEGORY_RANK.labels()),
        )
        .array_filter(
            DiscoveryQuestionField::RelevantFor,
            "Relevant for",
            FilterOptions::FromData,
        )
        .comparator(
            DiscoveryQuestionField::Category,
            ComparatorKind::Rank(&DISCOVERY_CATEGORY_RANK),
        )
        .column(DiscoveryQuestionField::Question, "Question", 55)
        .column(DiscoveryQuestionField::Category, "Category", 20)
        .static_column(DiscoveryQuestionField::RelevantFor, "Relevant for", 25)
        .build()
}
