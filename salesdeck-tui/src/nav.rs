//! Navigation and view switching utilities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Companies,
    Contacts,
    Deals,
    Objections,
    Faqs,
    DiscoveryQuestions,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Companies => "Companies",
            View::Contacts => "Contacts",
            View::Deals => "Deals",
            View::Objections => "Objections",
            View::Faqs => "FAQs",
            View::DiscoveryQuestions => "Discovery",
        }
    }

    /// Location path of the page.
    pub fn route(&self) -> &'static str {
        match self {
            View::Companies => "/companies",
            View::Contacts => "/contacts",
            View::Deals => "/deals",
            View::Objections => "/objections",
            View::Faqs => "/faqs",
            View::DiscoveryQuestions => "/discovery-questions",
        }
    }

    /// Query parameter holding the page's selected id.
    pub fn selection_param(&self) -> &'static str {
        match self {
            View::Companies => "company",
            View::Contacts => "contact",
            View::Deals => "deal",
            View::Objections => "objection",
            View::Faqs => "faq",
            View::DiscoveryQuestions => "question",
        }
    }

    pub fn from_path(path: &str) -> Option<View> {
        let path = path.trim_end_matches('/');
        Self::all().iter().copied().find(|view| view.route() == path)
    }

    pub fn all() -> &'static [View] {
        &[
            View::Companies,
            View::Contacts,
            View::Deals,
            View::Objections,
            View::Faqs,
            View::DiscoveryQuestions,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<View> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> View {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> View {
        let idx = self.index();
        let all = Self::all();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}
