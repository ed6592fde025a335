//! Salesdeck Core - records and the list engine
//!
//! Entity records for the CRM pages plus the generic engine every list page
//! shares: filter -> stable sort -> paginate, URL- or parent-driven
//! selection, and the master-detail model tying them together. No terminal
//! or network code lives here.

pub mod config;
pub mod dataset;
pub mod entities;
pub mod enums;
pub mod error;
pub mod field;
pub mod filter;
pub mod history;
pub mod master_detail;
pub mod pages;
pub mod pagination;
pub mod pipeline;
pub mod rank;
pub mod selection;
pub mod sort;
pub mod subscription;

pub use config::{Column, ListConfig, ListConfigBuilder, DEFAULT_ROWS_PER_PAGE};
pub use dataset::Dataset;
pub use entities::{
    Company, CompanyField, Contact, ContactField, Deal, DealField, DiscoveryQuestion,
    DiscoveryQuestionField, Faq, FaqField, Meeting, MeetingField, Objection, ObjectionField,
};
pub use enums::{
    DealStage, DiscoveryCategory, EnumParseError, FaqCategory, MeetingKind, ObjectionCategory,
    RankedEnum,
};
pub use error::{DatasetError, ListError, ListResult};
pub use field::{Entity, EntityKind, FieldValue};
pub use filter::{FilterKind, FilterOptions, FilterSelection, FilterSpec, FilterState};
pub use history::{History, Location};
pub use master_detail::ListPage;
pub use pagination::Pagination;
pub use pipeline::{Group, ListPipeline, PageView, UNGROUPED_LABEL};
pub use rank::{
    RankTable, DEAL_STAGE_RANK, DISCOVERY_CATEGORY_RANK, FAQ_CATEGORY_RANK,
    OBJECTION_CATEGORY_RANK,
};
pub use selection::{
    ChangeCallback, ControlledSelection, MemorySelectionStore, SelectionController,
    SelectionStore, UrlSelectionStore,
};
pub use sort::{
    compare_records, compare_values, parse_timestamp, ComparatorKind, SortDirection, SortSpec,
};
pub use subscription::Subscription;
