//! Collateral model.
//!
//! Collateral entries are the concrete deliverables attached to an Item,
//! and the only entities whose status is set directly by an author or
//! reviewer.
//! The `published` flag governs client-view filtering.

use serde::{Deserialize, Serialize};
use wp_core::traits::{Id, Identifiable};

use crate::status::WorkStatus;

/// Kind of deliverable a collateral entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollateralKind {
    Deck,
    #[default]
    Document,
    Spreadsheet,
    EmailTemplate,
    LandingPage,
    #[serde(other)]
    Other,
}

impl CollateralKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollateralKind::Deck => "deck",
            CollateralKind::Document => "document",
            CollateralKind::Spreadsheet => "spreadsheet",
            CollateralKind::EmailTemplate => "email_template",
            CollateralKind::LandingPage => "landing_page",
            CollateralKind::Other => "other",
        }
    }
}

/// Collateral entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collateral {
    pub id: Id,

    /// Owning item.
    pub item_id: Id,

    pub kind: CollateralKind,

    /// Author/reviewer-set status; everything above this level is derived.
    #[serde(default)]
    pub status: WorkStatus,

    /// Visible to client-view callers when true.
    #[serde(default)]
    pub published: bool,

    /// Optional display name.
    pub name: Option<String>,
}

impl Collateral {
    pub fn new(id: Id, item_id: Id, kind: CollateralKind) -> Self {
        Self {
            id,
            item_id,
            kind,
            status: WorkStatus::NotStarted,
            published: false,
            name: None,
        }
    }

    pub fn with_status(mut self, status: WorkStatus) -> Self {
        self.status = status;
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }
}

impl Identifiable for Collateral {
    fn id(&self) -> Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collateral_defaults() {
        let collateral = Collateral::new(1, 10, CollateralKind::Deck);
        assert_eq!(collateral.status, WorkStatus::NotStarted);
        assert!(!collateral.published);
    }

    #[test]
    fn test_wire_shape() {
        let json = r#"{
            "id": 5,
            "itemId": 10,
            "kind": "email_template",
            "status": "IN_REVIEW",
            "published": true,
            "name": "Q3 outreach sequence"
        }"#;

        let collateral: Collateral = serde_json::from_str(json).unwrap();
        assert_eq!(collateral.kind, CollateralKind::EmailTemplate);
        assert_eq!(collateral.status, WorkStatus::InReview);
        assert!(collateral.published);
    }

    #[test]
    fn test_unknown_kind_decodes_as_other() {
        let json = r#"{"id": 1, "itemId": 2, "kind": "hologram"}"#;
        let collateral: Collateral = serde_json::from_str(json).unwrap();
        assert_eq!(collateral.kind, CollateralKind::Other);
    }
}
