//! Board-level types: Board, Swimlane, List

use super::card::Card;
use super::ids::{BoardId, CardId, ListId, SwimlaneId};
use crate::auto_color::auto_color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A list is a column owning an ordered sequence of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    /// Ordered card ids. A card id appears in at most one list, at most once.
    #[serde(default)]
    pub cards: Vec<CardId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl List {
    /// Create a new empty list
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ListId::new(),
            title: title.into(),
            cards: Vec::new(),
            color: None,
        }
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A swimlane provides horizontal grouping, owning an ordered sequence of lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swimlane {
    pub id: SwimlaneId,
    pub name: String,
    /// Ordered list ids. A list id appears in at most one swimlane, at most once.
    #[serde(default)]
    pub lists: Vec<ListId>,
    /// Cached index within the board's swimlane order
    pub order: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Swimlane {
    /// Create a new empty swimlane
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SwimlaneId::new(),
            name: name.into(),
            lists: Vec::new(),
            order: 0,
            color: None,
        }
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// The board: normalized entity maps plus one authoritative swimlane order.
///
/// Cards, lists, and swimlanes live in maps keyed by id. Hierarchy and order
/// are carried by id sequences (list.cards, swimlane.lists, swimlane_order).
/// Mutations replace entities wholesale so a renderer can detect change
/// cheaply; untouched entities are never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub cards: HashMap<CardId, Card>,
    #[serde(default)]
    pub lists: HashMap<ListId, List>,
    #[serde(default)]
    pub swimlanes: HashMap<SwimlaneId, Swimlane>,
    /// Authoritative swimlane ordering. `Swimlane::order` is derived from it.
    #[serde(default)]
    pub swimlane_order: Vec<SwimlaneId>,
}

impl Board {
    /// Create a new empty board with the given display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            name: name.into(),
            cards: HashMap::new(),
            lists: HashMap::new(),
            swimlanes: HashMap::new(),
            swimlane_order: Vec::new(),
        }
    }

    /// The default list template for a fresh swimlane
    pub fn default_lists() -> Vec<List> {
        ["To Do", "Doing", "Done"]
            .into_iter()
            .map(|title| List::new(title).with_color(auto_color(title)))
            .collect()
    }

    /// Look up a card. Absence is a normal outcome, not an error.
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Look up a list
    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.get(id)
    }

    /// Look up a swimlane
    pub fn swimlane(&self, id: &SwimlaneId) -> Option<&Swimlane> {
        self.swimlanes.get(id)
    }

    /// Replace (or insert) a card wholesale
    pub fn upsert_card(&mut self, card: Card) {
        self.cards.insert(card.id.clone(), card);
    }

    /// Replace (or insert) a list wholesale
    pub fn upsert_list(&mut self, list: List) {
        self.lists.insert(list.id.clone(), list);
    }

    /// Replace (or insert) a swimlane wholesale
    pub fn upsert_swimlane(&mut self, swimlane: Swimlane) {
        self.swimlanes.insert(swimlane.id.clone(), swimlane);
    }

    /// The list whose card sequence contains this card id
    pub fn owner_of_card(&self, id: &CardId) -> Option<&ListId> {
        self.swimlane_order
            .iter()
            .filter_map(|s| self.swimlanes.get(s))
            .flat_map(|s| s.lists.iter())
            .find(|l| {
                self.lists
                    .get(*l)
                    .is_some_and(|list| list.cards.contains(id))
            })
    }

    /// The swimlane whose list sequence contains this list id
    pub fn owner_of_list(&self, id: &ListId) -> Option<&SwimlaneId> {
        self.swimlane_order
            .iter()
            .find(|s| self.swimlanes.get(*s).is_some_and(|sw| sw.lists.contains(id)))
    }

    /// Swimlanes in board order
    pub fn swimlanes_in_order(&self) -> impl Iterator<Item = &Swimlane> {
        self.swimlane_order
            .iter()
            .filter_map(|id| self.swimlanes.get(id))
    }

    /// Cards of a list, in sequence order
    pub fn cards_in_list(&self, list: &ListId) -> Vec<&Card> {
        self.lists
            .get(list)
            .map(|l| l.cards.iter().filter_map(|c| self.cards.get(c)).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::new("Sprint 12");
        assert_eq!(board.name, "Sprint 12");
        assert!(board.cards.is_empty());
        assert!(board.swimlane_order.is_empty());
    }

    #[test]
    fn test_default_lists_template() {
        let lists = Board::default_lists();
        assert_eq!(lists.len(), 3);
        assert_eq!(lists[0].title, "To Do");
        assert_eq!(lists[2].title, "Done");
        assert!(lists.iter().all(|l| l.color.is_some()));
    }

    #[test]
    fn test_upsert_replaces_wholesale() {
        let mut board = Board::new("Test");
        let list = List::new("Backlog");
        let id = list.id.clone();
        board.upsert_list(list);

        let mut renamed = board.list(&id).unwrap().clone();
        renamed.title = "Icebox".into();
        board.upsert_list(renamed);

        assert_eq!(board.list(&id).unwrap().title, "Icebox");
        assert_eq!(board.lists.len(), 1);
    }

    #[test]
    fn test_owner_lookups() {
        let mut board = Board::new("Test");
        let card = Card::new("A");
        let card_id = card.id.clone();
        let mut list = List::new("Backlog");
        list.cards.push(card_id.clone());
        let list_id = list.id.clone();
        let mut lane = Swimlane::new("Team");
        lane.lists.push(list_id.clone());
        let lane_id = lane.id.clone();

        board.upsert_card(card);
        board.upsert_list(list);
        board.upsert_swimlane(lane);
        board.swimlane_order.push(lane_id.clone());

        assert_eq!(board.owner_of_card(&card_id), Some(&list_id));
        assert_eq!(board.owner_of_list(&list_id), Some(&lane_id));
        assert_eq!(board.owner_of_card(&CardId::from_string("nope")), None);
    }

    #[test]
    fn test_board_serialization() {
        let mut board = Board::new("Test");
        let lane = Swimlane::new("Team");
        board.swimlane_order.push(lane.id.clone());
        board.upsert_swimlane(lane);

        let json = serde_json::to_string_pretty(&board).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }
}
