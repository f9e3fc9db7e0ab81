//! AI-assisted card ranking.
//!
//! Ranking is the engine's one asynchronous boundary. The collaborator is
//! handed `{id, description, deadline}` tuples for a list and returns
//! `{id, rank, reason}` rows, lower rank meaning higher priority. The engine
//! only re-sorts the list's card sequence by the returned ranks; everything
//! else about the response is advisory.
//!
//! A malformed or partial response can never corrupt the board: ids the
//! response does not cover sort after the covered ones in their original
//! relative order, duplicate ranks keep original relative order, and ids the
//! list does not contain are ignored. A failed or timed-out call leaves the
//! board untouched and raises a user-visible notification; there is no
//! automatic retry.

use crate::error::{BoardError, Result as BoardResult};
use crate::ordering;
use crate::store::{Apply, BoardStore};
use crate::types::{Board, CardId, ListId};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// One card as presented to the ranking collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankItem {
    pub id: CardId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// One row of a ranking response. Lower rank = higher priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCard {
    pub id: CardId,
    pub rank: u32,
    #[serde(default)]
    pub reason: String,
}

/// Ranking call failures
#[derive(Debug, Error)]
pub enum RankError {
    /// The backing service rejected the request or returned an unusable reply
    #[error("ranking backend failed: {message}")]
    Backend { message: String },

    /// No response within the allotted time
    #[error("ranking timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },
}

impl RankError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// The generative ranking collaborator
#[async_trait]
pub trait CardRanker: Send + Sync {
    async fn rank(&self, items: &[RankItem]) -> Result<Vec<RankedCard>, RankError>;
}

/// User-visible notification channel for ranking failures
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str);
}

/// Build the collaborator request payload for a list's cards.
///
/// An unknown list yields an empty payload; callers treat that as nothing
/// to rank.
pub fn rank_items(board: &Board, list: &ListId) -> Vec<RankItem> {
    board
        .cards_in_list(list)
        .into_iter()
        .map(|card| RankItem {
            id: card.id.clone(),
            description: card.description.clone(),
            deadline: card.deadline,
        })
        .collect()
}

/// Re-sort a list's card sequence by a ranking response.
///
/// Stable sort: covered ids ascend by rank, uncovered ids follow in their
/// original relative order. Applying a ranking is a pure transition like any
/// other operation and finishes with order-cache maintenance.
#[derive(Debug, Clone)]
pub struct ApplyRanking {
    /// The list whose cards were ranked
    pub list: ListId,
    /// The collaborator's response rows
    pub ranking: Vec<RankedCard>,
}

impl ApplyRanking {
    pub fn new(list: impl Into<ListId>, ranking: Vec<RankedCard>) -> Self {
        Self {
            list: list.into(),
            ranking,
        }
    }
}

impl Apply for ApplyRanking {
    fn apply(&self, board: &Board) -> BoardResult<Board> {
        let Some(list) = board.list(&self.list) else {
            return Err(BoardError::ListNotFound {
                id: self.list.to_string(),
            });
        };

        // First occurrence wins when the response repeats an id
        let mut rank_of: HashMap<&CardId, u32> = HashMap::new();
        for row in &self.ranking {
            rank_of.entry(&row.id).or_insert(row.rank);
        }

        let mut list = list.clone();
        // Unranked ids share one key, so the stable sort keeps their
        // original relative order, after all ranked ids.
        list.cards
            .sort_by_key(|id| match rank_of.get(id) {
                Some(rank) => (0u8, *rank),
                None => (1, 0),
            });

        let mut next = board.clone();
        next.upsert_list(list);
        ordering::reindex_list(&mut next, &self.list);
        Ok(next)
    }
}

/// Call the ranking collaborator for a list and commit the re-sort.
///
/// The board stays interactive while the call is pending; the response is
/// applied against whatever the state is when it resolves. On failure or
/// timeout the board is left unchanged, the notifier is told, and the error
/// is returned to the caller. A list deleted while the call was in flight
/// makes the commit a silent no-op.
pub async fn rank_list(
    store: &mut BoardStore,
    list: &ListId,
    ranker: &dyn CardRanker,
    notifier: &dyn Notifier,
    deadline: Duration,
) -> Result<(), RankError> {
    let items = rank_items(store.state(), list);
    if let Ok(payload) = serde_json::to_string(&items) {
        tracing::debug!(%payload, "ranking request payload");
    }

    let ranking = match tokio::time::timeout(deadline, ranker.rank(&items)).await {
        Ok(Ok(ranking)) => ranking,
        Ok(Err(err)) => {
            tracing::warn!(error = %err, list = %list, "ranking call failed");
            notifier.notify(&format!("Card ranking failed: {}", err)).await;
            return Err(err);
        }
        Err(_) => {
            let err = RankError::Timeout {
                elapsed_ms: deadline.as_millis() as u64,
            };
            tracing::warn!(error = %err, list = %list, "ranking call timed out");
            notifier.notify(&format!("Card ranking failed: {}", err)).await;
            return Err(err);
        }
    };

    tracing::info!(list = %list, rows = ranking.len(), "applying ranking result");
    // ListNotFound is neutralized by the store; other errors cannot occur here
    let _ = store.dispatch(&ApplyRanking::new(list.clone(), ranking));
    Ok(())
}
