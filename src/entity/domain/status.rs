//! Bounded linear status state machine.

use super::{InvalidInputError, normalize};
use crate::events::{EventBus, EventPayload, names};
use std::cell::RefCell;
use tracing::{trace, warn};

/// Statuses used when none are configured.
pub const DEFAULT_STATUSES: [&str; 3] = ["pending", "in progress", "done"];

/// Validated, ordered list of legal statuses.
///
/// Entries are normalized and duplicate-free, blank entries are dropped, and
/// the list is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusList(Vec<String>);

impl StatusList {
    /// Creates a validated status list.
    ///
    /// Keeps the first occurrence of every normalized value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::EmptyStatusList`] when `statuses` yields
    /// nothing, or [`InvalidInputError::BlankStatusList`] when every entry is
    /// blank after normalization.
    pub fn new<I, S>(statuses: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = statuses
            .into_iter()
            .map(|s| normalize(s.as_ref()))
            .collect();
        if raw.is_empty() {
            return Err(InvalidInputError::EmptyStatusList);
        }

        let mut processed: Vec<String> = Vec::with_capacity(raw.len());
        for status in raw {
            if !status.is_empty() && !processed.contains(&status) {
                processed.push(status);
            }
        }
        if processed.is_empty() {
            return Err(InvalidInputError::BlankStatusList);
        }
        Ok(Self(processed))
    }

    /// Returns the statuses in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the first status, the initial state of a new machine.
    #[must_use]
    pub fn first(&self) -> &str {
        self.0.first().map_or("", String::as_str)
    }

    /// Returns `true` when the normalized `status` is listed.
    #[must_use]
    pub fn contains(&self, status: &str) -> bool {
        let normalized = normalize(status);
        self.0.iter().any(|s| *s == normalized)
    }

    /// Returns the position of `status`, compared verbatim.
    fn position(&self, status: &str) -> Option<usize> {
        self.0.iter().position(|s| s == status)
    }

    /// Returns the status at `index`.
    fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }
}

impl Default for StatusList {
    fn default() -> Self {
        Self(DEFAULT_STATUSES.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl AsRef<[String]> for StatusList {
    fn as_ref(&self) -> &[String] {
        self.as_slice()
    }
}

#[derive(Debug)]
struct StatusState {
    current: String,
    available: StatusList,
}

/// Holds the current status and the ordered list of legal statuses.
///
/// The machine starts at the first listed status. Moves go one step along
/// the list or jump to any listed status. Replacing the list does not touch
/// the current status, which may then be orphaned; see
/// [`Self::has_valid_status`].
#[derive(Debug)]
pub struct StatusMachine {
    state: RefCell<StatusState>,
    events: EventBus,
}

impl Default for StatusMachine {
    fn default() -> Self {
        Self::new(StatusList::default())
    }
}

impl StatusMachine {
    /// Creates a machine at the first status of `available`.
    #[must_use]
    pub fn new(available: StatusList) -> Self {
        Self::build(available, EventBus::new())
    }

    /// Creates a machine whose bus bubbles into `parent`.
    #[must_use]
    pub fn child_of(available: StatusList, parent: &EventBus) -> Self {
        Self::build(available, EventBus::child_of(parent))
    }

    /// Reconstructs a machine from persisted values without validating
    /// `current` against `available`.
    #[must_use]
    pub fn restored(current: &str, available: StatusList, parent: &EventBus) -> Self {
        Self {
            state: RefCell::new(StatusState {
                current: normalize(current),
                available,
            }),
            events: EventBus::child_of(parent),
        }
    }

    fn build(available: StatusList, events: EventBus) -> Self {
        let current = available.first().to_owned();
        Self {
            state: RefCell::new(StatusState { current, available }),
            events,
        }
    }

    /// Returns the bus this machine emits on.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> String {
        self.state.borrow().current.clone()
    }

    /// Returns a copy of the available statuses.
    #[must_use]
    pub fn available_statuses(&self) -> Vec<String> {
        self.state.borrow().available.as_slice().to_vec()
    }

    /// Returns the position of the current status in the available list.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        let state = self.state.borrow();
        state.available.position(&state.current)
    }

    /// Returns `false` when the current status is orphaned.
    #[must_use]
    pub fn has_valid_status(&self) -> bool {
        self.position().is_some()
    }

    /// Moves to `status`.
    ///
    /// Setting the current status again is a no-op without notification.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::UnknownStatus`] naming the rejected value
    /// when the normalized `status` is not available. The status is left
    /// unchanged.
    pub fn set_status(&self, status: &str) -> Result<&Self, InvalidInputError> {
        let normalized = normalize(status);
        {
            let mut state = self.state.borrow_mut();
            if normalized == state.current {
                return Ok(self);
            }
            if state.available.position(&normalized).is_none() {
                return Err(InvalidInputError::UnknownStatus(status.to_owned()));
            }
            trace!(from = %state.current, to = %normalized, "status changed");
            state.current.clone_from(&normalized);
        }
        self.events.emit(
            names::CHANGED_STATUS,
            EventPayload::Status { status: normalized },
        );
        Ok(self)
    }

    /// Replaces the available statuses.
    ///
    /// The current status is kept even when the new list no longer holds it.
    ///
    /// # Errors
    ///
    /// Returns the [`StatusList::new`] errors for empty or blank input; the
    /// machine is left unchanged.
    pub fn set_available_statuses<I, S>(&self, statuses: I) -> Result<&Self, InvalidInputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = StatusList::new(statuses)?;
        Ok(self.replace_available(list))
    }

    /// Replaces the available statuses with an already validated list.
    pub fn replace_available(&self, available: StatusList) -> &Self {
        let available_statuses = available.as_slice().to_vec();
        {
            let mut state = self.state.borrow_mut();
            if available.position(&state.current).is_none() {
                warn!(
                    status = %state.current,
                    "current status is not among the new available statuses"
                );
            }
            state.available = available;
        }
        self.events.emit(
            names::CHANGED_STATUS,
            EventPayload::AvailableStatuses { available_statuses },
        );
        self
    }

    /// Moves to the next status. At the last status this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::OrphanedStatus`] when the current status
    /// is not available.
    pub fn increase_status(&self) -> Result<&Self, InvalidInputError> {
        let index = self.current_index()?;
        let next = index
            .checked_add(1)
            .and_then(|i| self.state.borrow().available.get(i).map(str::to_owned));
        match next {
            Some(status) => self.set_status(&status),
            None => Ok(self),
        }
    }

    /// Moves to the previous status. At the first status this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::OrphanedStatus`] when the current status
    /// is not available.
    pub fn decrease_status(&self) -> Result<&Self, InvalidInputError> {
        let index = self.current_index()?;
        let previous = index
            .checked_sub(1)
            .and_then(|i| self.state.borrow().available.get(i).map(str::to_owned));
        match previous {
            Some(status) => self.set_status(&status),
            None => Ok(self),
        }
    }

    fn current_index(&self) -> Result<usize, InvalidInputError> {
        self.position()
            .ok_or_else(|| InvalidInputError::OrphanedStatus(self.status()))
    }
}
