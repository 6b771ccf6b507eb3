//! Narrow capability interfaces an entity exposes by forwarding to its parts.
//!
//! An implementor only names the part; every other method is provided.

use super::{Content, InvalidInputError, StatusMachine, TagSet};

/// Capability of carrying a [`TagSet`].
pub trait TagsHolder {
    /// Returns the tag set part.
    fn tag_set(&self) -> &TagSet;

    /// Returns a copy of the tags.
    fn tags(&self) -> Vec<String> {
        self.tag_set().tags()
    }

    /// Adds one tag.
    fn add_tag(&self, tag: &str) -> &Self {
        self.tag_set().add_tag(tag);
        self
    }

    /// Adds several tags with one notification.
    fn add_tags<I, S>(&self, tags: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        self.tag_set().add_tags(tags);
        self
    }

    /// Removes one tag.
    fn remove_tag(&self, tag: &str) -> &Self {
        self.tag_set().remove_tag(tag);
        self
    }

    /// Removes several tags with one notification.
    fn remove_tags<I, S>(&self, tags: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        self.tag_set().remove_tags(tags);
        self
    }

    /// See [`TagSet::contains_tag`].
    fn contains_tag(&self, tag: &str) -> bool {
        self.tag_set().contains_tag(tag)
    }

    /// See [`TagSet::contains_all_tags`].
    fn contains_all_tags<I, S>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        self.tag_set().contains_all_tags(tags)
    }
}

/// Capability of carrying a [`StatusMachine`].
pub trait StatusHolder {
    /// Returns the status machine part.
    fn status_machine(&self) -> &StatusMachine;

    /// Returns the current status.
    fn status(&self) -> String {
        self.status_machine().status()
    }

    /// Returns a copy of the available statuses.
    fn available_statuses(&self) -> Vec<String> {
        self.status_machine().available_statuses()
    }

    /// Returns `false` when the current status is orphaned.
    fn has_valid_status(&self) -> bool {
        self.status_machine().has_valid_status()
    }

    /// See [`StatusMachine::set_status`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::UnknownStatus`] for unlisted statuses.
    fn set_status(&self, status: &str) -> Result<&Self, InvalidInputError> {
        self.status_machine().set_status(status)?;
        Ok(self)
    }

    /// See [`StatusMachine::set_available_statuses`].
    ///
    /// # Errors
    ///
    /// Returns an error for empty or blank status lists.
    fn set_available_statuses<I, S>(&self, statuses: I) -> Result<&Self, InvalidInputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        self.status_machine().set_available_statuses(statuses)?;
        Ok(self)
    }

    /// See [`StatusMachine::increase_status`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::OrphanedStatus`] when the current status
    /// is not available.
    fn increase_status(&self) -> Result<&Self, InvalidInputError> {
        self.status_machine().increase_status()?;
        Ok(self)
    }

    /// See [`StatusMachine::decrease_status`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::OrphanedStatus`] when the current status
    /// is not available.
    fn decrease_status(&self) -> Result<&Self, InvalidInputError> {
        self.status_machine().decrease_status()?;
        Ok(self)
    }
}

/// Capability of carrying [`Content`].
pub trait ContentHolder {
    /// Returns the content part.
    fn content(&self) -> &Content;

    /// Returns the title.
    fn title(&self) -> String {
        self.content().title()
    }

    /// Returns the description.
    fn description(&self) -> String {
        self.content().description()
    }

    /// Replaces the title.
    fn set_title(&self, title: impl Into<String>) -> &Self
    where
        Self: Sized,
    {
        self.content().set_title(title);
        self
    }

    /// Replaces the description.
    fn set_description(&self, description: impl Into<String>) -> &Self
    where
        Self: Sized,
    {
        self.content().set_description(description);
        self
    }
}
