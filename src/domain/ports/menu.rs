//! Menu Port
//!
//! The contract between the tree browser and whatever shows choices to the
//! user. The browser hands over plain labels and gets back an index; it
//! never touches the terminal itself.

use std::fmt;

use crate::domain::value_objects::DistinguishedName;

/// Terminal result of one menu interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// The option at this index was confirmed
    Selected(usize),
    /// The user backed out (Escape), or there was nothing to choose
    Cancelled,
    /// The user pressed the quit key ("Quitter")
    Quit,
}

/// Diagnostics the browser reports to the user while navigating.
///
/// These are a side channel; they never change the browsing outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserNotice {
    /// A container has no sub-OU and no user
    NothingHere { container: String },
    /// Listing one level failed; the level is shown as empty
    QueryFailed {
        path: DistinguishedName,
        message: String,
    },
    /// The selected record disappeared before it could be re-read
    RecordNotFound { identifier: String },
    /// Re-reading the selected record failed for another reason
    RecordUnavailable { identifier: String, message: String },
    /// Navigation was stopped by the step bound
    StepLimitReached { limit: usize },
}

impl BrowserNotice {
    /// True for notices that describe a failure rather than an empty level
    pub fn is_error(&self) -> bool {
        !matches!(self, BrowserNotice::NothingHere { .. })
    }
}

impl fmt::Display for BrowserNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserNotice::NothingHere { container } => {
                write!(f, "Rien ici : aucune OU ni aucun utilisateur dans « {} »", container)
            }
            BrowserNotice::QueryFailed { path, message } => {
                write!(f, "Impossible d'interroger {} : {}", path, message)
            }
            BrowserNotice::RecordNotFound { identifier } => {
                write!(f, "Utilisateur introuvable : {}", identifier)
            }
            BrowserNotice::RecordUnavailable {
                identifier,
                message,
            } => write!(f, "Impossible de relire {} : {}", identifier, message),
            BrowserNotice::StepLimitReached { limit } => {
                write!(f, "Navigation interrompue après {} étapes", limit)
            }
        }
    }
}

/// A blocking single-choice menu.
pub trait Menu {
    /// Show `options` under `title` and wait for a terminal choice.
    ///
    /// An empty `options` slice resolves to `MenuChoice::Cancelled`
    /// without waiting for input.
    fn select(&mut self, title: &str, options: &[String]) -> std::io::Result<MenuChoice>;

    /// Surface a diagnostic to the user.
    fn report(&mut self, notice: &BrowserNotice);
}

impl<M: Menu + ?Sized> Menu for &mut M {
    fn select(&mut self, title: &str, options: &[String]) -> std::io::Result<MenuChoice> {
        (**self).select(title, options)
    }

    fn report(&mut self, notice: &BrowserNotice) {
        (**self).report(notice)
    }
}
