//! Alert dialog for telling the user why their request could not be completed.
//!
//! Alerts are returned as HTML fragments for htmx to swap into the alert
//! container at the bottom of every page. An alert covers the page until the
//! user dismisses it.

use maud::{Markup, html};

use crate::html::BUTTON_PRIMARY_STYLE;

/// An error message with optional details on how to fix the problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub details: String,
}

impl Alert {
    /// Create a new error alert.
    pub fn error(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn into_html(self) -> Markup {
        html! {
            div
                role="alertdialog"
                aria-modal="true"
                aria-labelledby="alert-message"
                class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50 px-4"
            {
                div
                    class="w-full max-w-md p-4 space-y-3 rounded-lg shadow-lg
                        text-red-800 bg-red-50 border border-red-300
                        dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
                {
                    p id="alert-message" class="font-semibold" { (self.message) }

                    @if !self.details.is_empty() {
                        p class="text-sm" { (self.details) }
                    }

                    button
                        type="button"
                        autofocus
                        onclick="this.closest('[role=alertdialog]').remove()"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        "OK"
                    }
                }
            }
        }
    }
}
