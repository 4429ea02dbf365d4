//! Toast notification model and lifecycle.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::collections::HashMap;

use uuid::Uuid;

/// Classes applied to every toast regardless of kind.
pub const TOAST_BASE_CLASSES: &str = "pointer-events-auto w-full max-w-sm rounded-2xl border shadow-lg backdrop-blur \
     grid grid-cols-[1.25rem_1fr_auto] gap-2 items-start px-4 py-3 transition ease-out duration-150";
/// Classes present while the toast is off-screen (before entry, during exit).
pub const TOAST_HIDDEN_CLASSES: [&str; 2] = ["opacity-0", "translate-y-2"];
/// Classes present while the toast is shown.
pub const TOAST_SHOWN_CLASSES: [&str; 2] = ["opacity-100", "translate-y-0"];
pub const DISMISS_LABEL: &str = "Dismiss notification";
/// Removal deadline for a closing toast whose `transitionend` never arrives.
pub const EXIT_FALLBACK_MS: u32 = 400;
/// Server-rendered flash messages, turned into toasts on install.
pub const FLASH_SELECTOR: &str = "[data-flash]";

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    /// Parse a kind name; anything unrecognized is `Info`.
    ///
    /// `danger` is the server's flash category for errors.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => ToastKind::Success,
            "error" | "danger" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✔",
            ToastKind::Error => "✖",
            ToastKind::Info => "ℹ",
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            ToastKind::Success => "bg-emerald-700/95 border-emerald-500 text-white",
            ToastKind::Error => "bg-red-700/95 border-red-500 text-white",
            ToastKind::Info => "bg-neutral-900/95 border-neutral-700 text-white",
        }
    }
}

/// When a toast removes itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastTimeout {
    AfterMs(u32),
    Persistent,
}

impl ToastTimeout {
    /// `ms <= 0` means the toast stays until dismissed.
    pub fn from_ms(ms: i64) -> Self {
        if ms <= 0 {
            ToastTimeout::Persistent
        } else {
            ToastTimeout::AfterMs(u32::try_from(ms).unwrap_or(u32::MAX))
        }
    }
}

/// A notification to show. `timeout: None` uses the configured default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
    pub timeout: Option<ToastTimeout>,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), title: title.into(), message: message.into(), kind, timeout: None }
    }

    #[must_use]
    pub fn with_timeout_ms(mut self, ms: i64) -> Self {
        self.timeout = Some(ToastTimeout::from_ms(ms));
        self
    }

    pub fn resolved_timeout(&self, default_ms: i64) -> ToastTimeout {
        self.timeout.unwrap_or_else(|| ToastTimeout::from_ms(default_ms))
    }

    /// Title paragraph text, `None` when the title is empty.
    pub fn title_text(&self) -> Option<&str> {
        Some(self.title.as_str()).filter(|s| !s.is_empty())
    }

    pub fn message_text(&self) -> Option<&str> {
        Some(self.message.as_str()).filter(|s| !s.is_empty())
    }

    /// Toast for a server-rendered flash message (`data-flash` element).
    ///
    /// `kind` is the flash category; `timeout_ms` comes from
    /// `data-timeout-ms` and keeps the configured default when absent or junk.
    pub fn from_flash(kind: &str, title: &str, message: &str, timeout_ms: Option<&str>) -> Self {
        let toast = Self::new(ToastKind::parse(kind), title.trim(), message.trim());
        match timeout_ms.and_then(|v| v.trim().parse::<i64>().ok()) {
            Some(ms) => toast.with_timeout_ms(ms),
            None => toast,
        }
    }

    pub fn network_error() -> Self {
        Self::new(ToastKind::Error, "Network error", "Could not complete the action. Please try again.")
    }

    pub fn added_to_cart(product_name: &str) -> Self {
        Self::new(ToastKind::Success, "Added to cart", product_name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Closing,
    Removed,
}

/// How a close request removes the element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseStrategy {
    /// Remove right away: reduced motion, or closed before the entry frame.
    Immediate,
    /// Remove when the exit transition ends.
    AfterTransition,
}

/// Tracks one toast from insertion to removal; close is idempotent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastLifecycle {
    phase: ToastPhase,
}

impl Default for ToastLifecycle {
    fn default() -> Self {
        Self { phase: ToastPhase::Entering }
    }
}

impl ToastLifecycle {
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Entry animation frame ran. Ignored once closing has begun.
    pub fn shown(&mut self) -> bool {
        if self.phase == ToastPhase::Entering {
            self.phase = ToastPhase::Shown;
            true
        } else {
            false
        }
    }

    /// Start closing. Returns `None` when a close is already under way.
    ///
    /// Only a shown toast animates out: an entering toast still carries the
    /// hidden classes, so no exit transition would ever fire for it.
    pub fn begin_close(&mut self, reduced_motion: bool) -> Option<CloseStrategy> {
        match self.phase {
            ToastPhase::Closing | ToastPhase::Removed => None,
            ToastPhase::Shown if !reduced_motion => {
                self.phase = ToastPhase::Closing;
                Some(CloseStrategy::AfterTransition)
            }
            ToastPhase::Entering | ToastPhase::Shown => {
                self.phase = ToastPhase::Removed;
                Some(CloseStrategy::Immediate)
            }
        }
    }

    /// Mark the element removed. Returns `false` if it already was, so the
    /// transition end and the fallback timer remove it only once.
    pub fn removed(&mut self) -> bool {
        let first = self.phase != ToastPhase::Removed;
        self.phase = ToastPhase::Removed;
        first
    }
}

/// Owner of every toast on screen, keyed by id.
///
/// Callbacks attached to a toast must hold only weak references to the
/// entry; releasing the entry is what frees it.
#[derive(Debug)]
pub struct ToastRegistry<T> {
    live: HashMap<Uuid, T>,
}

impl<T> Default for ToastRegistry<T> {
    fn default() -> Self {
        Self { live: HashMap::new() }
    }
}

impl<T> ToastRegistry<T> {
    pub fn insert(&mut self, id: Uuid, entry: T) {
        self.live.insert(id, entry);
    }

    /// Hand back ownership of `id`'s entry; `None` once already released.
    pub fn release(&mut self, id: &Uuid) -> Option<T> {
        self.live.remove(id)
    }
}
