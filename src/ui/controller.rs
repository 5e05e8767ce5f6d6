//! MVC Controller - the recurrence state store
//!
//! # Responsibilities
//!
//! - Own the current [`RecurringDate`] selection and the panel open flag
//! - Merge partial updates ([`DatePatch`]) into the selection
//! - Notify the external consumer and subscribed views after every update
//!
//! # Architecture
//!
//! The Controller is the single source of truth for the editing session.
//! It holds no GTK4 widgets; views hold an `Rc<Controller>` handed to them
//! at construction and subscribe for refresh. This keeps the state logic
//! separate from presentation and testable without a display server.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::types::{DatePatch, RecurringDate};

/// Change-notification callback, invoked with the post-merge selection.
pub type ChangeCallback = Rc<dyn Fn(&RecurringDate)>;

/// Constructor-time configuration for the picker.
///
/// Both options are optional: the seed selection defaults to today with no
/// recurrence, and the change callback defaults to a no-op.
#[derive(Default)]
pub struct PickerConfig {
    /// Seed selection for the editing session
    pub initial_value: Option<RecurringDate>,
    /// External consumer notified after every successful mutation
    pub on_change: Option<Box<dyn Fn(&RecurringDate)>>,
}

/// State store coordinating the recurrence selection and its views
///
/// All mutation goes through [`Controller::update`]; the open flag is pure
/// UI state with no effect on the selection. Interior mutability keeps the
/// API `&self` for sharing through `Rc` on the single GTK main thread.
pub struct Controller {
    /// Current selection (shared mutable state of the editing session)
    selection: RefCell<RecurringDate>,
    /// Panel open/closed flag
    open: Cell<bool>,
    /// External consumer registered at construction
    on_change: Option<Box<dyn Fn(&RecurringDate)>>,
    /// Subscribed views, notified after the external consumer
    subscribers: RefCell<Vec<ChangeCallback>>,
}

impl Controller {
    /// Creates a Controller with the default seed selection and no
    /// external callback.
    pub fn new() -> Self {
        Self::with_config(PickerConfig::default())
    }

    /// Creates a Controller from constructor-time configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use recurring_date_picker::ui::{Controller, PickerConfig};
    /// use recurring_date_picker::core::describe;
    ///
    /// let controller = Controller::with_config(PickerConfig {
    ///     initial_value: None,
    ///     on_change: Some(Box::new(|selection| {
    ///         println!("{}", describe(selection));
    ///     })),
    /// });
    /// assert!(controller.selection().never_ends);
    /// ```
    pub fn with_config(config: PickerConfig) -> Self {
        Self {
            selection: RefCell::new(config.initial_value.unwrap_or_default()),
            open: Cell::new(false),
            on_change: config.on_change,
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Returns a clone of the current selection.
    pub fn selection(&self) -> RecurringDate {
        self.selection.borrow().clone()
    }

    /// Shallow-merges `patch` into the current selection and notifies.
    ///
    /// The merged value replaces the stored one, then the external
    /// `on_change` callback and every subscriber run synchronously, exactly
    /// once per call. Notification is never skipped, batched, or
    /// deduplicated: a patch that leaves the value unchanged still fires.
    ///
    /// No validation happens here; the editor is responsible for supplying
    /// consistent patches.
    pub fn update(&self, patch: &DatePatch) {
        let merged = self.selection.borrow().merged(patch);
        *self.selection.borrow_mut() = merged.clone();

        // Borrows are released before callbacks run, so a callback may
        // query or update the store again.
        if let Some(on_change) = &self.on_change {
            on_change(&merged);
        }
        let subscribers: Vec<ChangeCallback> = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(&merged);
        }
    }

    /// Subscribes a view for refresh after every update.
    ///
    /// Subscribers run in registration order, after the external callback.
    pub fn connect_changed(&self, subscriber: impl Fn(&RecurringDate) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(subscriber));
    }

    /// Returns whether the editor panel is open.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Sets the panel open/closed flag.
    ///
    /// Pure UI state: no effect on the selection, no change notification.
    pub fn set_open(&self, open: bool) {
        self.open.set(open);
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
