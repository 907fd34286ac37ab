//! Key trait for screen discriminators.

use std::fmt::Debug;
use std::hash::Hash;

/// A marker trait for discriminator keys.
///
/// The key is the join point between the catalog and the dispatcher: every
/// entry declares one, and every table backend maps them to screen factories.
/// Hosts typically use an enum of screen kinds or `&'static str`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Demo {
///     BottomSheet,
///     SwipeToReveal,
/// }
/// // Demo is a ScreenKey via the blanket impl.
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid ScreenKey",
    label = "must be `Clone + Eq + Hash + Debug + Send + Sync + 'static`",
    note = "Discriminator keys must be cheap to clone, hashable, and thread-safe."
)]
pub trait ScreenKey: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> ScreenKey for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}
