//! Distributed screen registration via `inventory`.
//!
//! Instead of one central builder call, each screen module can submit its
//! own registration and the map is gathered once at startup. The host crate
//! declares the collection for its concrete screen type:
//!
//! ```rust,ignore
//! inventory::collect!(ScreenRegistration<MyScreen>);
//!
//! inventory::submit! {
//!     ScreenRegistration::new("sheet", sheet_screen)
//! }
//!
//! let map = collect_screens::<MyScreen>()?;
//! ```
//!
//! Duplicate submissions surface as [`BuildError::DuplicateKey`] when
//! gathering, keeping dispatch unambiguous.

use vitrine_core::BuildError;

use crate::dispatch::FactoryMap;

/// A screen registration submitted from anywhere in the binary.
pub struct ScreenRegistration<S: 'static> {
    /// The discriminator key this registration covers.
    pub key: &'static str,
    /// Factory constructing the screen.
    pub factory: fn() -> S,
}

impl<S: 'static> ScreenRegistration<S> {
    /// Create a registration entry for `inventory::submit!`.
    pub const fn new(key: &'static str, factory: fn() -> S) -> Self {
        Self { key, factory }
    }
}

/// Gather every submitted registration into a frozen [`FactoryMap`].
///
/// Call once at startup; the result is the same immutable table a central
/// builder would have produced.
pub fn collect_screens<S>() -> Result<FactoryMap<&'static str, S>, BuildError>
where
    S: 'static,
    ScreenRegistration<S>: inventory::Collect,
{
    let mut builder = FactoryMap::builder();
    for registration in inventory::iter::<ScreenRegistration<S>> {
        builder.register(registration.key, registration.factory)?;
    }
    Ok(builder.build())
}
