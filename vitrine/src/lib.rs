//! # vitrine - Static Catalog & Screen Dispatch
//!
//! `vitrine` is a small framework for applications that present a flat,
//! growing catalog of demonstration screens. It owns the data model and the
//! dispatch mechanics; it never renders a pixel — the host UI layer shows
//! the catalog, captures selections, and presents the screens this crate
//! resolves.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vitrine::{Catalog, Dispatcher, Entry, FactoryMap, Group, NavSession};
//!
//! // Declare the catalog once; it is frozen after build().
//! let catalog = Catalog::builder()
//!     .group(Group::new("2025")
//!         .entry(Entry::new("sheet", "BottomSheet", "Modal sheet variants"))
//!         .entry(Entry::new("swipe", "SwipeToReveal", "Swipe gestures")))
//!     .build();
//!
//! // Register one factory per key.
//! let mut screens = FactoryMap::builder();
//! screens.register("sheet", || Screen::sheet())?;
//! screens.register("swipe", || Screen::swipe())?;
//! let dispatcher = Dispatcher::new(screens.build());
//!
//! // Startup assertion: every catalog key must be covered.
//! dispatcher.verify(&catalog)?;
//!
//! // Selection events flow through a session.
//! let mut session = NavSession::new();
//! session.select(&dispatcher, &catalog.entries().next().unwrap(), &mut host)?;
//! ```
//!
//! ## Architecture
//!
//! - **Catalog** ([`catalog`]): append-only, build-then-freeze registry of
//!   [`Entry`] descriptors partitioned into [`Group`]s. Ordering is
//!   deterministic and semantically meaningful.
//! - **Dispatch** ([`dispatch`]): a [`Dispatcher`] over a swappable table
//!   backend mapping discriminator keys to screen factories, with atomic
//!   resolve-then-handoff semantics and a completeness check.
//! - **Session** ([`session`]): the per-session catalog/example state
//!   machine.
//!
//! Everything is synchronous and immutable after startup; the only side
//! effect in the whole crate is the single fire-and-forget handoff to the
//! host's [`NavHost`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod catalog;
pub mod dispatch;
pub mod session;
pub mod testing;

// Core traits and errors
pub use vitrine_core::{
    BuildError,
    CoverageError,
    DispatchError,
    Dispatched,
    LaunchMode,
    NavHost,
    ScreenKey,
    ScreenSource,
    VitrineError,
};

// Catalog
pub use catalog::{Catalog, CatalogBuilder, Category, Entry, Group};

// Dispatch
pub use dispatch::{Dispatcher, FactoryMap, FactoryMapBuilder, ScreenFactory, StaticTable};

#[cfg(feature = "inventory")]
pub use dispatch::{ScreenRegistration, collect_screens};
#[cfg(feature = "phf")]
pub use dispatch::PhfTable;

// Session
pub use session::{NavSession, NavState};

#[cfg(feature = "inventory")]
pub use inventory;
