//! Rule evaluation for archgate.
//!
//! Rules pair a [`selector::Selector`] (which types to look at) with an
//! [`assertion::Assertion`] (what must hold for each of them):
//! - [`predicate`]: per-type tests shared by selectors and assertions
//! - [`builder`]: fluent `Types::in_catalog(..).that()..should()..` surface
//! - [`definition`]: declarative JSON rule files
//! - [`engine`]: evaluates rule sets into a [`types::Report`]
//! - [`inspect`]: catalog and dependency listings

pub mod types;
pub mod predicate;
pub mod selector;
pub mod assertion;
pub mod rule;
pub mod builder;
pub mod definition;
pub mod engine;
pub mod report;
pub mod inspect;
