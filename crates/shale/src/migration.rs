//! Migration scripts and their execution.
//!
//! A [`Migration`] declares its table edits on a [`Plan`]. The plan renders each finished edit
//! into a [`Batch`] of statements, which a [`Runner`] then applies to a connection.

mod batch;
pub use batch::{Batch, Created};

mod plan;
pub use plan::Plan;

mod runner;
pub use runner::{Direction, Runner};

use crate::Result;

/// A reversible schema change.
pub trait Migration {
    /// Declares the change.
    fn up(&self, plan: &mut Plan<'_>) -> Result<()>;

    /// Declares the reverse of [`up`](Migration::up).
    fn down(&self, plan: &mut Plan<'_>) -> Result<()>;

    /// When true, the batch runs inside a transaction.
    fn use_transaction(&self) -> bool {
        false
    }

    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<M: Migration + ?Sized> Migration for &M {
    fn up(&self, plan: &mut Plan<'_>) -> Result<()> {
        (**self).up(plan)
    }

    fn down(&self, plan: &mut Plan<'_>) -> Result<()> {
        (**self).down(plan)
    }

    fn use_transaction(&self) -> bool {
        (**self).use_transaction()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<M: Migration + ?Sized> Migration for Box<M> {
    fn up(&self, plan: &mut Plan<'_>) -> Result<()> {
        (**self).up(plan)
    }

    fn down(&self, plan: &mut Plan<'_>) -> Result<()> {
        (**self).down(plan)
    }

    fn use_transaction(&self) -> bool {
        (**self).use_transaction()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
