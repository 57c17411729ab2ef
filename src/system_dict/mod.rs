// System dictionary lookups used for candidate annotations

mod kind;
mod lookup;

pub use kind::{SystemDictKind, UnknownSystemDictKind};
pub use lookup::{find_by_identifier, SystemDict};
