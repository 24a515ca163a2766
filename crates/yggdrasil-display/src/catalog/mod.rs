mod en;
mod fr;

use yggdrasil_core::ErrorKind;

use crate::DisplayMessage;

pub(crate) use en::EN;
pub(crate) use fr::FR;

/// Static message table for one locale
pub(crate) type Catalog = &'static [(ErrorKind, DisplayMessage)];

/// Find the entry for `kind` in `table`
pub(crate) fn lookup(table: &[(ErrorKind, DisplayMessage)], kind: ErrorKind) -> Option<DisplayMessage> {
    table.iter().find(|(k, _)| *k == kind).map(|(_, message)| *message)
}
