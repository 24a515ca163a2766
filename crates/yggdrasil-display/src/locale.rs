use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

use crate::catalog::{self, Catalog};

/// Language of the display catalogs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// French
    Fr,
}

impl Locale {
    pub(crate) fn catalog(self) -> Catalog {
        match self {
            Self::En => catalog::EN,
            Self::Fr => catalog::FR,
        }
    }
}
