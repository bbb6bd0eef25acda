//! Default key-mapping table, as data.
//!
//! The host owns mapping registration; this module only names the commands
//! and the default bindings the original plugin ships, so hosts reproduce
//! them without re-encoding the table.

use crate::catalog::Catalog;
use crate::config::MotionConfig;

/// The `<Plug>`-style prefix every motion command lives under.
pub const PLUG_PREFIX: &str = "<Plug>(easymotion-";

/// The default user-facing prefix for the bound motions.
pub const DEFAULT_PREFIX: &str = "<leader><leader>";

bitflags::bitflags! {
    /// Modal-editing maps a binding participates in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MappingModes: u8 {
        const NORMAL     = 0b001;
        const VISUAL     = 0b010;
        const OP_PENDING = 0b100;
        /// Normal, visual and operator-pending: the modes every jump motion
        /// is reachable from.
        const NVO = Self::NORMAL.bits() | Self::VISUAL.bits() | Self::OP_PENDING.bits();
    }
}

/// One key binding the host should register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub modes: MappingModes,
    /// The key sequence the user types.
    pub keys: String,
    /// The motion command it invokes.
    pub command: String,
}

/// `<Plug>(easymotion-ID)` for a motion id.
pub fn plug_command(id: &str) -> String {
    format!("{PLUG_PREFIX}{id})")
}

/// The prefixed default bindings for the default-mapped motion ids.
///
/// Empty when mapping emission is disabled in the configuration. Ids absent
/// from the catalog are skipped; the catalog is statically populated, so a
/// skip would indicate a table mismatch caught by the catalog tests.
pub fn default_mappings(catalog: &Catalog, config: &MotionConfig) -> Vec<Mapping> {
    if !config.do_mapping {
        return Vec::new();
    }
    Catalog::default_mapped_ids()
        .iter()
        .filter(|id| catalog.resolve(id).is_ok())
        .map(|id| Mapping {
            modes: MappingModes::NVO,
            keys: format!("{DEFAULT_PREFIX}{id}"),
            command: plug_command(id),
        })
        .collect()
}
