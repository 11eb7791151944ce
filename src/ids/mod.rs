//! Numeric ids of unit types, techs and game flags, matching the bridge's numbering.
#![allow(missing_docs)]

mod tech_typeid;
mod unit_typeid;

pub use tech_typeid::TechTypeId;
pub use unit_typeid::UnitTypeId;

mod impls;

/// Game flags that can be enabled through the bridge.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, FromPrimitive, ToPrimitive, Copy, Clone, PartialEq, Eq, Hash, FromStr)]
pub enum Flag {
	/// Full information about all units, regardless of fog of war.
	CompleteMapInformation = 0,
	/// Accept mouse and keyboard input from the local user.
	UserInput = 1,
}
