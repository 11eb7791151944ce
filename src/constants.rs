use crate::ids::{TechTypeId, UnitTypeId};
use std::collections::HashMap;

/// Size of a build tile in pixels.
pub const TILE_SIZE: i32 = 32;

/// Unit types never returned by unit queries, whatever the filter says.
pub const SPECIAL_UNITS: [UnitTypeId; 1] = [UnitTypeId::SpecialMapRevealer];

/// Local speed used when speedup is enabled (as fast as the engine can go).
pub const FASTEST_LOCAL_SPEED: i32 = 0;
/// Local speed used when speedup is disabled.
pub const NORMAL_LOCAL_SPEED: i32 = 167;
/// Frame skip used when speedup is disabled.
pub const NORMAL_FRAME_SKIP: i32 = 24;

pub const WORKER_IDS: [UnitTypeId; 3] = [
	UnitTypeId::TerranSCV,
	UnitTypeId::ZergDrone,
	UnitTypeId::ProtossProbe,
];
pub const TOWNHALL_IDS: [UnitTypeId; 5] = [
	UnitTypeId::TerranCommandCenter,
	UnitTypeId::ZergHatchery,
	UnitTypeId::ZergLair,
	UnitTypeId::ZergHive,
	UnitTypeId::ProtossNexus,
];

lazy_static! {
	/// Unit types able to use each tech.
	pub static ref TECH_USERS: HashMap<TechTypeId, Vec<UnitTypeId>> = hashmap! {
		TechTypeId::StimPacks => vec![UnitTypeId::TerranMarine, UnitTypeId::TerranFirebat],
		TechTypeId::Lockdown => vec![UnitTypeId::TerranGhost],
		TechTypeId::EMPShockwave => vec![UnitTypeId::TerranScienceVessel],
		TechTypeId::SpiderMines => vec![UnitTypeId::TerranVulture],
		TechTypeId::TankSiegeMode => vec![
			UnitTypeId::TerranSiegeTankTankMode,
			UnitTypeId::TerranSiegeTankSiegeMode,
		],
		TechTypeId::DefensiveMatrix => vec![UnitTypeId::TerranScienceVessel],
		TechTypeId::Irradiate => vec![UnitTypeId::TerranScienceVessel],
		TechTypeId::YamatoGun => vec![UnitTypeId::TerranBattlecruiser],
		TechTypeId::CloakingField => vec![UnitTypeId::TerranWraith],
		TechTypeId::PersonnelCloaking => vec![UnitTypeId::TerranGhost],
		TechTypeId::Healing => vec![UnitTypeId::TerranMedic],
		TechTypeId::Restoration => vec![UnitTypeId::TerranMedic],
		TechTypeId::OpticalFlare => vec![UnitTypeId::TerranMedic],
		TechTypeId::Burrowing => vec![
			UnitTypeId::ZergDrone,
			UnitTypeId::ZergZergling,
			UnitTypeId::ZergHydralisk,
			UnitTypeId::ZergDefiler,
			UnitTypeId::ZergInfestedTerran,
			UnitTypeId::ZergLurker,
		],
		TechTypeId::SpawnBroodlings => vec![UnitTypeId::ZergQueen],
		TechTypeId::Ensnare => vec![UnitTypeId::ZergQueen],
		TechTypeId::Parasite => vec![UnitTypeId::ZergQueen],
		TechTypeId::DarkSwarm => vec![UnitTypeId::ZergDefiler],
		TechTypeId::Plague => vec![UnitTypeId::ZergDefiler],
		TechTypeId::Consume => vec![UnitTypeId::ZergDefiler],
		TechTypeId::LurkerAspect => vec![UnitTypeId::ZergHydralisk],
		TechTypeId::PsionicStorm => vec![UnitTypeId::ProtossHighTemplar],
		TechTypeId::Hallucination => vec![UnitTypeId::ProtossHighTemplar],
		TechTypeId::ArchonWarp => vec![UnitTypeId::ProtossHighTemplar],
		TechTypeId::Recall => vec![UnitTypeId::ProtossArbiter],
		TechTypeId::StasisField => vec![UnitTypeId::ProtossArbiter],
		TechTypeId::DisruptionWeb => vec![UnitTypeId::ProtossCorsair],
		TechTypeId::MindControl => vec![UnitTypeId::ProtossDarkArchon],
		TechTypeId::Feedback => vec![UnitTypeId::ProtossDarkArchon],
		TechTypeId::Maelstrom => vec![UnitTypeId::ProtossDarkArchon],
		TechTypeId::DarkArchonMeld => vec![UnitTypeId::ProtossDarkTemplar],
	};
}
