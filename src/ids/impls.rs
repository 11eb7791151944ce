use super::{TechTypeId, UnitTypeId};
use crate::{
	constants::{SPECIAL_UNITS, TECH_USERS, TOWNHALL_IDS, WORKER_IDS},
	player::Race,
};
use num_traits::{FromPrimitive, ToPrimitive};

impl UnitTypeId {
	/// Converts a raw id reported by the bridge, falling back to `Unknown`.
	#[inline]
	pub fn from_raw(id: i32) -> Self {
		Self::from_i32(id).unwrap_or(UnitTypeId::Unknown)
	}
	#[inline]
	pub fn raw(self) -> i32 {
		self.to_i32().unwrap_or(UnitTypeId::Unknown as i32)
	}
	pub fn race(self) -> Race {
		use UnitTypeId::*;
		match self {
			TerranMarine | TerranGhost | TerranVulture | TerranGoliath | TerranSiegeTankTankMode
			| TerranSCV | TerranWraith | TerranScienceVessel | TerranDropship | TerranBattlecruiser
			| TerranVultureSpiderMine | TerranNuclearMissile | TerranCivilian
			| TerranSiegeTankSiegeMode | TerranFirebat | TerranMedic | TerranValkyrie
			| TerranCommandCenter | TerranComsatStation | TerranNuclearSilo | TerranSupplyDepot
			| TerranRefinery | TerranBarracks | TerranAcademy | TerranFactory | TerranStarport
			| TerranControlTower | TerranScienceFacility | TerranCovertOps | TerranPhysicsLab
			| TerranMachineShop | TerranEngineeringBay | TerranArmory | TerranMissileTurret
			| TerranBunker => Race::Terran,
			ZergLarva | ZergEgg | ZergZergling | ZergHydralisk | ZergUltralisk | ZergBroodling
			| ZergDrone | ZergOverlord | ZergMutalisk | ZergGuardian | ZergQueen | ZergDefiler
			| ZergScourge | ZergInfestedTerran | ZergCocoon | ZergDevourer | ZergLurkerEgg
			| ZergLurker | ZergInfestedCommandCenter | ZergHatchery | ZergLair | ZergHive
			| ZergNydusCanal | ZergHydraliskDen | ZergDefilerMound | ZergGreaterSpire
			| ZergQueensNest | ZergEvolutionChamber | ZergUltraliskCavern | ZergSpire
			| ZergSpawningPool | ZergCreepColony | ZergSporeColony | ZergSunkenColony
			| ZergExtractor => Race::Zerg,
			ProtossCorsair | ProtossDarkTemplar | ProtossDarkArchon | ProtossProbe | ProtossZealot
			| ProtossDragoon | ProtossHighTemplar | ProtossArchon | ProtossShuttle | ProtossScout
			| ProtossArbiter | ProtossCarrier | ProtossInterceptor | ProtossReaver
			| ProtossObserver | ProtossScarab | ProtossNexus | ProtossRoboticsFacility
			| ProtossPylon | ProtossAssimilator | ProtossObservatory | ProtossGateway
			| ProtossPhotonCannon | ProtossCitadelOfAdun | ProtossCyberneticsCore
			| ProtossTemplarArchives | ProtossForge | ProtossStargate | ProtossFleetBeacon
			| ProtossArbiterTribunal | ProtossRoboticsSupportBay
			| ProtossShieldBattery => Race::Protoss,
			_ => Race::None,
		}
	}
	#[inline]
	pub fn is_worker(self) -> bool {
		WORKER_IDS.contains(&self)
	}
	#[inline]
	pub fn is_townhall(self) -> bool {
		TOWNHALL_IDS.contains(&self)
	}
	/// Buildings occupy the id range from the command center to the shield battery.
	#[inline]
	pub fn is_building(self) -> bool {
		(UnitTypeId::TerranCommandCenter as i32..=UnitTypeId::ProtossShieldBattery as i32)
			.contains(&(self as i32))
	}
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_resource(self) -> bool {
		matches!(
			self,
			UnitTypeId::ResourceMineralField
			| UnitTypeId::ResourceMineralFieldType2
			| UnitTypeId::ResourceMineralFieldType3
			| UnitTypeId::ResourceVespeneGeyser
		)
	}
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_critter(self) -> bool {
		matches!(
			self,
			UnitTypeId::CritterRhynadon
			| UnitTypeId::CritterBengalaas
			| UnitTypeId::CritterScantid
			| UnitTypeId::CritterKakaru
			| UnitTypeId::CritterRagnasaur
			| UnitTypeId::CritterUrsadon
		)
	}
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_spell(self) -> bool {
		matches!(
			self,
			UnitTypeId::SpellScannerSweep | UnitTypeId::SpellDisruptionWeb | UnitTypeId::SpellDarkSwarm
		)
	}
	/// Utility units that are always left out of unit queries.
	#[inline]
	pub fn is_special(self) -> bool {
		SPECIAL_UNITS.contains(&self)
	}
	pub fn can_use(self, tech: TechTypeId) -> bool {
		tech.users().contains(&self)
	}
}

impl TechTypeId {
	#[inline]
	pub fn from_raw(id: i32) -> Self {
		Self::from_i32(id).unwrap_or(TechTypeId::Unknown)
	}
	/// Unit types which can use this tech.
	pub fn users(self) -> &'static [UnitTypeId] {
		TECH_USERS.get(&self).map(Vec::as_slice).unwrap_or(&[])
	}
}
