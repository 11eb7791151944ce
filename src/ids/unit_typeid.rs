#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, FromPrimitive, ToPrimitive, Copy, Clone, PartialEq, Eq, Hash, FromStr)]
#[enum_from_str(use_primitives)]
pub enum UnitTypeId {
	TerranMarine = 0,
	TerranGhost = 1,
	TerranVulture = 2,
	TerranGoliath = 3,
	TerranSiegeTankTankMode = 5,
	TerranSCV = 7,
	TerranWraith = 8,
	TerranScienceVessel = 9,
	TerranDropship = 11,
	TerranBattlecruiser = 12,
	TerranVultureSpiderMine = 13,
	TerranNuclearMissile = 14,
	TerranCivilian = 15,
	TerranSiegeTankSiegeMode = 30,
	TerranFirebat = 32,
	SpellScannerSweep = 33,
	TerranMedic = 34,
	ZergLarva = 35,
	ZergEgg = 36,
	ZergZergling = 37,
	ZergHydralisk = 38,
	ZergUltralisk = 39,
	ZergBroodling = 40,
	ZergDrone = 41,
	ZergOverlord = 42,
	ZergMutalisk = 43,
	ZergGuardian = 44,
	ZergQueen = 45,
	ZergDefiler = 46,
	ZergScourge = 47,
	ZergInfestedTerran = 50,
	TerranValkyrie = 58,
	ZergCocoon = 59,
	ProtossCorsair = 60,
	ProtossDarkTemplar = 61,
	ZergDevourer = 62,
	ProtossDarkArchon = 63,
	ProtossProbe = 64,
	ProtossZealot = 65,
	ProtossDragoon = 66,
	ProtossHighTemplar = 67,
	ProtossArchon = 68,
	ProtossShuttle = 69,
	ProtossScout = 70,
	ProtossArbiter = 71,
	ProtossCarrier = 72,
	ProtossInterceptor = 73,
	ProtossReaver = 83,
	ProtossObserver = 84,
	ProtossScarab = 85,
	CritterRhynadon = 89,
	CritterBengalaas = 90,
	CritterScantid = 93,
	CritterKakaru = 94,
	CritterRagnasaur = 95,
	CritterUrsadon = 96,
	ZergLurkerEgg = 97,
	SpecialMapRevealer = 101,
	ZergLurker = 103,
	SpellDisruptionWeb = 105,
	TerranCommandCenter = 106,
	TerranComsatStation = 107,
	TerranNuclearSilo = 108,
	TerranSupplyDepot = 109,
	TerranRefinery = 110,
	TerranBarracks = 111,
	TerranAcademy = 112,
	TerranFactory = 113,
	TerranStarport = 114,
	TerranControlTower = 115,
	TerranScienceFacility = 116,
	TerranCovertOps = 117,
	TerranPhysicsLab = 118,
	TerranMachineShop = 120,
	TerranEngineeringBay = 122,
	TerranArmory = 123,
	TerranMissileTurret = 124,
	TerranBunker = 125,
	ZergInfestedCommandCenter = 130,
	ZergHatchery = 131,
	ZergLair = 132,
	ZergHive = 133,
	ZergNydusCanal = 134,
	ZergHydraliskDen = 135,
	ZergDefilerMound = 136,
	ZergGreaterSpire = 137,
	ZergQueensNest = 138,
	ZergEvolutionChamber = 139,
	ZergUltraliskCavern = 140,
	ZergSpire = 141,
	ZergSpawningPool = 142,
	ZergCreepColony = 143,
	ZergSporeColony = 144,
	ZergSunkenColony = 146,
	ZergExtractor = 149,
	ProtossNexus = 154,
	ProtossRoboticsFacility = 155,
	ProtossPylon = 156,
	ProtossAssimilator = 157,
	ProtossObservatory = 159,
	ProtossGateway = 160,
	ProtossPhotonCannon = 162,
	ProtossCitadelOfAdun = 163,
	ProtossCyberneticsCore = 164,
	ProtossTemplarArchives = 165,
	ProtossForge = 166,
	ProtossStargate = 167,
	ProtossFleetBeacon = 169,
	ProtossArbiterTribunal = 170,
	ProtossRoboticsSupportBay = 171,
	ProtossShieldBattery = 172,
	ResourceMineralField = 176,
	ResourceMineralFieldType2 = 177,
	ResourceMineralFieldType3 = 178,
	ResourceVespeneGeyser = 188,
	SpellDarkSwarm = 202,
	None = 228,
	Unknown = 229,
}
