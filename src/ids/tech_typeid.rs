#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, FromPrimitive, ToPrimitive, Copy, Clone, PartialEq, Eq, Hash, FromStr)]
#[enum_from_str(use_primitives)]
pub enum TechTypeId {
	StimPacks = 0,
	Lockdown = 1,
	EMPShockwave = 2,
	SpiderMines = 3,
	ScannerSweep = 4,
	TankSiegeMode = 5,
	DefensiveMatrix = 6,
	Irradiate = 7,
	YamatoGun = 8,
	CloakingField = 9,
	PersonnelCloaking = 10,
	Burrowing = 11,
	Infestation = 12,
	SpawnBroodlings = 13,
	DarkSwarm = 14,
	Plague = 15,
	Consume = 16,
	Ensnare = 17,
	Parasite = 18,
	PsionicStorm = 19,
	Hallucination = 20,
	Recall = 21,
	StasisField = 22,
	ArchonWarp = 23,
	Restoration = 24,
	DisruptionWeb = 25,
	MindControl = 27,
	DarkArchonMeld = 28,
	Feedback = 29,
	OpticalFlare = 30,
	Maelstrom = 31,
	LurkerAspect = 32,
	Healing = 34,
	None = 44,
	Unknown = 45,
}
