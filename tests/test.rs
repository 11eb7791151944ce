#[macro_use]
extern crate bw_macro;
#[macro_use]
extern crate num_derive;

use bw_macro::ParseEnumError;
use rust_bw::{
	ids::{Flag, TechTypeId, UnitTypeId},
	player::{GameResult, Race},
	EventType,
};

#[derive(Debug, PartialEq, FromPrimitive, FromStr)]
#[enum_from_str(use_primitives)]
enum MyEnum {
	Variant0,
	Variant1 = -1001,
	Variant2,
	Variant3 = 2002,
}

#[variant_checkers]
#[derive(Debug, Clone, Copy, PartialEq, FromStr)]
enum Checked {
	FirstOne,
	SecondTwo3,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn err(input: &str) -> ParseEnumError {
		ParseEnumError {
			input: input.to_string(),
		}
	}

	#[test]
	fn check_enum_err() {
		assert_eq!("Variant4".parse::<MyEnum>(), Err(err("Variant4")));
		assert!("Variant4".parse::<MyEnum>().is_err());
		assert_eq!("4".parse::<MyEnum>(), Err(err("4")));
		assert_eq!("0".parse::<Checked>(), Err(err("0")));
	}
	#[test]
	fn check_enum_ok() {
		assert_eq!("Variant1".parse::<MyEnum>(), Ok(MyEnum::Variant1));
		assert_eq!("Variant2".parse::<MyEnum>(), Ok(MyEnum::Variant2));
		assert_eq!("variant_3".parse::<MyEnum>(), Ok(MyEnum::Variant3));
		assert_eq!("second two 3".parse::<Checked>(), Ok(Checked::SecondTwo3));
	}
	#[test]
	fn check_enum_ok3() {
		assert_eq!("0".parse::<MyEnum>(), Ok(MyEnum::Variant0));
		assert_eq!("-1000".parse::<MyEnum>(), Ok(MyEnum::Variant2));
		assert_eq!("2002".parse::<MyEnum>(), Ok(MyEnum::Variant3));
	}
	#[test]
	fn check_variant_checkers() {
		assert!(Checked::FirstOne.is_first_one());
		assert!(!Checked::FirstOne.is_second_two3());
		assert!(Checked::SecondTwo3.is_second_two3());
	}
	#[test]
	fn check_game_ids() {
		assert_eq!("Terran_Marine".parse::<UnitTypeId>(), Ok(UnitTypeId::TerranMarine));
		assert_eq!("terran marine".parse::<UnitTypeId>(), Ok(UnitTypeId::TerranMarine));
		assert_eq!("0".parse::<UnitTypeId>(), Ok(UnitTypeId::TerranMarine));
		assert_eq!(
			"Special_Map_Revealer".parse::<UnitTypeId>(),
			Ok(UnitTypeId::SpecialMapRevealer)
		);
		assert_eq!("101".parse::<UnitTypeId>(), Ok(UnitTypeId::SpecialMapRevealer));
		assert_eq!("Stim_Packs".parse::<TechTypeId>(), Ok(TechTypeId::StimPacks));
		assert_eq!("complete map information".parse::<Flag>(), Ok(Flag::CompleteMapInformation));
		assert_eq!("protoss".parse::<Race>(), Ok(Race::Protoss));
		assert_eq!("2".parse::<Race>(), Ok(Race::Protoss));
		assert!("Zealot".parse::<UnitTypeId>().is_err());
	}
	#[test]
	fn check_game_checkers() {
		assert!(EventType::MatchStart.is_match_start());
		assert!(EventType::MatchEnd.is_match_end());
		assert!(!EventType::MatchFrame.is_match_end());
		assert_eq!("match_end".parse::<EventType>(), Ok(EventType::MatchEnd));
		assert!(GameResult::Undecided.is_undecided());
		assert_eq!(GameResult::from_winner(true), GameResult::Victory);
		assert_eq!(GameResult::from_winner(false), GameResult::Defeat);
	}
}
