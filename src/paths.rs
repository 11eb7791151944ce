const MAPS_DIR: &str = "maps";

/// Path of a map relative to the game directory, in the form the game expects.
///
/// Only bare file names get the maps folder prefix. Anything with a folder or
/// a drive in it is already a path and is returned unchanged.
pub fn map_path_name(map: &str) -> String {
	if map.contains(|c: char| matches!(c, '\\' | '/' | ':')) {
		map.to_string()
	} else {
		format!("{}\\{}", MAPS_DIR, map)
	}
}

/// Strips the maps folder prefix from a map path, keeping subfolders.
pub fn map_file_name(path: &str) -> &str {
	let prefix_len = MAPS_DIR.len() + 1;
	match path.get(..prefix_len) {
		Some(prefix)
			if prefix.as_bytes()[..MAPS_DIR.len()].eq_ignore_ascii_case(MAPS_DIR.as_bytes())
				&& matches!(prefix.as_bytes()[MAPS_DIR.len()], b'\\' | b'/') =>
		{
			&path[prefix_len..]
		}
		_ => path,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn map_paths() {
		assert_eq!(map_path_name("(2)Astral Balance.scm"), "maps\\(2)Astral Balance.scm");
		assert_eq!(map_path_name("maps\\BroodWar\\x.scx"), "maps\\BroodWar\\x.scx");
		assert_eq!(map_path_name("C:\\SC\\maps\\x.scm"), "C:\\SC\\maps\\x.scm");
		assert_eq!(map_path_name("ladder/x.scm"), "ladder/x.scm");
		assert_eq!(map_file_name("maps\\BroodWar\\x.scx"), "BroodWar\\x.scx");
		assert_eq!(map_file_name("Maps/x.scm"), "x.scm");
		assert_eq!(map_file_name("x.scm"), "x.scm");
		assert_eq!(map_file_name("map"), "map");
	}
}
