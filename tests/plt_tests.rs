use std::fs;

use rand::SeedableRng;
use rand::rngs::StdRng;
use regex::Regex;

use hex2plt::palettes::pal_plt::{format_plt_line, plt_name, ColorId, PLT_HEADER};
use hex2plt::palettes::palette::{ArgbColor, Palette, PaletteError};

const EXAMPLE_COLORS: &str = "ffaaabac ff0072ca 80010203";

fn line_regex() -> Regex {
	Regex::new(r"^Solid    (?P<hex>\S+) +(?P<id>0x[0-9a-f]{16}) (?P<r>[ \d]{3}) (?P<g>[ \d]{3}) (?P<b>[ \d]{3}) (?P<a>[ \d]{3})$").unwrap()
}

fn render(pal: &Palette, seed: u64) -> String {
	let mut rng = StdRng::seed_from_u64(seed);
	let mut buf: Vec<u8> = Vec::new();
	pal.write_plt(&mut buf, &mut rng).unwrap();
	String::from_utf8(buf).unwrap()
}

#[test]
fn plt_line_format() {
	let color = ArgbColor::decode("ffaaabac").unwrap();
	let line = format_plt_line(&color, ColorId(0x0123456789abcdef));
	assert_eq!(line, format!("Solid    ffaaabac{} 0x0123456789abcdef 170 171 172 255", " ".repeat(18)));

	let color = ArgbColor::decode("80010203").unwrap();
	let line = format_plt_line(&color, ColorId(0xab));
	assert_eq!(line, format!("Solid    80010203{} 0x00000000000000ab   1   2   3 128", " ".repeat(18)));
}

#[test]
fn plt_line_echoes_source() {
	let color = ArgbColor::decode("FfAaAbAc").unwrap();
	let line = format_plt_line(&color, ColorId(0));
	assert!(line.starts_with("Solid    FfAaAbAc "));
	assert_eq!(&line[9..35], format!("{:<26}", "FfAaAbAc"));
}

#[test]
fn plt_example_file() {
	let dir = tempfile::tempdir().unwrap();
	let pal = Palette::from_hex_list(EXAMPLE_COLORS).unwrap();

	let path = pal.write_plt_file_in(dir.path(), "example").unwrap();
	assert_eq!(path, dir.path().join("example.plt"));

	let contents = fs::read_to_string(&path).unwrap();
	let lines = contents.lines().collect::<Vec<&str>>();
	assert!(contents.starts_with("ToonBoomAnimationInc PaletteFile 2\n"));
	assert!(contents.ends_with('\n'));
	assert_eq!(lines.len(), 4);
	assert_eq!(lines[0], PLT_HEADER);

	let re = line_regex();
	let expected = [("ffaaabac", " 170 171 172 255"), ("ff0072ca", "   0 114 202 255"), ("80010203", "   1   2   3 128")];
	for (line, (hex, channels)) in lines[1..].iter().zip(expected) {
		let groups = re.captures(line).unwrap_or_else(|| panic!("malformed line: {line:?}"));
		assert_eq!(&groups["hex"], hex);
		assert_eq!(&line[9..35], format!("{hex:<26}"));
		assert!(line.ends_with(channels), "{line:?}");
	}
}

#[test]
fn plt_line_count() {
	for n in [0, 1, 7, 300] {
		let colors = (0..n).map(|i: u32| ArgbColor::decode(format!("{:08x}", i.wrapping_mul(0x01020304))).unwrap()).collect::<Vec<ArgbColor>>();
		let contents = render(&Palette::from(colors), 1);
		assert_eq!(contents.lines().count(), n as usize + 1);
	}

	assert_eq!(render(&Palette::default(), 1), "ToonBoomAnimationInc PaletteFile 2\n");
}

#[test]
fn plt_keeps_order_and_duplicates() {
	let pal = Palette::from_hex_list("80010203 ffaaabac 80010203").unwrap();
	let contents = render(&pal, 3);

	let re = line_regex();
	let hexes = contents.lines().skip(1)
		.map(|l| re.captures(l).unwrap()["hex"].to_string())
		.collect::<Vec<String>>();
	assert_eq!(hexes, ["80010203", "ffaaabac", "80010203"]);
}

#[test]
fn plt_ids_are_the_only_difference() {
	let pal = Palette::from_hex_list(EXAMPLE_COLORS).unwrap();

	// same seed, same bytes
	assert_eq!(render(&pal, 42), render(&pal, 42));

	let a = render(&pal, 1);
	let b = render(&pal, 2);
	assert_ne!(a, b);

	let id = Regex::new(r"0x[0-9a-f]{16}").unwrap();
	assert_eq!(id.replace_all(&a, "ID"), id.replace_all(&b, "ID"));

	// ids within one file are fresh per line
	let ids = id.find_iter(&a).map(|m| m.as_str()).collect::<Vec<&str>>();
	assert_eq!(ids.len(), 3);
	assert!(ids[0] != ids[1] && ids[1] != ids[2] && ids[0] != ids[2]);
}

#[test]
fn plt_overwrites_existing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("palette.plt");
	fs::write(&path, "something else entirely\n".repeat(100)).unwrap();

	let pal = Palette::from_hex_list("ffaaabac").unwrap();
	pal.write_plt_file_in(dir.path(), "palette").unwrap();

	let contents = fs::read_to_string(&path).unwrap();
	assert_eq!(contents.lines().count(), 2);
	assert!(!contents.contains("something else"));
}

#[test]
fn plt_names() {
	assert_eq!(plt_name(Some("blah.plt")), "blah");
	assert_eq!(plt_name(Some("blah")), "blah");
	assert_eq!(plt_name(Some("my.colors.txt")), "my.colors");
	assert_eq!(plt_name(Some("")), "output");
	assert_eq!(plt_name(None::<&str>), "output");

	let dir = tempfile::tempdir().unwrap();
	let pal = Palette::from_hex_list(EXAMPLE_COLORS).unwrap();
	let path = pal.write_plt_file_in(dir.path(), plt_name(Some("blah.plt"))).unwrap();
	assert_eq!(path.file_name().unwrap(), "blah.plt");
	assert!(!dir.path().join("blah.plt.plt").exists());
}

#[test]
fn plt_unwritable_destination() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("missing");

	let pal = Palette::from_hex_list(EXAMPLE_COLORS).unwrap();
	match pal.write_plt_file_in(&missing, "example") {
		Err(PaletteError::FileWrite { path, .. }) => assert_eq!(path, missing.join("example.plt")),
		other => panic!("expected a write error, got {other:?}"),
	}
}
