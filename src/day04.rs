// Copyright (c) 2024 Bastiaan Marinus van de Weerd


struct WordSearch {
	letters: Vec<u8>,
	width: usize,
}

impl WordSearch {
	fn height(&self) -> usize {
		self.letters.len() / self.width
	}

	fn letter_xy(&self, x: isize, y: isize) -> Option<u8> {
		let [x, y] = [usize::try_from(x).ok()?, usize::try_from(y).ok()?];
		if x >= self.width || y >= self.height() { return None }
		Some(self.letters[y * self.width + x])
	}
}


fn input_word_search_from_str(s: &str) -> WordSearch {
	s.parse().unwrap()
}


fn part1_impl(input_word_search: WordSearch) -> usize {
	use itertools::iproduct;

	const WORD: &[u8] = b"XMAS";
	const DIRS: [[isize; 2]; 8] = [[-1, -1], [0, -1], [1, -1], [-1, 0], [1, 0], [-1, 1], [0, 1], [1, 1]];

	let [width, height] = [input_word_search.width, input_word_search.height()].map(|l| l as isize);
	iproduct!(0..height, 0..width, DIRS)
		.filter(|&(y, x, [dx, dy])| WORD.iter()
			.zip(0..)
			.all(|(&b, i)| input_word_search.letter_xy(x + dx * i, y + dy * i) == Some(b)))
		.count()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_word_search_from_str(input))
}


fn part2_impl(input_word_search: WordSearch) -> usize {
	use itertools::iproduct;

	let [width, height] = [input_word_search.width, input_word_search.height()].map(|l| l as isize);
	iproduct!(1..height - 1, 1..width - 1)
		.filter(|&(y, x)| {
			macro_rules! letter { ( $dx:literal, $dy:literal ) => {
				input_word_search.letter_xy(x + $dx, y + $dy)
			} }

			// Each diagonal through the center reads “MAS” or “SAM”
			macro_rules! is_mas { ( $from:expr, $to:expr ) => {
				matches!(($from, $to), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
			} }

			letter!(0, 0) == Some(b'A')
				&& is_mas!(letter!(-1, -1), letter!(1, 1))
				&& is_mas!(letter!(-1, 1), letter!(1, -1))
		})
		.count()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_word_search_from_str(input))
}


mod parsing {
	use std::str::FromStr;
	use super::WordSearch;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum WordSearchError {
		Empty,
		LineLen { line: usize, len: Option<usize>, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	impl FromStr for WordSearch {
		type Err = WordSearchError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s = s.trim_end_matches(['\n', '\r']);
			if s.is_empty() { return Err(WordSearchError::Empty) }

			let mut letters = vec![];
			let mut width = None;

			for (l, line) in s.lines().enumerate() {
				match width {
					Some(len) if line.len() != len => return Err(WordSearchError::LineLen {
						line: l + 1, len: width, found: line.len() }),
					None if line.is_empty() => return Err(WordSearchError::LineLen {
						line: l + 1, len: None, found: 0 }),
					None => width = Some(line.len()),
					Some(_) => (),
				}

				for (c, b) in line.bytes().enumerate() {
					if !b.is_ascii_graphic() { return Err(WordSearchError::InvalidByte {
						line: l + 1, column: c + 1, found: b }) }
					letters.push(b);
				}
			}

			Ok(WordSearch { letters, width: width.unwrap_or_default() })
		}
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			..X...
			.SAMX.
			.A..A.
			XMAS.S
			.X....
		" },
		indoc::indoc! { "
			MMMSXXMASM
			MSAMXMSMSA
			AMXSXMAAMM
			MSAMASMSMX
			XMASAMXAMM
			XXAMMXXAMA
			SMSMSASXSS
			SAXAMASAAA
			MAMMMXMMMM
			MXMXAXMASX
		" },
	];
	assert_eq!(part1_impl(input_word_search_from_str(INPUTS[0])), 4);
	assert_eq!(part1_impl(input_word_search_from_str(INPUTS[1])), 18);
	assert_eq!(part2_impl(input_word_search_from_str(INPUTS[1])), 9);
	assert_eq!(part1(&format!("{}\n\n", INPUTS[1])), 18);

	use parsing::WordSearchError as E;
	assert!(matches!("".parse::<WordSearch>(), Err(E::Empty)));
	assert!(matches!("XMAS\nXMA".parse::<WordSearch>(),
		Err(E::LineLen { line: 2, len: Some(4), found: 3 })));
	assert!(matches!("XM S".parse::<WordSearch>(),
		Err(E::InvalidByte { line: 1, column: 3, found: b' ' })));
}
