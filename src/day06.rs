// Copyright (c) 2024 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
enum Heading { Up, Right, Down, Left }

impl Heading {
	fn turned_right(self) -> Self {
		use Heading::*;
		match self { Up => Right, Right => Down, Down => Left, Left => Up }
	}

	fn mask(self) -> u8 {
		1 << self as u8
	}
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tile { Empty, Obstruction }

#[derive(Clone)]
struct Lab {
	tiles: Vec<Tile>,
	stride: usize,
	start: usize,
	start_heading: Heading,
}

/// Headings the guard had at each position, as bit masks.
struct Patrol {
	headings: Vec<u8>,
	looped: bool,
}

impl Patrol {
	fn visited_positions(&self) -> impl Iterator<Item = usize> + '_ {
		self.headings.iter()
			.enumerate()
			.filter_map(|(pos, &mask)| (mask != 0).then_some(pos))
	}
}

impl Lab {
	/// Position adjacent to `pos` in the direction of `heading`, if within the lab.
	fn adjacent_position(&self, pos: usize, heading: Heading) -> Option<usize> {
		let s = self.stride;
		match heading {
			Heading::Up => pos.checked_sub(s),
			Heading::Right => (pos % s < s - 1).then_some(pos + 1),
			Heading::Down => (pos + s < self.tiles.len()).then_some(pos + s),
			Heading::Left => (pos % s > 0).then(|| pos - 1),
		}
	}

	/// Turns right for as long as an obstruction is ahead, then moves forward one
	/// position. Returns `None` once that move would leave the lab. A guard boxed
	/// in on all sides stays put, facing its original heading.
	fn step(&self, pos: usize, heading: Heading) -> Option<(usize, Heading)> {
		let mut turned = heading;
		loop {
			let next = self.adjacent_position(pos, turned)?;
			if self.tiles[next] == Tile::Empty { return Some((next, turned)) }
			turned = turned.turned_right();
			if turned == heading { return Some((pos, heading)) }
		}
	}

	/// Walks the guard from its start until it leaves the lab or repeats a
	/// position & heading it had before, which takes at most four steps per tile.
	fn patrol(&self) -> Patrol {
		let mut headings = vec![0; self.tiles.len()];
		let (mut pos, mut heading) = (self.start, self.start_heading);
		headings[pos] = heading.mask();

		while let Some(next) = self.step(pos, heading) {
			(pos, heading) = next;
			if headings[pos] & heading.mask() != 0 {
				return Patrol { headings, looped: true }
			}
			headings[pos] |= heading.mask();
		}

		Patrol { headings, looped: false }
	}

	/// Positions where a new obstruction could change the guard’s `patrol`.
	fn obstruction_candidates<'a>(&'a self, patrol: &'a Patrol) -> impl Iterator<Item = usize> + 'a {
		patrol.visited_positions().filter(|&pos| pos != self.start)
	}

	fn with_obstruction(&self, pos: usize) -> Self {
		let mut lab = self.clone();
		lab.tiles[pos] = Tile::Obstruction;
		lab
	}
}


fn input_lab_from_str(s: &str) -> Lab {
	s.parse().unwrap()
}


fn part1_impl(input_lab: Lab) -> usize {
	#[cfg(LOGGING)]
	println!("{input_lab}");

	input_lab.patrol().visited_positions().count()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_lab_from_str(input))
}


fn part2_impl(input_lab: Lab) -> usize {
	use rayon::iter::{IntoParallelIterator as _, ParallelIterator as _};

	let patrol = input_lab.patrol();
	input_lab.obstruction_candidates(&patrol)
		.collect::<Vec<_>>()
		.into_par_iter()
		.filter(|&pos| {
			let looped = input_lab.with_obstruction(pos).patrol().looped;

			#[cfg(LOGGING)]
			if looped {
				println!("Obstruction at {},{} loops", pos % input_lab.stride, pos / input_lab.stride);
			}

			looped
		})
		.count()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_lab_from_str(input))
}


mod parsing {
	use std::str::FromStr;
	use super::{Heading, Tile, Lab};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum LabError {
		Empty,
		LineLen { line: usize, len: Option<usize>, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
		DuplicateStart { line: usize, column: usize },
		NoStart,
	}

	impl FromStr for Lab {
		type Err = LabError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s = s.trim_end_matches(['\n', '\r']);
			if s.is_empty() { return Err(LabError::Empty) }

			let mut tiles = vec![];
			let mut stride = None;
			let mut start = None;

			for (l, line) in s.lines().enumerate() {
				match stride {
					Some(len) if line.len() != len => return Err(LabError::LineLen {
						line: l + 1, len: stride, found: line.len() }),
					None if line.is_empty() => return Err(LabError::LineLen {
						line: l + 1, len: None, found: 0 }),
					None => stride = Some(line.len()),
					Some(_) => (),
				}

				for (c, b) in line.bytes().enumerate() {
					let heading = match b {
						b'.' => { tiles.push(Tile::Empty); continue }
						b'#' => { tiles.push(Tile::Obstruction); continue }
						b'^' => Heading::Up,
						b'>' => Heading::Right,
						b'v' => Heading::Down,
						b'<' => Heading::Left,
						found => return Err(LabError::InvalidByte {
							line: l + 1, column: c + 1, found }),
					};
					if start.is_some() { return Err(LabError::DuplicateStart {
						line: l + 1, column: c + 1 }) }
					start = Some((tiles.len(), heading));
					tiles.push(Tile::Empty);
				}
			}

			let (start, start_heading) = start.ok_or(LabError::NoStart)?;
			Ok(Lab { tiles, stride: stride.unwrap_or_default(), start, start_heading })
		}
	}
}


#[cfg(LOGGING)]
impl std::fmt::Display for Lab {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;
		for (pos, tile) in self.tiles.iter().enumerate() {
			if pos > 0 && pos % self.stride == 0 { f.write_char('\n')? }
			f.write_char(match (tile, self.start_heading) {
				_ if pos != self.start => if *tile == Tile::Obstruction { '#' } else { '.' },
				(_, Heading::Up) => '^',
				(_, Heading::Right) => '>',
				(_, Heading::Down) => 'v',
				(_, Heading::Left) => '<',
			})?;
		}
		Ok(())
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		....#.....
		.........#
		..........
		..#.......
		.......#..
		..........
		.#..^.....
		........#.
		#.........
		......#...
	" };

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_lab_from_str(INPUT)), 41);

		// Straight out, no obstructions in the way
		assert_eq!(part1_impl(input_lab_from_str(indoc::indoc! { "
			.....
			.#...
			...>.
			.....
		" })), 2);
		assert_eq!(part1_impl(input_lab_from_str(indoc::indoc! { "
			...
			...
			.^.
		" })), 3);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(input_lab_from_str(INPUT)), 6);
		assert_eq!(super::part2(&format!("{INPUT}\n\n")), 6);
	}

	#[test]
	fn patrol() {
		let lab = input_lab_from_str(INPUT);
		let [p0, p1] = [lab.patrol(), lab.patrol()];
		assert_eq!(p0.headings, p1.headings);
		assert!(!p0.looped);

		// Crosses its own start facing left, but doesn’t loop
		let lab = input_lab_from_str(indoc::indoc! { "
			.#..
			...#
			.^..
			..#.
		" });
		let patrol = lab.patrol();
		assert!(!patrol.looped);
		assert_eq!(patrol.headings[lab.start], Heading::Up.mask() | Heading::Left.mask());
		assert_eq!(patrol.visited_positions().count(), 5);

		// Boxed in
		let lab = input_lab_from_str(indoc::indoc! { "
			..#..
			.#^#.
			..#..
		" });
		assert!(lab.patrol().looped);
		assert_eq!(part1_impl(lab), 1);
	}

	#[test]
	fn obstruction_candidates() {
		let lab = input_lab_from_str(INPUT);
		let patrol = lab.patrol();
		let candidates = lab.obstruction_candidates(&patrol).collect::<Vec<_>>();
		assert_eq!(candidates.len(), 40);
		assert!(!candidates.contains(&lab.start));
		assert!(candidates.iter().all(|&pos| lab.tiles[pos] == Tile::Empty));

		// Loops with the guard’s position & heading repeating; see puzzle description
		let lab = lab.with_obstruction(6 * 10 + 3);
		assert!(lab.patrol().looped);
	}

	#[test]
	fn step() {
		use Heading::*;
		let lab = input_lab_from_str(INPUT);
		assert_eq!(lab.step(lab.start, Up), Some((lab.start - 10, Up)));
		assert_eq!(lab.step(1 * 10 + 4, Up), Some((1 * 10 + 5, Right)));
		assert_eq!(lab.step(1 * 10 + 8, Right), Some((2 * 10 + 8, Down)));
		assert_eq!(lab.step(9 * 10 + 0, Down), None);
		assert_eq!(lab.step(5 * 10 + 0, Left), None);
		assert_eq!(Up.turned_right().turned_right().turned_right().turned_right(), Up);
	}

	#[test]
	fn parsing() {
		use parsing::LabError as E;
		assert!(matches!("".parse::<Lab>(), Err(E::Empty)));
		assert!(matches!("\n\n".parse::<Lab>(), Err(E::Empty)));
		assert!(matches!(".^.\n\n...".parse::<Lab>(), Err(E::LineLen { line: 2, len: Some(3), found: 0 })));
		assert!(matches!("...\n.#.".parse::<Lab>(), Err(E::NoStart)));
		assert!(matches!(".^.\n.<.".parse::<Lab>(), Err(E::DuplicateStart { line: 2, column: 2 })));
		assert!(matches!(".^.\n..".parse::<Lab>(), Err(E::LineLen { line: 2, len: Some(3), found: 2 })));
		assert!(matches!(".^X".parse::<Lab>(), Err(E::InvalidByte { line: 1, column: 3, found: b'X' })));
	}
}
