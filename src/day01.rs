// Copyright (c) 2024 Bastiaan Marinus van de Weerd


fn input_location_ids_from_str(s: &str) -> impl Iterator<Item = (u32, u32)> + '_ {
	parsing::location_ids_from_str(s).map(|r| r.unwrap())
}


fn part1_impl(input_location_ids: impl Iterator<Item = (u32, u32)>) -> u64 {
	use itertools::Itertools as _;
	let (left, right): (Vec<_>, Vec<_>) = input_location_ids.unzip();
	left.into_iter().sorted_unstable()
		.zip(right.into_iter().sorted_unstable())
		.map(|(l, r)| l.abs_diff(r) as u64)
		.sum()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_location_ids_from_str(input))
}


fn part2_impl(input_location_ids: impl Iterator<Item = (u32, u32)>) -> u64 {
	use itertools::Itertools as _;
	let (left, right): (Vec<_>, Vec<_>) = input_location_ids.unzip();
	let right_counts = right.into_iter().counts();
	left.into_iter()
		.map(|l| l as u64 * right_counts.get(&l).copied().unwrap_or(0) as u64)
		.sum()
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_location_ids_from_str(input))
}


mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PairError {
		Format { found: usize },
		Left(ParseIntError),
		Right(ParseIntError),
	}

	fn try_pair_from_str(s: &str) -> Result<(u32, u32), PairError> {
		let mut ids = s.split_ascii_whitespace();
		let (Some(left), Some(right), None) = (ids.next(), ids.next(), ids.next())
			else { return Err(PairError::Format { found: s.split_ascii_whitespace().count() }) };
		Ok((
			left.parse().map_err(PairError::Left)?,
			right.parse().map_err(PairError::Right)?,
		))
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum LocationIdsError {
		Empty,
		Pair { line: usize, source: PairError },
	}

	pub(super) fn location_ids_from_str(s: &str)
	-> impl Iterator<Item = Result<(u32, u32), LocationIdsError>> + '_ {
		use {std::iter::once, itertools::Either};
		if s.is_empty() { return Either::Left(once(Err(LocationIdsError::Empty))) }

		// Blank lines are skipped, wherever they are
		Either::Right(s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| try_pair_from_str(line)
				.map_err(|e| LocationIdsError::Pair { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		3   4
		4   3
		2   5
		1   3
		3   9
		3   3
	" };
	assert_eq!(part1_impl(input_location_ids_from_str(INPUT)), 11);
	assert_eq!(part2_impl(input_location_ids_from_str(INPUT)), 31);

	use parsing::{location_ids_from_str, LocationIdsError as E, PairError as P};
	assert!(matches!(location_ids_from_str("").next(), Some(Err(E::Empty))));
	assert_eq!(part1(&format!("{INPUT}\n\n")), 11);
	assert_eq!(location_ids_from_str("1 2\n\n3 4\n\n").filter(Result::is_ok).count(), 2);
	assert!(matches!(location_ids_from_str("1 2\n3 4 5").nth(1),
		Some(Err(E::Pair { line: 2, source: P::Format { found: 3 } }))));
	assert!(matches!(location_ids_from_str("1 x").next(),
		Some(Err(E::Pair { line: 1, source: P::Right(_) }))));
}
