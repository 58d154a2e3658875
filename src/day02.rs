// Copyright (c) 2024 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
struct Report(Vec<i32>);

impl Report {
	/// Levels are safe when all strictly increase or all strictly
	/// decrease, by no less than one and no more than three each.
	fn are_levels_safe(levels: impl Iterator<Item = i32>) -> bool {
		use itertools::Itertools as _;
		let mut signum = None;
		levels.tuple_windows().all(|(l0, l1)| {
			let diff = l1 - l0;
			(1..=3).contains(&diff.abs()) && *signum.get_or_insert(diff.signum()) == diff.signum()
		})
	}

	fn is_safe(&self) -> bool {
		Self::are_levels_safe(self.0.iter().copied())
	}

	/// Whether the report is safe with at most one of its levels removed.
	fn is_safe_dampened(&self) -> bool {
		self.is_safe() || (0..self.0.len()).any(|skip| Self::are_levels_safe(self.0.iter()
			.enumerate()
			.filter_map(|(i, level)| (i != skip).then_some(*level))))
	}
}


fn input_reports_from_str(s: &str) -> impl Iterator<Item = Report> + '_ {
	parsing::reports_from_str(s).map(|r| r.unwrap())
}


fn part1_impl(input_reports: impl Iterator<Item = Report>) -> usize {
	input_reports.filter(Report::is_safe).count()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_reports_from_str(input))
}


fn part2_impl(input_reports: impl Iterator<Item = Report>) -> usize {
	input_reports.filter(Report::is_safe_dampened).count()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_reports_from_str(input))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Report;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ReportError {
		Empty,
		Level { column: usize, source: ParseIntError },
	}

	impl FromStr for Report {
		type Err = ReportError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s_start = s.as_ptr();
			let levels = s.split_ascii_whitespace()
				.map(|level| level.parse().map_err(|e| ReportError::Level {
					// SAFETY: `level` points into `s`
					column: unsafe { level.as_ptr().offset_from(s_start) as usize } + 1,
					source: e,
				}))
				.collect::<Result<Vec<_>, _>>()?;
			if levels.is_empty() { return Err(ReportError::Empty) }
			Ok(Report(levels))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ReportsError {
		Empty,
		Report { line: usize, source: ReportError },
	}

	pub(super) fn reports_from_str(s: &str)
	-> impl Iterator<Item = Result<Report, ReportsError>> + '_ {
		use {std::iter::once, itertools::Either};
		if s.is_empty() { return Either::Left(once(Err(ReportsError::Empty))) }

		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| ReportsError::Report { line: l + 1, source: e })))
	}
}


#[cfg(test)]
mod tests {
	use {super::*, test_case::test_case};

	const INPUT: &str = indoc::indoc! { "
		7 6 4 2 1
		1 2 7 8 9
		9 7 6 2 1
		1 3 2 4 5
		8 6 4 4 1
		1 3 6 7 9
	" };

	#[test]
	fn parts() {
		assert_eq!(part1_impl(input_reports_from_str(INPUT)), 2);
		assert_eq!(part2_impl(input_reports_from_str(INPUT)), 4);
	}

	#[test_case("7 6 4 2 1" => (true, true); "decreasing by one or two")]
	#[test_case("1 2 7 8 9" => (false, false); "increase of five")]
	#[test_case("9 7 6 2 1" => (false, false); "decrease of four")]
	#[test_case("1 3 2 4 5" => (false, true); "one direction change")]
	#[test_case("8 6 4 4 1" => (false, true); "one repeated level")]
	#[test_case("1 3 6 7 9" => (true, true); "increasing by one to three")]
	#[test_case("5" => (true, true); "single level")]
	#[test_case("9 1 2 3" => (false, true); "removable first level")]
	fn report(line: &str) -> (bool, bool) {
		let report = line.parse::<Report>().unwrap();
		(report.is_safe(), report.is_safe_dampened())
	}

	#[test]
	fn parsing_errors() {
		use parsing::{ReportError, ReportsError, reports_from_str};
		assert!(matches!(reports_from_str("").next(), Some(Err(ReportsError::Empty))));
		assert!(matches!(reports_from_str("1 2\n\n3").nth(1),
			Some(Err(ReportsError::Report { line: 2, source: ReportError::Empty }))));
		assert!(matches!(reports_from_str("1 22 x3").next(),
			Some(Err(ReportsError::Report { line: 1, source: ReportError::Level { column: 6, .. } }))));
	}
}
