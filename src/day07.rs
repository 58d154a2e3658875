// Copyright (c) 2024 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
enum Op { Add, Mul, Concat }

impl Op {
	/// `None` on overflow.
	fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
		match self {
			Op::Add => lhs.checked_add(rhs),
			Op::Mul => lhs.checked_mul(rhs),
			Op::Concat => lhs
				.checked_mul(10_u64.checked_pow(rhs.checked_ilog10().unwrap_or(0) + 1)?)?
				.checked_add(rhs),
		}
	}
}

#[cfg_attr(test, derive(Debug))]
struct Equation {
	test_value: u64,
	numbers: Vec<u64>,
}

impl Equation {
	/// Whether inserting any of `ops` between the numbers, evaluated
	/// left-to-right, can produce the test value.
	fn is_solvable(&self, ops: &[Op]) -> bool {
		let Some((&first, rest)) = self.numbers.split_first() else { return false };

		// Depth-first; only multiplying by zero decreases the value, so
		// overshooting prunes once no zeros remain
		let zeros_end = rest.iter().rposition(|&n| n == 0).map_or(0, |z| z + 1);
		let mut stack = vec![(0, first)];
		while let Some((i, value)) = stack.pop() {
			if value > self.test_value && i >= zeros_end { continue }
			let Some(&number) = rest.get(i) else {
				if value == self.test_value { return true }
				continue
			};
			stack.extend(ops.iter().filter_map(|op| op.apply(value, number).map(|v| (i + 1, v))));
		}

		false
	}
}


fn input_equations_from_str(s: &str) -> impl Iterator<Item = Equation> + '_ {
	parsing::equations_from_str(s).map(|r| r.unwrap())
}


fn part1and2_impl(input_equations: impl Iterator<Item = Equation> + Send, ops: &[Op]) -> u64 {
	use rayon::iter::{ParallelBridge as _, ParallelIterator as _};
	input_equations
		.par_bridge()
		.filter_map(|eq| eq.is_solvable(ops).then_some(eq.test_value))
		.sum()
}

fn part1_impl(input_equations: impl Iterator<Item = Equation> + Send) -> u64 {
	part1and2_impl(input_equations, &[Op::Add, Op::Mul])
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_equations_from_str(input))
}


fn part2_impl(input_equations: impl Iterator<Item = Equation> + Send) -> u64 {
	part1and2_impl(input_equations, &[Op::Add, Op::Mul, Op::Concat])
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_equations_from_str(input))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Equation;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum EquationError {
		Format,
		TestValue(ParseIntError),
		NoNumbers,
		Number { index: usize, source: ParseIntError },
	}

	impl FromStr for Equation {
		type Err = EquationError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (test_value, numbers) = s.split_once(':').ok_or(EquationError::Format)?;
			let test_value = test_value.parse().map_err(EquationError::TestValue)?;
			let numbers = numbers.split_ascii_whitespace()
				.enumerate()
				.map(|(i, n)| n.parse()
					.map_err(|e| EquationError::Number { index: i + 1, source: e }))
				.collect::<Result<Vec<_>, _>>()?;
			if numbers.is_empty() { return Err(EquationError::NoNumbers) }
			Ok(Equation { test_value, numbers })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct EquationsError {
		line: usize,
		source: EquationError,
	}

	pub(super) fn equations_from_str(s: &str)
	-> impl Iterator<Item = Result<Equation, EquationsError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| EquationsError { line: l + 1, source: e }))
	}
}


#[cfg(test)]
mod tests {
	use {super::*, test_case::test_case};

	const INPUT: &str = indoc::indoc! { "
		190: 10 19
		3267: 81 40 27
		83: 17 5
		156: 15 6
		7290: 6 8 6 15
		161011: 16 10 13
		192: 17 8 14
		21037: 9 7 18 13
		292: 11 6 16 20
	" };

	#[test]
	fn parts() {
		assert_eq!(part1_impl(input_equations_from_str(INPUT)), 3749);
		assert_eq!(part2_impl(input_equations_from_str(INPUT)), 11387);
		assert_eq!(super::part1("10: 10 0\n0: 7 3 0\n50: 5 0\n"), 10);
		assert_eq!(super::part2("10: 10 0\n0: 7 3 0\n50: 5 0\n"), 60);
	}

	#[test_case("190: 10 19" => (true, true); "one multiplication")]
	#[test_case("3267: 81 40 27" => (true, true); "two ways")]
	#[test_case("292: 11 6 16 20" => (true, true); "mixed")]
	#[test_case("83: 17 5" => (false, false); "unsolvable")]
	#[test_case("156: 15 6" => (false, true); "concatenation")]
	#[test_case("7290: 6 8 6 15" => (false, true); "concatenation in between")]
	#[test_case("12: 12" => (true, true); "single number")]
	#[test_case("10: 10 0" => (true, true); "adding zero")]
	#[test_case("0: 5 0" => (true, true); "multiplying by zero")]
	#[test_case("0: 7 3 0" => (true, true); "overshooting before zero")]
	#[test_case("50: 5 0" => (false, true); "concatenating zero")]
	#[test_case("18446744073709551615: 18446744073709551615 1" => (true, true); "maximum")]
	#[test_case("18446744073709551615: 18446744073709551615 2" => (false, false); "overflow")]
	#[test_case("18446744073709551615: 1844674407 3709551615" => (false, true); "concatenation at maximum")]
	fn equation(line: &str) -> (bool, bool) {
		let eq = line.parse::<Equation>().unwrap();
		(eq.is_solvable(&[Op::Add, Op::Mul]), eq.is_solvable(&[Op::Add, Op::Mul, Op::Concat]))
	}

	#[test]
	fn parsing() {
		use parsing::EquationError as E;
		assert!(matches!("190 10 19".parse::<Equation>(), Err(E::Format)));
		assert!(matches!("190:".parse::<Equation>(), Err(E::NoNumbers)));
		assert!(matches!("x: 1".parse::<Equation>(), Err(E::TestValue(_))));
		assert!(matches!("10: 10 -1".parse::<Equation>(), Err(E::Number { index: 2, .. })));
	}
}
