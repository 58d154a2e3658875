// Copyright (c) 2024 Bastiaan Marinus van de Weerd


/// Page `before` must be printed at some point before page `after`.
#[cfg_attr(test, derive(Debug))]
struct Rule {
	before: u32,
	after: u32,
}

#[cfg_attr(test, derive(Debug))]
struct Update(Vec<u32>);

impl Update {
	/// The page at `len / 2`, i.e. the later of the two middle pages of an even-length update.
	fn middle_page(&self) -> u32 {
		self.0[self.0.len() / 2]
	}

	/// Positions of both pages of `rule` if they are printed out of order.
	fn violation(&self, rule: &Rule) -> Option<[usize; 2]> {
		let before = self.0.iter().position(|&p| p == rule.before)?;
		let after = self.0.iter().position(|&p| p == rule.after)?;
		(before >= after).then_some([before, after])
	}

	fn is_ordered(&self, rules: &[Rule]) -> bool {
		rules.iter().all(|rule| self.violation(rule).is_none())
	}

	/// Swaps pages violating `rules` until none do.
	fn order(&mut self, rules: &[Rule]) {
		let mut swapped = true;
		while swapped {
			swapped = false;
			for rule in rules {
				let Some([before, after]) = self.violation(rule) else { continue };
				self.0.swap(before, after);
				swapped = true;
			}
		}
	}
}

struct SafetyManual {
	rules: Vec<Rule>,
	updates: Vec<Update>,
}


fn input_safety_manual_from_str(s: &str) -> SafetyManual {
	s.parse().unwrap()
}


fn part1_impl(input_safety_manual: SafetyManual) -> u64 {
	let SafetyManual { rules, updates } = input_safety_manual;
	updates.iter()
		.filter(|update| update.is_ordered(&rules))
		.map(|update| update.middle_page() as u64)
		.sum()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_safety_manual_from_str(input))
}


fn part2_impl(input_safety_manual: SafetyManual) -> u64 {
	let SafetyManual { rules, updates } = input_safety_manual;
	updates.into_iter()
		.filter(|update| !update.is_ordered(&rules))
		.map(|mut update| {
			update.order(&rules);
			update.middle_page() as u64
		})
		.sum()
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_safety_manual_from_str(input))
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, either::Either};
	use super::{Rule, Update, SafetyManual};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RuleError {
		Format,
		Before(ParseIntError),
		After(ParseIntError),
		SamePage,
	}

	impl FromStr for Rule {
		type Err = RuleError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (before, after) = s.split_once('|').ok_or(RuleError::Format)?;
			let rule = Rule {
				before: before.parse().map_err(RuleError::Before)?,
				after: after.parse().map_err(RuleError::After)?,
			};
			if rule.before == rule.after { return Err(RuleError::SamePage) }
			Ok(rule)
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct UpdateError {
		index: usize,
		source: ParseIntError,
	}

	impl FromStr for Update {
		type Err = UpdateError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			s.split(',')
				.enumerate()
				.map(|(i, page)| page.parse()
					.map_err(|e| UpdateError { index: i + 1, source: e }))
				.collect::<Result<_, _>>()
				.map(Update)
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SafetyManualError {
		NoBlank,
		Line { line: usize, source: Either<RuleError, UpdateError> },
	}

	impl FromStr for SafetyManual {
		type Err = SafetyManualError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use SafetyManualError::*;

			let s = s.trim_end();
			let mut lines = s.lines().enumerate();

			let rules = (&mut lines)
				.take_while(|(_, line)| !line.is_empty())
				.map(|(l, line)| line.parse::<Rule>()
					.map_err(|e| Line { line: l + 1, source: Either::Left(e) }))
				.collect::<Result<Vec<_>, _>>()?;

			// `take_while` consumed the blank line, if there was one; with trailing
			// whitespace trimmed, updates follow it
			if rules.len() == s.lines().count() { return Err(NoBlank) }

			let updates = lines
				.map(|(l, line)| line.parse::<Update>()
					.map_err(|e| Line { line: l + 1, source: Either::Right(e) }))
				.collect::<Result<Vec<_>, _>>()?;

			Ok(SafetyManual { rules, updates })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		47|53
		97|13
		97|61
		97|47
		75|29
		61|13
		75|53
		29|13
		97|29
		53|29
		61|53
		97|53
		61|29
		47|13
		75|47
		97|75
		47|61
		75|61
		47|29
		75|13
		53|13

		75,47,61,53,29
		97,61,53,29,13
		75,29,13
		75,97,47,61,53
		61,13,29
		97,13,75,29,47
	" };
	assert_eq!(part1_impl(input_safety_manual_from_str(INPUT)), 143);
	assert_eq!(part2_impl(input_safety_manual_from_str(INPUT)), 123);

	let SafetyManual { rules, updates } = input_safety_manual_from_str(INPUT);
	let mut update = updates.into_iter().nth(3).unwrap();
	update.order(&rules);
	assert_eq!(update.0, [97, 75, 47, 61, 53]);

	// Even-length & repeated-page updates
	const UNUSUAL: &str = "1|2\n\n1,2\n2,1\n3,1,3,2\n\n";
	assert_eq!(part1_impl(input_safety_manual_from_str(UNUSUAL)), 2 + 3);
	assert_eq!(part2_impl(input_safety_manual_from_str(UNUSUAL)), 2);

	use {parsing::SafetyManualError as E, either::Either};
	assert!(matches!("1|2\n3|4".parse::<SafetyManual>(), Err(E::NoBlank)));
	assert!(matches!("1|2\n\n".parse::<SafetyManual>(), Err(E::NoBlank)));
	assert!(matches!("1|2\n\n1,x".parse::<SafetyManual>(),
		Err(E::Line { line: 3, source: Either::Right(_) })));
	assert!(matches!("1-2\n\n1".parse::<SafetyManual>(),
		Err(E::Line { line: 1, source: Either::Left(_) })));
}
