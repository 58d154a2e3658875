// Copyright (c) 2024 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug, PartialEq))]
enum Instr {
	Mul(u32, u32),
	Do,
	Dont,
}


fn input_instrs_from_str(s: &str) -> impl Iterator<Item = Instr> + '_ {
	parsing::instrs_from_str(s)
}


fn part1_impl(input_instrs: impl Iterator<Item = Instr>) -> u64 {
	input_instrs
		.map(|instr| match instr {
			Instr::Mul(x, y) => x as u64 * y as u64,
			Instr::Do | Instr::Dont => 0,
		})
		.sum()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(input_instrs_from_str(input))
}


fn part2_impl(input_instrs: impl Iterator<Item = Instr>) -> u64 {
	input_instrs
		.scan(true, |enabled, instr| Some(match instr {
			Instr::Mul(x, y) if *enabled => x as u64 * y as u64,
			Instr::Mul(..) => 0,
			Instr::Do => { *enabled = true; 0 }
			Instr::Dont => { *enabled = false; 0 }
		}))
		.sum()
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(input_instrs_from_str(input))
}


mod parsing {
	use super::Instr;

	/// Parses one to three decimal digits, returning the number and the remainder.
	fn operand(s: &[u8]) -> Option<(u32, &[u8])> {
		let len = s.iter().take(4).take_while(|b| b.is_ascii_digit()).count();
		if !(1..=3).contains(&len) { return None }
		Some((s[..len].iter().fold(0, |acc, b| acc * 10 + (b - b'0') as u32), &s[len..]))
	}

	fn mul(s: &[u8]) -> Option<Instr> {
		let s = s.strip_prefix(b"mul(")?;
		let (x, s) = operand(s)?;
		let s = s.strip_prefix(b",")?;
		let (y, s) = operand(s)?;
		s.starts_with(b")").then_some(Instr::Mul(x, y))
	}

	/// Yields the instructions found in corrupted memory `s`, skipping anything else.
	pub(super) fn instrs_from_str(s: &str) -> impl Iterator<Item = Instr> + '_ {
		let s = s.as_bytes();
		(0..s.len()).filter_map(move |i| {
			let s = &s[i..];
			match *s.first()? {
				b'm' => mul(s),
				b'd' if s.starts_with(b"do()") => Some(Instr::Do),
				b'd' if s.starts_with(b"don't()") => Some(Instr::Dont),
				_ => None,
			}
		})
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		"xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))",
		"xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))",
	];
	assert_eq!(part1_impl(input_instrs_from_str(INPUTS[0])), 161);
	assert_eq!(part2_impl(input_instrs_from_str(INPUTS[1])), 48);

	assert_eq!(input_instrs_from_str("mul(1234,5)mul(12,3)mul( 1,2)mul(4,5").collect::<Vec<_>>(),
		vec![Instr::Mul(12, 3)]);

	// Disabled state carries over line breaks
	const MULTILINE: &str = indoc::indoc! { "
		mul(2,3)don't()
		mul(4,5)
		do()mul(1,1)
	" };
	assert_eq!(part1_impl(input_instrs_from_str(MULTILINE)), 27);
	assert_eq!(part2_impl(input_instrs_from_str(MULTILINE)), 7);
}
