// Copyright (c) 2024 Bastiaan Marinus van de Weerd


/// Declares a `dayNN` module per given day, plus [`DAYS`](crate::DAYS)
/// referring to their `part1` & `part2` functions.
macro_rules! mod_days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	$(
		fn [<day $day _part1>](input: &str) -> String {
			[<day $day>]::part1(input).to_string()
		}

		fn [<day $day _part2>](input: &str) -> String {
			[<day $day>]::part2(input).to_string()
		}
	)*

	/// Day number, part 1, and part 2 of each solved day, in order.
	pub(crate) const DAYS: &[(u8, fn(&str) -> String, fn(&str) -> String)] = &[
		$( ($day, [<day $day _part1>], [<day $day _part2>]), )*
	];
} } }

pub(crate) use mod_days;
