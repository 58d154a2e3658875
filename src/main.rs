// Copyright (c) 2024 Bastiaan Marinus van de Weerd

mod util;
util::mod_days![01, 02, 03, 04, 05, 06, 07];


#[derive(clap::Parser)]
#[command(about = "Advent of Code 2024 solutions")]
struct Args {
	/// Days to run (all solved days if none are given)
	#[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
	days: Vec<u8>,

	/// Directory containing `dayNN.txt` puzzle inputs
	#[arg(long, env = "ADVENT24_INPUTS", default_value = "inputs")]
	inputs: std::path::PathBuf,
}

fn main() -> std::io::Result<()> {
	use {clap::Parser as _, std::io::ErrorKind};

	let args = Args::parse();

	for &(day, part1, part2) in DAYS {
		if !args.days.is_empty() && !args.days.contains(&day) { continue }

		let path = args.inputs.join(format!("day{day:02}.txt"));
		let input = match std::fs::read_to_string(&path) {
			Ok(input) => input,
			Err(e) if e.kind() == ErrorKind::NotFound => {
				eprintln!("Day {day:02}; no input at {}", path.display());
				continue
			}
			Err(e) => return Err(e),
		};

		println!("Day {day:02}; part 1: {}, part 2: {}", part1(&input), part2(&input));
	}

	Ok(())
}
