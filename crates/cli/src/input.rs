//! Line commands of the interactive timer and workout screens.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Empty line.
    Next,
    /// Exercise and set, zero based.
    Set { exercise: usize, set: usize },
    Heavier(usize),
    Lighter(usize),
    Timer,
    Reset,
    Rest(u32),
    Stopwatch,
    Finish(String),
    Quit,
    Help,
    Unknown(String),
}

pub const HELP: &str = "\
<enter>      complete the next set (workout) or start/pause the timer
d EX SET     toggle a set, e.g. `d 2 3`
+ EX / - EX  change the weight of an exercise
t            start/pause the timer
r            reset the timer
rest SECS    countdown length
sw           stopwatch
f [NOTES]    finish the workout
q            quit";

#[must_use]
pub fn parse(line: &str) -> Input {
    let line = line.trim();
    let (command, args) = line.split_once(' ').unwrap_or((line, ""));
    let args = args.trim();
    match command {
        "" => Input::Next,
        "d" => {
            let mut numbers = args.split_whitespace().map(index);
            match (numbers.next(), numbers.next(), numbers.next()) {
                (Some(Some(exercise)), Some(Some(set)), None) => Input::Set { exercise, set },
                _ => Input::Unknown(line.to_string()),
            }
        }
        "+" => index(args).map_or_else(|| Input::Unknown(line.to_string()), Input::Heavier),
        "-" => index(args).map_or_else(|| Input::Unknown(line.to_string()), Input::Lighter),
        "t" => Input::Timer,
        "r" => Input::Reset,
        "rest" => args
            .parse()
            .map_or_else(|_| Input::Unknown(line.to_string()), Input::Rest),
        "sw" => Input::Stopwatch,
        "f" => Input::Finish(args.to_string()),
        "q" => Input::Quit,
        "?" | "h" | "help" => Input::Help,
        _ => Input::Unknown(line.to_string()),
    }
}

/// One based position to index.
fn index(arg: &str) -> Option<usize> {
    arg.parse::<usize>().ok()?.checked_sub(1)
}
