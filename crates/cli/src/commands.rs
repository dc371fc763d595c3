use anteup_core::{Action, BlindKind, GameState, SortOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Blinds,
    Levels,
    Quit,
    Toggle(Vec<u32>),
    /// Plays the selection and reveals the score before committing it.
    Play,
    Dispatch(Action),
}

pub const HELP: &str = "\
commands:
  new                 open deck select
  deck <id>           choose a deck (red, blue, yellow, green, black)
  blinds              list this ante's blinds
  levels              list hand levels
  blind [small|big|boss]
  t <id> [id...]      toggle cards by id
  play | discard
  sort rank|suit
  use <slot> [card]   use a consumable, optionally on a card id
  end                 collect the round payout and open the shop
  buy <index> | reroll
  next                leave the shop
  menu                abandon the run
  show | help | quit";

pub fn parse_command(line: &str, state: &GameState) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(Command::Show);
    };
    let args: Vec<&str> = parts.collect();
    let command = match head {
        "help" | "h" | "?" => Command::Help,
        "show" | "s" => Command::Show,
        "blinds" => Command::Blinds,
        "levels" | "l" => Command::Levels,
        "quit" | "q" | "exit" => Command::Quit,
        "new" => Command::Dispatch(Action::OpenDeckSelect),
        "deck" => Command::Dispatch(Action::SelectDeck {
            deck_id: args.first().ok_or("deck needs an id")?.to_string(),
        }),
        "blind" => {
            let blind = match args.first() {
                None => BlindKind::for_round(state.round),
                Some(name) => parse_blind(name)?,
            };
            Command::Dispatch(Action::SelectBlind { blind })
        }
        "t" | "toggle" => {
            if args.is_empty() {
                return Err("toggle needs at least one card id".to_string());
            }
            let ids = args
                .iter()
                .map(|arg| parse_number::<u32>(arg))
                .collect::<Result<Vec<_>, _>>()?;
            Command::Toggle(ids)
        }
        "play" | "p" => Command::Play,
        "discard" | "d" => Command::Dispatch(Action::Discard),
        "sort" => {
            let order = match args.first().copied() {
                Some("suit") => SortOrder::Suit,
                Some("rank") | None => SortOrder::Rank,
                Some(other) => return Err(format!("unknown sort order {other}")),
            };
            Command::Dispatch(Action::SortHand { order })
        }
        "use" | "u" => {
            let index = parse_number::<usize>(args.first().ok_or("use needs a slot")?)?;
            let target = args.get(1).map(|arg| parse_number::<u32>(arg)).transpose()?;
            Command::Dispatch(Action::UseConsumable { index, target })
        }
        "end" => Command::Dispatch(Action::EndRound),
        "buy" | "b" => {
            let index = parse_number::<usize>(args.first().ok_or("buy needs an index")?)?;
            Command::Dispatch(Action::BuyItem { index })
        }
        "reroll" | "r" => Command::Dispatch(Action::RerollShop),
        "next" | "n" => Command::Dispatch(Action::AdvanceRound),
        "menu" => Command::Dispatch(Action::GameOver),
        other => return Err(format!("unknown command {other}, try help")),
    };
    Ok(command)
}

fn parse_blind(name: &str) -> Result<BlindKind, String> {
    match name {
        "small" => Ok(BlindKind::Small),
        "big" => Ok(BlindKind::Big),
        "boss" => Ok(BlindKind::Boss),
        other => Err(format!("unknown blind {other}")),
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Result<T, String> {
    raw.trim_start_matches('#')
        .parse::<T>()
        .map_err(|_| format!("not a number: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! command_case {
        ($name:ident, $line:expr, $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!(parse_command($line, &GameState::new()), Ok($expected));
            }
        };
    }

    command_case!(empty_line_shows_state, "   ", Command::Show);
    command_case!(levels_table, "levels", Command::Levels);
    command_case!(toggle_many, "t 3 #17 4", Command::Toggle(vec![3, 17, 4]));
    command_case!(
        default_blind_is_scheduled,
        "blind",
        Command::Dispatch(Action::SelectBlind {
            blind: BlindKind::Small
        })
    );
    command_case!(
        use_with_target,
        "use 1 42",
        Command::Dispatch(Action::UseConsumable {
            index: 1,
            target: Some(42)
        })
    );
    command_case!(
        use_without_target,
        "u 0",
        Command::Dispatch(Action::UseConsumable {
            index: 0,
            target: None
        })
    );
    command_case!(
        sort_by_suit,
        "sort suit",
        Command::Dispatch(Action::SortHand {
            order: SortOrder::Suit
        })
    );

    #[test]
    fn bad_input_is_reported() {
        let state = GameState::new();
        assert!(parse_command("buy x", &state).is_err());
        assert!(parse_command("t", &state).is_err());
        assert!(parse_command("dance", &state).is_err());
        assert!(parse_command("blind huge", &state).is_err());
    }
}
