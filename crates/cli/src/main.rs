mod commands;
mod logging;
mod view;

use anteup_core::{
    evaluate_hand, score_hand, Action, BlindKind, Card, EventBus, GameState, HandKind, Phase,
    RunState, ShopItem,
};
use anyhow::Context;
use commands::{parse_command, Command, HELP};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_DECK: &str = "red";
const AUTO_ROUND_LIMIT: u32 = 24;

#[derive(Debug, Clone)]
struct CliOptions {
    auto: bool,
    seed: Option<u64>,
    assets: PathBuf,
    deck: Option<String>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut auto = false;
    let mut seed = None;
    let mut assets = PathBuf::from("assets");
    let mut deck = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => auto = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--assets" => {
                if let Some(value) = args.get(idx + 1) {
                    assets = PathBuf::from(value);
                    idx += 1;
                }
            }
            "--deck" => {
                if let Some(value) = args.get(idx + 1) {
                    deck = Some(value.clone());
                    idx += 1;
                }
            }
            other => tracing::warn!(arg = other, "ignoring unknown argument"),
        }
        idx += 1;
    }
    CliOptions {
        auto,
        seed,
        assets,
        deck,
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    let seed = options.seed.unwrap_or_else(rand::random::<u64>);
    let run = anteup_data::new_run(&options.assets, seed)
        .with_context(|| format!("load assets from {}", options.assets.display()))?;
    println!("seed: {seed}");
    if options.auto {
        run_auto(run, options.deck.as_deref().unwrap_or(DEFAULT_DECK));
        return Ok(());
    }
    run_repl(run, options.deck.as_deref())
}

fn print_events(events: &mut EventBus) {
    for event in events.drain() {
        tracing::debug!(event = %serde_json::to_string(&event).unwrap_or_default(), "event");
        if let Some(line) = view::render_event(&event) {
            println!("> {line}");
        }
    }
}

/// Sends one action and reports a rejection; the run is untouched on error.
fn send(run: &mut RunState, action: Action, events: &mut EventBus) -> bool {
    match run.try_apply(action, events) {
        Ok(()) => true,
        Err(err) => {
            println!("! {err}");
            false
        }
    }
}

fn play_and_reveal(run: &mut RunState, events: &mut EventBus) {
    if !send(run, Action::PlayHand, events) {
        return;
    }
    if let Some(outcome) = run.state().scoring.as_ref() {
        print!("{}", view::render_score_log(outcome));
    }
    send(run, Action::FinishScoring, events);
}

fn run_repl(mut run: RunState, deck: Option<&str>) -> anyhow::Result<()> {
    let mut events = EventBus::default();
    if let Some(deck) = deck {
        send(&mut run, Action::OpenDeckSelect, &mut events);
        send(
            &mut run,
            Action::SelectDeck {
                deck_id: deck.to_string(),
            },
            &mut events,
        );
    }
    println!("{HELP}");
    print!("{}", view::render_state(run.state()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "{:?}> ", run.state().phase).context("write prompt")?;
        stdout.flush().context("flush prompt")?;
        line.clear();
        if stdin.lock().read_line(&mut line).context("read command")? == 0 {
            break;
        }
        let command = match parse_command(&line, run.state()) {
            Ok(command) => command,
            Err(message) => {
                println!("! {message}");
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Show => {}
            Command::Blinds => print!("{}", view::render_blind_options(&run.blind_options())),
            Command::Levels => print!("{}", view::render_hand_levels(&run.state().hand_levels)),
            Command::Toggle(ids) => {
                for card_id in ids {
                    send(&mut run, Action::ToggleCard { card_id }, &mut events);
                }
            }
            Command::Play => play_and_reveal(&mut run, &mut events),
            Command::Dispatch(action) => {
                send(&mut run, action, &mut events);
            }
        }
        print_events(&mut events);
        print!("{}", view::render_state(run.state()));
    }
    Ok(())
}

/// Best-scoring selection of up to five cards from the current hand.
fn best_selection(state: &GameState) -> (Vec<u32>, HandKind, i64) {
    let hand: Vec<Card> = state
        .hand
        .iter()
        .map(|card| Card {
            selected: false,
            ..*card
        })
        .collect();
    let n = hand.len().min(16);
    let mut best: (Vec<u32>, HandKind, i64) = (Vec::new(), HandKind::HighCard, -1);
    for mask in 1u32..(1u32 << n) {
        if mask.count_ones() > 5 {
            continue;
        }
        let mut trial = hand.clone();
        for (idx, card) in trial.iter_mut().enumerate().take(n) {
            card.selected = mask & (1 << idx) != 0;
        }
        let selected: Vec<Card> = trial.iter().copied().filter(|card| card.selected).collect();
        let eval = evaluate_hand(&selected, &state.hand_levels);
        let outcome = score_hand(&eval, &trial, &state.inventory.jokers);
        if outcome.score > best.2 {
            best = (
                selected.iter().map(|card| card.id).collect(),
                outcome.hand,
                outcome.score,
            );
        }
    }
    best
}

fn auto_play_blind(run: &mut RunState, events: &mut EventBus) {
    while run.state().phase == Phase::PlayHand {
        let (ids, kind, score) = best_selection(run.state());
        let state = run.state();
        let remaining = state.goal() - state.current_score;
        let weak = kind == HandKind::HighCard || score * i64::from(state.hands_left) < remaining;
        let action = if weak && state.discards_left > 0 && state.hands_left > 1 {
            let mut discard: Vec<u32> = state
                .hand
                .iter()
                .filter(|card| !ids.contains(&card.id))
                .map(|card| card.id)
                .collect();
            discard.truncate(5);
            if discard.is_empty() {
                Action::PlayHand
            } else {
                for card_id in discard {
                    send(run, Action::ToggleCard { card_id }, events);
                }
                Action::Discard
            }
        } else {
            for &card_id in &ids {
                send(run, Action::ToggleCard { card_id }, events);
            }
            Action::PlayHand
        };
        println!("{} ({kind:?} worth {score})", action.label());
        if action == Action::PlayHand {
            play_and_reveal(run, events);
        } else {
            send(run, action, events);
        }
        print_events(events);
    }
}

fn auto_shop(run: &mut RunState, events: &mut EventBus) {
    loop {
        let state = run.state();
        let Some(shop) = state.shop.as_ref() else {
            return;
        };
        let pick = shop.offers.iter().position(|offer| {
            offer.cost <= state.money
                && match &offer.item {
                    ShopItem::Joker(def) => {
                        !state.inventory.jokers_full() && !def.kind.is_placeholder()
                    }
                    ShopItem::Consumable(def) => {
                        !state.inventory.consumables_full() && !def.effect.needs_target()
                    }
                }
        });
        let Some(index) = pick else {
            return;
        };
        if !send(run, Action::BuyItem { index }, events) {
            return;
        }
        // planets need no target, so use them straight away
        let slot = run.state().inventory.consumables.len().saturating_sub(1);
        if run
            .state()
            .inventory
            .consumables
            .get(slot)
            .is_some_and(|item| !item.effect.needs_target())
        {
            send(
                run,
                Action::UseConsumable {
                    index: slot,
                    target: None,
                },
                events,
            );
        }
        print_events(events);
    }
}

fn run_auto(mut run: RunState, deck: &str) {
    let mut events = EventBus::default();
    send(&mut run, Action::OpenDeckSelect, &mut events);
    if !send(
        &mut run,
        Action::SelectDeck {
            deck_id: deck.to_string(),
        },
        &mut events,
    ) {
        return;
    }
    while run.state().round <= AUTO_ROUND_LIMIT {
        let blind = BlindKind::for_round(run.state().round);
        send(&mut run, Action::SelectBlind { blind }, &mut events);
        print_events(&mut events);
        auto_play_blind(&mut run, &mut events);
        if run.state().phase != Phase::Victory {
            break;
        }
        send(&mut run, Action::EndRound, &mut events);
        auto_shop(&mut run, &mut events);
        send(&mut run, Action::AdvanceRound, &mut events);
        print_events(&mut events);
        print!("{}", view::render_state(run.state()));
    }
    let state = run.state();
    println!(
        "finished: {:?} at ante {} round {} with ${}",
        state.phase, state.ante, state.round, state.money
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn options_parse_flags_and_values() {
        let options = parse_cli_options(&args(&[
            "--auto", "--seed", "42", "--deck", "green", "--assets", "data",
        ]));
        assert!(options.auto);
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.deck.as_deref(), Some("green"));
        assert_eq!(options.assets, PathBuf::from("data"));
    }

    #[test]
    fn bad_seed_falls_back_to_random() {
        let options = parse_cli_options(&args(&["--seed", "soon"]));
        assert_eq!(options.seed, None);
        assert!(!options.auto);
    }
}
