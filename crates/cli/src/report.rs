// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Textual hand report.
use std::io::{self, Write};

use riverlog_replay::{Event, Hand, Player};

/// Renders one hand report.
pub fn render<W: Write>(out: &mut W, hand: &Hand) -> io::Result<()> {
    writeln!(
        out,
        "{}  {}  blinds {}/{}  dealer {}",
        hand.title, hand.starting_time, hand.small_blind, hand.big_blind, hand.dealer
    )?;

    for player in &hand.players {
        render_player(out, player)?;
    }

    writeln!(out)?;
    for event in hand.events.iter().filter(|e| e.display) {
        render_event(out, hand, event)?;
    }

    let board = hand
        .board
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "\n  Board [{board}]")?;

    let winners = hand
        .winners
        .iter()
        .filter_map(|&seat| hand.player(seat))
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "  Pot {} to {}\n", hand.pot, winners)
}

fn render_player<W: Write>(out: &mut W, player: &Player) -> io::Result<()> {
    let pocket = if player.pocket.is_hidden() {
        "--".to_string()
    } else {
        player.pocket.to_string()
    };

    let outcome = if player.winner {
        player
            .strength
            .map(|s| format!("wins with {s}"))
            .unwrap_or_else(|| "wins".to_string())
    } else if player.folded {
        "folded".to_string()
    } else {
        player
            .strength
            .map(|s| s.to_string())
            .unwrap_or_default()
    };

    writeln!(
        out,
        "  {}  {:<12} {:>9} -> {:>9}  {:<5}  {}",
        player.seat, player.name, player.starting_stack, player.ending_stack, pocket, outcome
    )
}

fn render_event<W: Write>(out: &mut W, hand: &Hand, event: &Event) -> io::Result<()> {
    let mut line = event.description.clone();
    if let Some(card) = event.card {
        line = format!("{line} {card}");
    }

    write!(out, "  {}  {:<28} pot {:>9}", event.time, line, event.pot)?;

    if let Some(equities) = &event.equities {
        let mut equities = equities.iter().collect::<Vec<_>>();
        equities.sort_by_key(|(seat, _)| **seat);

        for (seat, pct) in equities {
            if let Some(player) = hand.player(*seat) {
                write!(out, "  {} {:.1}%", player.name, pct)?;
            }
        }
    }

    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use riverlog_replay::{parse_record, replay, split_record};

    #[test]
    fn render_hand_report() {
        let mut fields = split_record("12:00:00,Hand 7,,10,20,Dealer,1,2");
        for seat in 1..=10 {
            let player = match seat {
                1 => "Alice,0,ah ad,1000".to_string(),
                2 => "Bob,0,kh kc,1000".to_string(),
                _ => format!("SEAT {seat},,,0"),
            };
            fields.extend(split_record(&player));
        }
        for event in [
            "12:00:01,CALL,1,,",
            "12:00:02,BET,2,,0",
            "12:00:03,BOARD,,10h,",
            "12:00:04,BOARD,,10c,",
            "12:00:05,BOARD,,5d,",
            "12:00:06,BOARD,,2s,",
            "12:00:07,BOARD,,7h,",
            "12:00:08,BET,1,,0",
            "12:00:09,BET,2,,0",
        ] {
            fields.extend(split_record(event));
        }

        let mut hand = parse_record(&fields).unwrap().unwrap();
        replay(&mut hand, true).unwrap();

        let mut out = Vec::new();
        render(&mut out, &hand).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.contains("Hand 7"));
        assert!(report.contains("Alice"));
        assert!(report.contains("Flop 5D"));
        assert!(report.contains("Board [TH TC 5D 2S 7H]"));
        assert!(report.contains("wins with Two Pairs"));
        assert!(report.contains("Alice 100.0%"));
    }
}
