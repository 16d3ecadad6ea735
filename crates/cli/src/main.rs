//! Interactive game loop.
//!
//! Reads commands from stdin, one per line:
//!
//! - `new`            start a fresh game (manual/auto settings persist)
//! - `auto <side>`    let the machine play black or white
//! - `manual <side>`  take a side back from the machine
//! - `limit N`        cap the game at N moves per side
//! - `dump`           print the board
//! - `moves`          list the legal moves for the side on move
//! - `undo`           take back moves until a manual side is on move
//! - `f3-d5`          play a move for the side on move
//! - `quit`           exit
//!
//! Machine moves are echoed as `* f3-d5`.

use std::io::{self, BufRead, Write};

use loa_core::{parse_move, Board, Piece};
use machine_engine::MachinePlayer;

struct Session {
    board: Board,
    auto_black: bool,
    auto_white: bool,
    machine: MachinePlayer,
    playing: bool,
}

impl Session {
    fn new() -> Self {
        Self {
            board: Board::new(),
            auto_black: false,
            auto_white: true,
            machine: MachinePlayer::new(),
            playing: true,
        }
    }

    fn is_auto(&self, side: Piece) -> bool {
        match side {
            Piece::Black => self.auto_black,
            Piece::White => self.auto_white,
            Piece::Empty => false,
        }
    }

    fn set_auto(&mut self, side: &str, auto: bool) {
        match side {
            "black" | "b" => self.auto_black = auto,
            "white" | "w" => self.auto_white = auto,
            _ => println!("Unknown side: {}", side),
        }
    }

    /// Let the machine play for as long as the side on move is automated.
    fn step_machine_moves(&mut self) {
        loop {
            if !self.playing {
                break;
            }
            if self.board.game_over() {
                self.announce_result();
                break;
            }
            if !self.is_auto(self.board.turn()) {
                break;
            }
            match self.machine.choose_move(&self.board) {
                Some(mv) => {
                    self.board.make_move(mv);
                    println!("* {}", mv);
                }
                None => break,
            }
        }
    }

    fn announce_result(&mut self) {
        self.playing = false;
        match self.board.winner() {
            Some(Piece::Black) => println!("Black wins."),
            Some(Piece::White) => println!("White wins."),
            Some(Piece::Empty) => println!("Tie game."),
            None => {}
        }
    }

    fn try_move(&mut self, text: &str) {
        if !self.playing {
            println!("Game is over. Type new to start another.");
            return;
        }
        let mv = match parse_move(text) {
            Ok(mv) => mv,
            Err(e) => {
                println!("{}", e);
                return;
            }
        };
        if self.is_auto(self.board.turn()) {
            println!("The {} side is automated.", self.board.turn().full_name());
            return;
        }
        if !self.board.is_legal_move(mv) {
            println!("Illegal move.");
            return;
        }
        self.board.make_move(mv);
        self.step_machine_moves();
    }

    fn undo(&mut self) {
        while !self.board.moves().is_empty() {
            self.board.retract();
            if !self.is_auto(self.board.turn()) {
                break;
            }
        }
        self.playing = true;
    }

    fn list_moves(&self) {
        let moves = self.board.legal_moves();
        if moves.is_empty() {
            println!("No legal moves.");
            return;
        }
        let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        println!("{}", listed.join(" "));
    }
}

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "new" => {
                session.board = Board::new();
                session.playing = true;
                session.step_machine_moves();
            }
            "auto" if parts.len() == 2 => {
                session.set_auto(parts[1], true);
                session.step_machine_moves();
            }
            "manual" if parts.len() == 2 => {
                session.set_auto(parts[1], false);
            }
            "limit" if parts.len() == 2 => match parts[1].parse::<usize>() {
                Ok(limit) => {
                    if let Err(e) = session.board.set_move_limit(limit) {
                        println!("{}", e);
                    }
                }
                Err(_) => println!("Bad limit: {}", parts[1]),
            },
            "dump" => println!("{}", session.board),
            "moves" => session.list_moves(),
            "undo" => session.undo(),
            "quit" | "q" => break,
            text if text.contains('-') => session.try_move(text),
            _ => println!("Unknown command: {}", parts[0]),
        }
        stdout.flush().ok();
    }
}
